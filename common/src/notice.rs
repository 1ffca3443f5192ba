//! ユーザー向け通知

use crate::types::Category;

pub const NO_FILE_MESSAGE: &str = "Upload a document da!";
pub const CLEAN_MESSAGE: &str = "No mistakes found in the document. It is clean! 💛";
pub const COPIED_MESSAGE: &str = "Corrected Tamil text copied 💛";

/// 画面に一度だけ表示する通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    NoFileSelected,
    DocumentClean,
    /// 分類で絞り込んだ結果が0件（エラーではない）
    EmptyCategory(Category),
    Copied,
    NetworkFailure(String),
    MalformedResponse(String),
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::NoFileSelected => NO_FILE_MESSAGE.to_string(),
            Notice::DocumentClean => CLEAN_MESSAGE.to_string(),
            Notice::EmptyCategory(category) => category.empty_message().to_string(),
            Notice::Copied => COPIED_MESSAGE.to_string(),
            Notice::NetworkFailure(detail) => {
                format!("Could not reach the proof-reading service: {}", detail)
            }
            Notice::MalformedResponse(detail) => {
                format!("The proof-reading service returned an unreadable answer: {}", detail)
            }
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::NetworkFailure(_) | Notice::MalformedResponse(_))
    }

    /// CSSクラス名
    pub fn kind(&self) -> &'static str {
        if self.is_error() {
            "error"
        } else {
            "info"
        }
    }
}
