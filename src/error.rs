use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProofreadError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("対応していないファイル形式です: {0}（.pdf / .docx / .txt のみ）")]
    UnsupportedFile(String),

    #[error(transparent)]
    Proofread(#[from] proofread_common::Error),

    #[error("クリップボードエラー: {0}")]
    Clipboard(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for ProofreadError {
    fn from(e: reqwest::Error) -> Self {
        ProofreadError::Proofread(proofread_common::Error::NetworkFailure(e.to_string()))
    }
}

pub type Result<T> = std::result::Result<T, ProofreadError>;
