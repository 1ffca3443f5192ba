//! Tamil Proof-reader Common Library
//!
//! CLIとWeb(WASM)で共有される型・パーサー・ハイライト描画・状態管理

pub mod types;
pub mod error;
pub mod parser;
pub mod filter;
pub mod render;
pub mod notice;
pub mod keyboard;
pub mod orchestrator;

pub use types::{Category, Mistake, ProofreadResult, ServiceEnvelope};
pub use error::{Error, Result};
pub use parser::{extract_json_object, extract_result, parse_service_response};
pub use filter::{count_by_category, empty_filter_notice, filter_mistakes, CategoryFilter};
pub use render::{render_annotated, RenderMode, Rendered};
pub use notice::Notice;
pub use keyboard::FocusTarget;
pub use orchestrator::{UploadOutcome, UploadPhase, ViewState};

/// 校正サービスの既定のエンドポイント
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/proofread-file";

/// アップロード可能な拡張子
pub const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "docx", "txt"];

/// 拡張子からMIMEタイプを決める
pub fn mime_type_for_extension(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        "pdf" => "application/pdf",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}
