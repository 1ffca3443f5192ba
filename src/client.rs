//! 校正サービスへのアップロード

use crate::config::Config;
use crate::error::{ProofreadError, Result};
use proofread_common::{mime_type_for_extension, Error as ServiceError, SUPPORTED_EXTENSIONS};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// アップロード対象の文書
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub path: PathBuf,
    pub file_name: String,
    pub extension: String,
}

impl Document {
    /// 存在と拡張子のみ確認する（内容の解析はサービス側）
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(ProofreadError::FileNotFound(path.display().to_string()));
        }

        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        if !SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(ProofreadError::UnsupportedFile(path.display().to_string()));
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| format!("document.{}", extension));

        Ok(Self {
            path: path.to_path_buf(),
            file_name,
            extension,
        })
    }

    pub fn mime_type(&self) -> &'static str {
        mime_type_for_extension(&self.extension)
    }
}

pub struct ProofreadClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ProofreadClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// 文書をmultipart（フィールド名 `file`）で送信し、レスポンス本体を返す
    ///
    /// 通信失敗・2xx以外のステータスは `NetworkFailure`。
    /// 本体の解析は呼び出し側（ViewState::finish_upload）で行う。
    pub async fn upload(&self, document: &Document) -> std::result::Result<String, ServiceError> {
        let content = tokio::fs::read(&document.path)
            .await
            .map_err(|e| ServiceError::NetworkFailure(format!("{}: {}", document.path.display(), e)))?;
        tracing::debug!(file = %document.file_name, bytes = content.len(), endpoint = %self.endpoint, "uploading document");

        let part = reqwest::multipart::Part::bytes(content)
            .file_name(document.file_name.clone())
            .mime_str(document.mime_type())
            .map_err(network_failure)?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(network_failure)?;

        let status = response.status();
        let body = response.text().await.map_err(network_failure)?;
        tracing::debug!(%status, bytes = body.len(), "response received");

        if !status.is_success() {
            return Err(ServiceError::NetworkFailure(format!("HTTP {}: {}", status, body.trim())));
        }
        Ok(body)
    }
}

fn network_failure(e: reqwest::Error) -> ServiceError {
    if e.is_timeout() {
        ServiceError::NetworkFailure(format!("タイムアウトしました: {}", e))
    } else {
        ServiceError::NetworkFailure(e.to_string())
    }
}
