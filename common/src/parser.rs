//! 校正サービスのレスポンスパーサー
//!
//! レスポンス文字列に埋め込まれたJSONオブジェクトを抽出し、
//! ProofreadResultにマッピングする

use crate::error::{Error, Result};
use crate::types::{ProofreadResult, ServiceEnvelope};

/// レスポンスからJSONオブジェクト部分を抽出
///
/// 最初の `{` から最後の `}` までを返す（間の説明文も含めて貪欲に取る）。
///
/// # Arguments
/// * `response` - 説明文付きの可能性があるレスポンス文字列
///
/// # Returns
/// * `Some(&str)` - 抽出されたJSON候補
/// * `None` - `{` の後ろに `}` が無い場合
///
/// # Examples
/// ```
/// use proofread_common::extract_json_object;
///
/// let response = "Here you go: {\"key\": \"value\"} done";
/// assert_eq!(extract_json_object(response), Some("{\"key\": \"value\"}"));
/// assert_eq!(extract_json_object("no braces"), None);
/// ```
pub fn extract_json_object(response: &str) -> Option<&str> {
    let start = response.find('{')?;
    let end = response.rfind('}')?;
    if end > start {
        Some(&response[start..=end])
    } else {
        None
    }
}

/// 埋め込みJSONを校正結果としてパース
///
/// # Returns
/// * `Ok(Some(result))` - パース成功
/// * `Ok(None)` - JSONオブジェクトが見つからない（呼び出し側で失敗扱い）
/// * `Err(MalformedResponse)` - JSONとして不正、または必須フィールド欠落
pub fn extract_result(raw: &str) -> Result<Option<ProofreadResult>> {
    let Some(json_str) = extract_json_object(raw) else {
        return Ok(None);
    };

    let result: ProofreadResult = serde_json::from_str(json_str)
        .map_err(|e| Error::MalformedResponse(format!("校正結果JSONパースエラー: {}", e)))?;
    Ok(Some(result))
}

/// HTTPレスポンス本体をパース
///
/// 本体は `{"result": "..."}` 形式で、resultの文字列に校正結果JSONが埋め込まれている
pub fn parse_service_response(body: &str) -> Result<ProofreadResult> {
    let envelope: ServiceEnvelope = serde_json::from_str(body)
        .map_err(|e| Error::MalformedResponse(format!("レスポンス本体パースエラー: {}", e)))?;

    extract_result(&envelope.result)?
        .ok_or_else(|| Error::MalformedResponse("JSONが見つかりません".into()))
}
