//! 校正サービスへのアップロード
//!
//! 選択したファイルをmultipart（フィールド名 `file`）で送信し、
//! レスポンス本体の文字列を返す。本体の解析は ViewState::finish_upload で行う。

use proofread_common::{Error, DEFAULT_ENDPOINT};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

/// ファイルをアップロード
///
/// # Returns
/// * `Ok(String)` - レスポンス本体
/// * `Err(NetworkFailure)` - 通信失敗、または2xx以外のステータス
pub async fn upload_document(file: &File) -> Result<String, Error> {
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(js_error)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(DEFAULT_ENDPOINT, &opts).map_err(js_error)?;

    let window = web_sys::window()
        .ok_or_else(|| Error::NetworkFailure("window is not available".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?
        .as_string()
        .unwrap_or_default();

    if !resp.ok() {
        return Err(Error::NetworkFailure(http_error_message(resp.status(), &text)));
    }

    Ok(text)
}

/// 2xx以外のステータスのメッセージ
pub fn http_error_message(status: u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        format!("HTTP {}", status)
    } else {
        format!("HTTP {}: {}", status, body)
    }
}

fn js_error(value: JsValue) -> Error {
    let message = value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value));
    Error::NetworkFailure(message)
}
