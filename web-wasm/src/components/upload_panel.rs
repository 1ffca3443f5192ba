//! アップロードパネルコンポーネント

use leptos::prelude::*;
use web_sys::HtmlInputElement;
use proofread_common::SUPPORTED_EXTENSIONS;
use crate::app::AppState;

/// input要素のaccept属性（".pdf,.docx,.txt"）
pub fn accept_attribute() -> String {
    SUPPORTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(",")
}

#[component]
pub fn UploadPanel<F>(
    state: AppState,
    on_upload: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    let is_loading = move || state.with(|s| s.is_loading());

    let on_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));
        state.update(|s| match file {
            Some(file) => s.select_file(file),
            None => s.clear_file(),
        });
    };

    view! {
        <div class="upload-panel">
            <input
                type="file"
                accept=accept_attribute()
                class="file-input"
                on:change=on_change
            />

            <button
                class="btn btn-primary"
                disabled=is_loading
                on:click={
                    let on_upload = on_upload.clone();
                    move |_| on_upload(())
                }
            >
                {move || if is_loading() { "Analyzing Document…" } else { "Upload & Proof-read" }}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_attribute() {
        assert_eq!(accept_attribute(), ".pdf,.docx,.txt");
    }
}
