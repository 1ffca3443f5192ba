//! 修正文コピーボタン

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;
use crate::app::AppState;

#[component]
pub fn CopyButton(state: AppState) -> impl IntoView {
    let on_click = move |_| {
        let Some(text) = state.with_untracked(|s| s.copy_text().map(str::to_string)) else {
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };

        let promise = window.navigator().clipboard().write_text(&text);
        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => state.update(|s| s.mark_copied()),
                Err(e) => gloo::console::error!("clipboard write failed", e),
            }
        });
    };

    view! {
        <button
            class="btn btn-small"
            disabled=move || state.with(|s| s.copy_text().is_none())
            on:click=on_click
        >
            "📄 Copy"
        </button>
    }
}
