//! 原文/修正文ペイン

use leptos::prelude::*;
use proofread_common::RenderMode;
use crate::app::AppState;
use crate::components::copy_button::CopyButton;

#[component]
pub fn TextPane(
    title: &'static str,
    mode: RenderMode,
    state: AppState,
    #[prop(optional)] copyable: bool,
) -> impl IntoView {
    // Plainの本文はエスケープ済みで埋め込まれる
    let html = move || {
        state.with(|s| match mode {
            RenderMode::Original => s.original_view(),
            RenderMode::Corrected => s.corrected_view(),
        })
        .to_html()
    };

    view! {
        <section class="pane">
            <div class="pane-header">
                <h2>{title}</h2>
                <Show when=move || copyable>
                    <CopyButton state=state />
                </Show>
            </div>
            <div class="pane-text" inner_html=html></div>
        </section>
    }
}
