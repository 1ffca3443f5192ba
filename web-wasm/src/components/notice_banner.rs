//! 通知バナーコンポーネント

use leptos::prelude::*;
use crate::app::AppState;

#[component]
pub fn NoticeBanner(state: AppState) -> impl IntoView {
    let notice = move || state.with(|s| s.notice().cloned());

    view! {
        {move || notice().map(|notice| {
            view! {
                <div class=format!("notice notice-{}", notice.kind()) role="status">
                    <span>{notice.message()}</span>
                    <button
                        class="notice-close"
                        aria-label="close"
                        on:click=move |_| {
                            state.update(|s| {
                                s.take_notice();
                            });
                        }
                    >
                        "×"
                    </button>
                </div>
            }
        })}
    }
}
