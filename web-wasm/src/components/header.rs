//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"✨ AI Tamil Proof-reader"</h1>
        </header>
    }
}
