//! メインアプリケーションコンポーネント

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlElement, HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use proofread_common::{FocusTarget, RenderMode, UploadOutcome, ViewState};
use crate::api::proofread::upload_document;
use crate::components::{
    header::Header,
    notice_banner::NoticeBanner,
    upload_panel::UploadPanel,
    filter_select::FilterSelect,
    text_pane::TextPane,
};

/// アプリケーションの状態
///
/// web_sys::FileはSendでないためローカルストレージのシグナルに置く
pub type AppState = RwSignal<ViewState<File>, LocalStorage>;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let state: AppState = RwSignal::new_local(ViewState::new());
    let scroll_target = NodeRef::<html::Div>::new();

    // アップロード開始ハンドラ（ボタンとEnterキーで共用）
    let on_upload = move |_: ()| {
        let Some(Ok(file)) = state.try_update(|s| s.begin_upload()) else {
            // ファイル未選択（通知済み）またはアップロード中
            return;
        };

        spawn_local(async move {
            let response = upload_document(&file).await;
            let (outcome, scroll) = state
                .try_update(|s| (s.finish_upload(response), s.take_scroll_request()))
                .unwrap_or((UploadOutcome::Ignored, false));

            if let UploadOutcome::Failed(error) = &outcome {
                gloo::console::error!(format!("proof-read failed: {}", error));
            }
            if scroll {
                scroll_into_view(scroll_target);
            }
        });
    };

    // グローバルEnterキー（画面の表示中のみ有効）
    let handle = window_event_listener(ev::keydown, move |ev| {
        let focus = focus_target(&ev);
        if state.with_untracked(|s| s.should_submit_on_key(&ev.key(), &focus)) {
            ev.prevent_default();
            on_upload(());
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class="page">
            <div class="bubbles" aria-hidden="true">
                <div class="bubble bubble-1"></div>
                <div class="bubble bubble-2"></div>
                <div class="bubble bubble-3"></div>
            </div>

            <div class="container">
                <Header />

                <NoticeBanner state=state />

                <UploadPanel state=state on_upload=on_upload />

                <FilterSelect state=state />

                <div node_ref=scroll_target id="scroll-target"></div>

                <div class="panes">
                    <TextPane title="📘 Original" mode=RenderMode::Original state=state />
                    <TextPane title="✔ Corrected" mode=RenderMode::Corrected state=state copyable=true />
                </div>
            </div>
        </div>
    }
}

/// イベント発生元の要素からフォーカス情報を作る
fn focus_target(ev: &web_sys::Event) -> FocusTarget {
    let Some(element) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
        return FocusTarget::default();
    };

    FocusTarget {
        tag: element.tag_name(),
        input_type: element.dyn_ref::<HtmlInputElement>().map(|input| input.type_()),
        content_editable: element
            .dyn_ref::<HtmlElement>()
            .is_some_and(|e| e.is_content_editable()),
    }
}

fn scroll_into_view(target: NodeRef<html::Div>) {
    if let Some(element) = target.get_untracked() {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Center);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn event_from(element: &web_sys::Element) -> web_sys::Event {
        let event = web_sys::Event::new("keydown").unwrap();
        element.dispatch_event(&event).unwrap();
        event
    }

    #[wasm_bindgen_test]
    fn test_focus_target_textarea() {
        let document = web_sys::window().unwrap().document().unwrap();
        let textarea = document.create_element("textarea").unwrap();
        document.body().unwrap().append_child(&textarea).unwrap();

        let focus = focus_target(&event_from(&textarea));
        assert!(focus.is_text_entry());
    }

    #[wasm_bindgen_test]
    fn test_focus_target_file_input() {
        let document = web_sys::window().unwrap().document().unwrap();
        let input: HtmlInputElement = document.create_element("input").unwrap().dyn_into().unwrap();
        input.set_type("file");
        document.body().unwrap().append_child(&input).unwrap();

        let focus = focus_target(&event_from(&input));
        assert_eq!(focus.tag, "INPUT");
        assert!(!focus.is_text_entry());
    }
}
