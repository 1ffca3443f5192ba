//! 分類絞り込みドロップダウン

use leptos::prelude::*;
use proofread_common::{count_by_category, CategoryFilter, Mistake};
use crate::app::AppState;

/// 選択肢の表示名（件数付き）
pub fn option_label(filter: CategoryFilter, mistakes: &[Mistake]) -> String {
    let count = match filter {
        CategoryFilter::All => mistakes.len(),
        CategoryFilter::Only(category) => count_by_category(mistakes)
            .into_iter()
            .find(|(c, _)| *c == category)
            .map(|(_, n)| n)
            .unwrap_or(0),
    };
    if mistakes.is_empty() {
        filter.label().to_string()
    } else {
        format!("{} ({})", filter.label(), count)
    }
}

#[component]
pub fn FilterSelect(state: AppState) -> impl IntoView {
    let has_mistakes = move || state.with(|s| s.has_mistakes());

    view! {
        <div class="filter-select">
            <select
                id="category-filter"
                disabled=move || !has_mistakes()
                on:change=move |ev| {
                    if let Ok(filter) = event_target_value(&ev).parse::<CategoryFilter>() {
                        state.update(|s| s.set_filter(filter));
                    }
                }
            >
                {CategoryFilter::options()
                    .map(|filter| {
                        view! {
                            <option
                                value=filter.as_str()
                                selected=move || state.with(|s| s.filter()) == filter
                            >
                                {move || state.with(|s| {
                                    let mistakes = s.result().map(|r| r.mistakes.as_slice()).unwrap_or(&[]);
                                    option_label(filter, mistakes)
                                })}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
