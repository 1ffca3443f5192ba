//! 分類による誤りの絞り込み

use std::fmt;
use std::str::FromStr;

use crate::notice::Notice;
use crate::types::{Category, Mistake};

/// 絞り込み条件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, mistake: &Mistake) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => mistake.category == *category,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Mistakes",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    /// "all" を先頭にした選択肢一覧
    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse::<Category>()
            .map(CategoryFilter::Only)
            .map_err(|_| format!("Unknown filter: {}. Use all, spelling, grammar, punctuation, quotation, spacing or formatting", s))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 誤りを絞り込む（元の順序を保持）
pub fn filter_mistakes(mistakes: &[Mistake], filter: CategoryFilter) -> Vec<Mistake> {
    match filter {
        CategoryFilter::All => mistakes.to_vec(),
        CategoryFilter::Only(_) => mistakes.iter().filter(|m| filter.matches(m)).cloned().collect(),
    }
}

/// 絞り込みで0件になったときの分類別通知
///
/// 全体が0件の場合は通知しない（「文書に誤りなし」は別の通知で扱う）
pub fn empty_filter_notice(mistakes: &[Mistake], filter: CategoryFilter) -> Option<Notice> {
    match filter {
        CategoryFilter::All => None,
        CategoryFilter::Only(category) => {
            if !mistakes.is_empty() && !mistakes.iter().any(|m| filter.matches(m)) {
                Some(Notice::EmptyCategory(category))
            } else {
                None
            }
        }
    }
}

/// 分類ごとの件数（Category::ALLの順）
pub fn count_by_category(mistakes: &[Mistake]) -> Vec<(Category, usize)> {
    Category::ALL
        .iter()
        .map(|&category| {
            let count = mistakes.iter().filter(|m| m.category == category).count();
            (category, count)
        })
        .collect()
}
