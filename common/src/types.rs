//! 校正結果の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Category: 誤りの分類（閉じた6種類）
//! - Mistake: 1件の誤り（誤記・修正・分類）
//! - ProofreadResult: 1回のアップロードで得られる校正結果
//! - ServiceEnvelope: 校正サービスのHTTPレスポンス本体

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// 誤りの分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Category {
    Spelling,
    Grammar,
    Punctuation,
    Quotation,
    Spacing,
    Formatting,
}

impl Category {
    /// 表示順（ドロップダウン・集計で使用）
    pub const ALL: [Category; 6] = [
        Category::Spelling,
        Category::Grammar,
        Category::Punctuation,
        Category::Quotation,
        Category::Spacing,
        Category::Formatting,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Spelling => "spelling",
            Category::Grammar => "grammar",
            Category::Punctuation => "punctuation",
            Category::Quotation => "quotation",
            Category::Spacing => "spacing",
            Category::Formatting => "formatting",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Spelling => "Spelling",
            Category::Grammar => "Grammar",
            Category::Punctuation => "Punctuation",
            Category::Quotation => "Quotation",
            Category::Spacing => "Spacing",
            Category::Formatting => "Formatting",
        }
    }

    /// 絞り込み結果が0件のときに表示する分類別メッセージ
    pub fn empty_message(&self) -> &'static str {
        match self {
            Category::Spelling => "No spelling mistakes found 💛",
            Category::Grammar => "No grammar mistakes found 💛",
            Category::Punctuation => "No punctuation mistakes found 💛",
            Category::Quotation => "No quotation errors found 💛",
            Category::Spacing => "No spacing issues found 💛",
            Category::Formatting => "No formatting mistakes found 💛",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "spelling" => Ok(Category::Spelling),
            "grammar" => Ok(Category::Grammar),
            "punctuation" => Ok(Category::Punctuation),
            "quotation" => Ok(Category::Quotation),
            "spacing" => Ok(Category::Spacing),
            "formatting" => Ok(Category::Formatting),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

impl TryFrom<String> for Category {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 1件の誤り
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mistake {
    /// 原文中の誤記（前後の空白を除いて原文と一致する）
    pub wrong: String,

    /// 修正文中の置き換え後の文字列
    pub correct: String,

    pub category: Category,

    /// 行番号（参考情報。照合には使わない）
    #[serde(default, deserialize_with = "lenient_line_number", skip_serializing_if = "Option::is_none")]
    pub line_number: Option<u32>,
}

impl Mistake {
    pub fn new(wrong: impl Into<String>, correct: impl Into<String>, category: Category) -> Self {
        Self {
            wrong: wrong.into(),
            correct: correct.into(),
            category,
            line_number: None,
        }
    }
}

/// 行番号は数値・数値文字列・nullのいずれでも受け付け、それ以外はNone
fn lenient_line_number<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// 分類を文字列のまま受け取る誤り（読み込み時のみ使用）
#[derive(Deserialize)]
struct RawMistake {
    wrong: String,
    correct: String,
    category: String,
    #[serde(default, deserialize_with = "lenient_line_number")]
    line_number: Option<u32>,
}

fn known_category_mistakes<'de, D>(deserializer: D) -> Result<Vec<Mistake>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<RawMistake>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|m| match m.category.parse::<Category>() {
            Ok(category) => Some(Mistake {
                wrong: m.wrong,
                correct: m.correct,
                category,
                line_number: m.line_number,
            }),
            Err(_) => {
                tracing::warn!(category = %m.category, wrong = %m.wrong, "skipping mistake with unknown category");
                None
            }
        })
        .collect())
}

/// 校正結果
///
/// アップロード成功ごとに1つ生成され、次のアップロードで丸ごと置き換えられる。
/// mistakesは常に同じ値のoriginal_text/corrected_textに対して解釈する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofreadResult {
    pub original_text: String,
    pub corrected_text: String,
    /// 分類が6種類以外の誤りは読み飛ばす（他の誤りと本文は残す）
    #[serde(deserialize_with = "known_category_mistakes")]
    pub mistakes: Vec<Mistake>,
}

impl ProofreadResult {
    pub fn is_clean(&self) -> bool {
        self.mistakes.is_empty()
    }
}

/// 校正サービスのレスポンス本体
///
/// resultは校正結果のJSONを埋め込んだ文字列（前後に説明文が付くことがある）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceEnvelope {
    pub result: String,
}
