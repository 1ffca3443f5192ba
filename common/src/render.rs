//! 誤り箇所のハイライト描画
//!
//! 本文中の誤り文字列をすべて `<span>` で囲んだマークアップを生成する。
//! 原文表示では `wrong`、修正文表示では `correct` を対象にする。

use regex::{NoExpand, Regex};

use crate::types::Mistake;

/// 描画モード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// 原文（誤り表示）
    Original,
    /// 修正文（修正表示）
    Corrected,
}

impl RenderMode {
    /// ハイライト対象の文字列（前後の空白を除去）
    pub fn target<'a>(&self, mistake: &'a Mistake) -> &'a str {
        match self {
            RenderMode::Original => mistake.wrong.trim(),
            RenderMode::Corrected => mistake.correct.trim(),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            RenderMode::Original => "mistake mistake-error",
            RenderMode::Corrected => "mistake mistake-fix",
        }
    }
}

/// 描画結果
///
/// Plainは本文そのもの（マークアップとして解釈してはならない）、
/// Markupはハイライト済みのHTML。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Plain(String),
    Markup(String),
}

impl Rendered {
    /// HTMLとして埋め込める文字列に変換（Plainはエスケープする）
    pub fn to_html(&self) -> String {
        match self {
            Rendered::Plain(text) => html_escape::encode_text(text).into_owned(),
            Rendered::Markup(html) => html.clone(),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Rendered::Plain(text) | Rendered::Markup(text) => text,
        }
    }

    pub fn is_markup(&self) -> bool {
        matches!(self, Rendered::Markup(_))
    }
}

/// 本文中の誤り箇所をハイライトする
///
/// 誤りをリスト順に適用し、各誤りの文字列の出現箇所をすべて置換する。
/// 各置換は前の置換結果に対して行うため、短い文字列が他の単語や
/// 既に挿入したマークアップの中に一致することがある（順序依存）。
///
/// # Arguments
/// * `text` - 本文
/// * `mistakes` - 絞り込み済みの誤り
/// * `mode` - 原文/修正文
///
/// # Examples
/// ```
/// use proofread_common::{render_annotated, Category, Mistake, RenderMode, Rendered};
///
/// let mistakes = vec![Mistake::new("satt", "sat", Category::Spelling)];
/// let rendered = render_annotated("The cat satt.", &mistakes, RenderMode::Original);
/// assert_eq!(
///     rendered,
///     Rendered::Markup(
///         "The cat <span class=\"mistake mistake-error\" data-category=\"spelling\">satt</span>.".into()
///     )
/// );
/// ```
pub fn render_annotated(text: &str, mistakes: &[Mistake], mode: RenderMode) -> Rendered {
    if mistakes.is_empty() {
        return Rendered::Plain(text.to_string());
    }

    let mut html = text.to_string();
    for mistake in mistakes {
        let target = mode.target(mistake);
        // 空文字は全位置に一致してしまうため対象外
        if target.is_empty() {
            continue;
        }

        let span = format!(
            "<span class=\"{}\" data-category=\"{}\">{}</span>",
            mode.css_class(),
            mistake.category.as_str(),
            target
        );
        html = replace_literal_all(&html, target, &span);
    }

    Rendered::Markup(html)
}

/// 正規表現をエスケープしてリテラルとして全置換
fn replace_literal_all(haystack: &str, target: &str, replacement: &str) -> String {
    match Regex::new(&escape_pattern(target)) {
        Ok(re) => re.replace_all(haystack, NoExpand(replacement)).into_owned(),
        // サイズ上限を超える巨大なパターン
        Err(_) => haystack.replace(target, replacement),
    }
}

/// 正規表現のメタ文字 `. * + ? ^ $ { } ( ) | [ ] \` をエスケープ
pub fn escape_pattern(target: &str) -> String {
    regex::escape(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn error_span(text: &str, category: &str) -> String {
        format!("<span class=\"mistake mistake-error\" data-category=\"{}\">{}</span>", category, text)
    }

    fn fix_span(text: &str, category: &str) -> String {
        format!("<span class=\"mistake mistake-fix\" data-category=\"{}\">{}</span>", category, text)
    }

    #[test]
    fn test_render_empty_is_plain() {
        let text = "The cat <b>sat</b> & slept.";
        let rendered = render_annotated(text, &[], RenderMode::Original);
        assert_eq!(rendered, Rendered::Plain(text.to_string()));
        assert!(!rendered.is_markup());
        assert!(!rendered.as_str().contains("mistake"));
    }

    #[test]
    fn test_plain_to_html_escapes() {
        let rendered = render_annotated("<script>alert(1)</script> & co", &[], RenderMode::Corrected);
        assert_eq!(rendered.to_html(), "&lt;script&gt;alert(1)&lt;/script&gt; &amp; co");
    }

    #[test]
    fn test_render_original_single_occurrence() {
        let mistakes = vec![Mistake::new("satt", "sat", Category::Spelling)];
        let rendered = render_annotated("The the cat satt on the mat.", &mistakes, RenderMode::Original);
        let expected = format!("The the cat {} on the mat.", error_span("satt", "spelling"));
        assert_eq!(rendered, Rendered::Markup(expected));
    }

    #[test]
    fn test_render_corrected_annotates_every_occurrence() {
        let mistakes = vec![Mistake::new("satt", "sat", Category::Spelling)];
        let rendered = render_annotated(
            "The cat sat on the mat. Satsuma sat.",
            &mistakes,
            RenderMode::Corrected,
        );
        let span = fix_span("sat", "spelling");
        let expected = format!("The cat {} on the mat. Satsuma {}.", span, span);
        assert_eq!(rendered.as_str(), expected);
    }

    #[test]
    fn test_render_matches_inside_longer_words() {
        let mistakes = vec![Mistake::new("sat", "sat", Category::Spelling)];
        let rendered = render_annotated("unsatisfied", &mistakes, RenderMode::Corrected);
        assert_eq!(rendered.as_str(), format!("un{}isfied", fix_span("sat", "spelling")));
    }

    #[test]
    fn test_render_trims_target() {
        let mistakes = vec![Mistake::new("  satt \n", "sat", Category::Spelling)];
        let rendered = render_annotated("a satt b", &mistakes, RenderMode::Original);
        assert_eq!(rendered.as_str(), format!("a {} b", error_span("satt", "spelling")));
    }

    #[test]
    fn test_render_escapes_metacharacters() {
        let mistakes = vec![
            Mistake::new("(a+b)*", "(a + b) *", Category::Spacing),
            Mistake::new("$1", "$ 1", Category::Spacing),
        ];
        let rendered = render_annotated("x (a+b)* y $1 z aab", &mistakes, RenderMode::Original);
        let expected = format!(
            "x {} y {} z aab",
            error_span("(a+b)*", "spacing"),
            error_span("$1", "spacing")
        );
        assert_eq!(rendered.as_str(), expected);
    }

    #[test]
    fn test_render_dot_is_literal() {
        let mistakes = vec![Mistake::new("..", ".", Category::Punctuation)];
        let rendered = render_annotated("ab.. cd", &mistakes, RenderMode::Original);
        assert_eq!(rendered.as_str(), format!("ab{} cd", error_span("..", "punctuation")));
    }

    #[test]
    fn test_render_tamil_text() {
        let mistakes = vec![Mistake::new("வந்தான", "வந்தான்", Category::Spelling)];
        let rendered = render_annotated("அவன் வந்தான", &mistakes, RenderMode::Original);
        assert_eq!(rendered.as_str(), format!("அவன் {}", error_span("வந்தான", "spelling")));
    }

    #[test]
    fn test_render_skips_blank_target() {
        let mistakes = vec![Mistake::new("   ", " ", Category::Spacing)];
        let rendered = render_annotated("a   b", &mistakes, RenderMode::Original);
        // 空白のみの誤りは対象外だが、リストが空ではないのでMarkup扱い
        assert_eq!(rendered, Rendered::Markup("a   b".to_string()));
    }

    #[test]
    fn test_render_is_order_dependent() {
        // 後の誤りが先に挿入したマークアップの中身にも一致する
        let first = Mistake::new("cat", "cat", Category::Spelling);
        let second = Mistake::new("at", "at", Category::Grammar);

        let forward = render_annotated("cat", &[first.clone(), second.clone()], RenderMode::Original);
        let backward = render_annotated("cat", &[second, first], RenderMode::Original);

        assert_ne!(forward, backward);
        assert_eq!(
            forward.as_str(),
            error_span("cat", "spelling").replace("at", &error_span("at", "grammar"))
        );
        assert_eq!(
            backward.as_str(),
            format!("c{}", error_span("at", "grammar")).replace("cat", &error_span("cat", "spelling"))
        );
        assert!(forward.as_str().contains("d<span"));
    }
}
