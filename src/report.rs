//! 原文/修正文の対比HTMLレポート

use html_escape::encode_text;
use proofread_common::{
    count_by_category, filter_mistakes, render_annotated, CategoryFilter, ProofreadResult, RenderMode,
};
use std::fmt::Write as _;
use std::path::Path;

use crate::error::Result;

const STYLE: &str = r#"
body { font-family: "Noto Sans Tamil", "Latha", sans-serif; background: #d8efff; margin: 0; padding: 2rem; color: #1f2937; }
h1 { text-align: center; }
.meta { text-align: center; color: #4b5563; }
.counts { display: flex; gap: .5rem; justify-content: center; flex-wrap: wrap; margin: 1rem 0; }
.counts span { background: #ffffffa0; border-radius: .75rem; padding: .25rem .75rem; }
.panes { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }
.pane { background: #ffffff80; border-radius: 1rem; padding: 1.5rem; }
.pane .text { white-space: pre-wrap; }
.mistake { padding: 0 .25rem; border-radius: .75rem; }
.mistake-error { background: #fca5a5b3; }
.mistake-fix { background: #86efacb3; }
table { width: 100%; border-collapse: collapse; margin-top: 2rem; background: #ffffff80; }
th, td { border-bottom: 1px solid #cbd5e1; padding: .5rem; text-align: left; vertical-align: top; }
"#;

/// レポートHTMLを生成
///
/// # Arguments
/// * `result` - 校正結果
/// * `filter` - 表示する分類
/// * `source_name` - 元の文書名（見出しに表示）
pub fn build_report(result: &ProofreadResult, filter: CategoryFilter, source_name: &str) -> String {
    let mistakes = filter_mistakes(&result.mistakes, filter);
    let original = render_annotated(&result.original_text, &mistakes, RenderMode::Original);
    let corrected = render_annotated(&result.corrected_text, &mistakes, RenderMode::Corrected);
    let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"ta\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<title>Proof-read: {}</title>", encode_text(source_name));
    let _ = writeln!(html, "<style>{}</style>\n</head>\n<body>", STYLE);
    html.push_str("<h1>✨ AI Tamil Proof-reader</h1>\n");
    let _ = writeln!(
        html,
        "<p class=\"meta\">{} · {} · {}</p>",
        encode_text(source_name),
        encode_text(filter.label()),
        generated_at
    );

    html.push_str("<div class=\"counts\">\n");
    let _ = writeln!(html, "<span>All: {}</span>", result.mistakes.len());
    for (category, count) in count_by_category(&result.mistakes) {
        let _ = writeln!(html, "<span>{}: {}</span>", category.label(), count);
    }
    html.push_str("</div>\n");

    html.push_str("<div class=\"panes\">\n");
    let _ = writeln!(
        html,
        "<section class=\"pane\"><h2>📘 Original</h2><div class=\"text\">{}</div></section>",
        original.to_html()
    );
    let _ = writeln!(
        html,
        "<section class=\"pane\"><h2>✔ Corrected</h2><div class=\"text\">{}</div></section>",
        corrected.to_html()
    );
    html.push_str("</div>\n");

    if mistakes.is_empty() {
        let message = match filter {
            CategoryFilter::Only(category) if !result.mistakes.is_empty() => category.empty_message(),
            _ => proofread_common::notice::CLEAN_MESSAGE,
        };
        let _ = writeln!(html, "<p class=\"meta\">{}</p>", message);
    } else {
        html.push_str("<table id=\"mistakes\">\n<tr><th>#</th><th>Category</th><th>Wrong</th><th>Correct</th><th>Line</th></tr>\n");
        for (i, mistake) in mistakes.iter().enumerate() {
            let line = mistake.line_number.map(|n| n.to_string()).unwrap_or_default();
            let _ = writeln!(
                html,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                i + 1,
                mistake.category.label(),
                encode_text(&mistake.wrong),
                encode_text(&mistake.correct),
                line
            );
        }
        html.push_str("</table>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

/// レポートをファイルに書き出す
pub fn write_report(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, html)?;
    Ok(())
}
