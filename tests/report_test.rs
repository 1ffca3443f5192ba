//! HTMLレポートのテスト

use proofread_common::{Category, CategoryFilter, Mistake, ProofreadResult};
use tamil_proofread::report::{build_report, write_report};
use tempfile::tempdir;

fn sample_result() -> ProofreadResult {
    ProofreadResult {
        original_text: "The the cat satt on the mat.".to_string(),
        corrected_text: "The cat sat on the mat.".to_string(),
        mistakes: vec![
            Mistake {
                line_number: Some(1),
                ..Mistake::new("satt", "sat", Category::Spelling)
            },
            Mistake::new("The the", "The", Category::Grammar),
        ],
    }
}

/// 両ペインにハイライトが入る
#[test]
fn test_report_contains_annotated_panes() {
    let html = build_report(&sample_result(), CategoryFilter::All, "story.txt");

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("📘 Original"));
    assert!(html.contains("✔ Corrected"));
    assert!(html.contains("<span class=\"mistake mistake-error\" data-category=\"spelling\">satt</span>"));
    assert!(html.contains("<span class=\"mistake mistake-fix\" data-category=\"spelling\">sat</span>"));
    assert!(html.contains("<span>Spelling: 1</span>"));
    assert!(html.contains("<span>All: 2</span>"));
    assert!(html.contains("<td>1</td></tr>"));
}

/// 分類で絞り込むと他の分類はハイライトされない
#[test]
fn test_report_respects_filter() {
    let html = build_report(&sample_result(), CategoryFilter::Only(Category::Grammar), "story.txt");

    assert!(html.contains("data-category=\"grammar\""));
    assert!(!html.contains("data-category=\"spelling\""));
}

/// 該当なしの分類では分類別メッセージ
#[test]
fn test_report_empty_category_message() {
    let html = build_report(&sample_result(), CategoryFilter::Only(Category::Quotation), "story.txt");

    assert!(html.contains("No quotation errors found"));
    assert!(!html.contains("<table"));
}

/// 誤りなしの文書はエスケープした本文とクリーンメッセージ
#[test]
fn test_report_clean_document_is_escaped() {
    let result = ProofreadResult {
        original_text: "<b>வணக்கம்</b>".to_string(),
        corrected_text: "<b>வணக்கம்</b>".to_string(),
        mistakes: vec![],
    };
    let html = build_report(&result, CategoryFilter::All, "<clean>.txt");

    assert!(html.contains("&lt;b&gt;வணக்கம்&lt;/b&gt;"));
    assert!(!html.contains("<b>வணக்கம்</b>"));
    assert!(html.contains("It is clean!"));
    assert!(html.contains("&lt;clean&gt;.txt"));
}

/// 表のセルはエスケープする
#[test]
fn test_report_table_cells_escaped() {
    let result = ProofreadResult {
        original_text: "a <i> b".to_string(),
        corrected_text: "a b".to_string(),
        mistakes: vec![Mistake::new("<i>", "", Category::Formatting)],
    };
    let html = build_report(&result, CategoryFilter::All, "doc.txt");
    assert!(html.contains("<td>&lt;i&gt;</td>"));
}

/// ファイル書き出し（親ディレクトリも作成）
#[test]
fn test_write_report() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("out").join("story.proofread.html");
    let html = build_report(&sample_result(), CategoryFilter::All, "story.txt");

    write_report(&path, &html).expect("レポート保存失敗");
    let saved = std::fs::read_to_string(&path).unwrap();
    assert_eq!(saved, html);
}
