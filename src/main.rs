use clap::Parser;
use indicatif::ProgressBar;
use proofread_common::{count_by_category, Notice, UploadOutcome, ViewState};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tamil_proofread::{cli, client, clipboard, config, error, logging, report};
use cli::{Cli, Commands};
use client::{Document, ProofreadClient};
use config::Config;
use error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let mut config = Config::load()?;

    match cli.command {
        Commands::Check { file, filter, output, copy, save_response, endpoint } => {
            println!("📘 proofread - 文書校正\n");

            let document = Document::from_path(&file)?;
            if let Some(endpoint) = endpoint {
                config.set_endpoint(endpoint)?;
            }
            let client = ProofreadClient::new(&config)?;

            let mut state = ViewState::new();
            state.set_filter(filter);
            state.select_file(document);
            let document = state.begin_upload()?;

            // 1. アップロード
            println!("[1/3] アップロード中... ({})", client.endpoint());
            let spinner = ProgressBar::new_spinner();
            spinner.set_message("Analyzing Document…");
            spinner.enable_steady_tick(Duration::from_millis(120));
            let response = client.upload(&document).await;
            spinner.finish_and_clear();

            if let (Some(path), Ok(body)) = (&save_response, &response) {
                std::fs::write(path, body)?;
                println!("✔ レスポンスを保存: {}", path.display());
            }

            // 2. 解析
            println!("[2/3] 結果を解析中...");
            let outcome = state.finish_upload(response);
            let report_path = output.unwrap_or_else(|| cli::default_report_path(&file));
            present(&mut state, outcome, &document.file_name, &report_path, copy)?;
        }

        Commands::Render { input, filter, output, copy } => {
            println!("📄 proofread - レポート生成\n");

            println!("[1/3] レスポンスを読み込み中...");
            let body = std::fs::read_to_string(&input)?;
            let mut state: ViewState<PathBuf> = ViewState::new();
            state.set_filter(filter);
            state.select_file(input.clone());
            state.begin_upload()?;

            println!("[2/3] 結果を解析中...");
            let outcome = state.finish_upload(Ok(body));
            let source_name = input
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            let report_path = output.unwrap_or_else(|| cli::default_report_path(&input));
            present(&mut state, outcome, &source_name, &report_path, copy)?;
        }

        Commands::Config { set_endpoint, set_timeout, show } => {
            let changed = set_endpoint.is_some() || set_timeout.is_some();

            if let Some(endpoint) = set_endpoint {
                config.set_endpoint(endpoint)?;
                println!("✔ エンドポイントを設定しました");
            }

            if let Some(seconds) = set_timeout {
                config.set_timeout(seconds)?;
                println!("✔ タイムアウトを設定しました");
            }

            if changed {
                config.save()?;
            }

            if show || !changed {
                println!("設定:");
                println!("  エンドポイント: {}", config.endpoint);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}

/// 解析結果を表示し、レポート出力・コピーを行う
fn present<F: Clone>(
    state: &mut ViewState<F>,
    outcome: UploadOutcome,
    source_name: &str,
    report_path: &Path,
    copy: bool,
) -> Result<()> {
    match outcome {
        UploadOutcome::Failed(error) => {
            tracing::warn!(source = source_name, %error, "proof-read failed");
            if let Some(notice) = state.take_notice() {
                print_notice(&notice);
            }
            return Err(error.into());
        }
        UploadOutcome::Ignored => return Ok(()),
        UploadOutcome::Clean => println!("✔ 誤りなし\n"),
        UploadOutcome::Annotated(count) => println!("✔ {}件の誤りを検出\n", count),
    }
    tracing::info!(source = source_name, filter = state.filter().as_str(), "proof-read finished");

    let Some(result) = state.result() else {
        return Ok(());
    };

    let counts: Vec<String> = count_by_category(&result.mistakes)
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(category, count)| format!("{} {}", category.label(), count))
        .collect();
    if !counts.is_empty() {
        println!("  分類: {}", counts.join(" / "));
    }

    if state.take_scroll_request() {
        for (i, mistake) in state.filtered_mistakes().iter().enumerate() {
            let line = mistake
                .line_number
                .map(|n| format!(" (行{})", n))
                .unwrap_or_default();
            println!(
                "  {:>3}. [{}] {} → {}{}",
                i + 1,
                mistake.category,
                mistake.wrong.trim(),
                mistake.correct.trim(),
                line
            );
        }
        println!();
    }

    if let Some(notice) = state.take_notice() {
        print_notice(&notice);
    }

    // 3. レポート出力
    println!("[3/3] レポートを出力中...");
    let Some(result) = state.result() else {
        return Ok(());
    };
    let html = report::build_report(result, state.filter(), source_name);
    report::write_report(report_path, &html)?;
    println!("✔ レポートを保存: {}", report_path.display());

    if copy {
        if let Some(text) = state.copy_text() {
            println!(
                "クリップボードに保持中...（最大{}秒）",
                clipboard::CLIPBOARD_HOLD.as_secs()
            );
            clipboard::copy_to_clipboard(text)?;
            state.mark_copied();
            if let Some(notice) = state.take_notice() {
                print_notice(&notice);
            }
        }
    }

    println!("\n✅ 完了");
    Ok(())
}

fn print_notice(notice: &Notice) {
    if notice.is_error() {
        eprintln!("❌ {}", notice.message());
    } else {
        println!("💬 {}", notice.message());
    }
}
