use clap::{Parser, Subcommand};
use proofread_common::CategoryFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "proofread")]
#[command(about = "タミル語文書AI校正クライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 文書をアップロードして校正
    Check {
        /// 文書ファイル (.pdf / .docx / .txt)
        #[arg(required = true)]
        file: PathBuf,

        /// 表示する分類 (all/spelling/grammar/punctuation/quotation/spacing/formatting)
        #[arg(short, long, default_value = "all")]
        filter: CategoryFilter,

        /// HTMLレポートの出力先（デフォルト: 入力ファイル名.proofread.html）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 修正文をクリップボードにコピー
        #[arg(long)]
        copy: bool,

        /// サービスのレスポンス本体を保存
        #[arg(long)]
        save_response: Option<PathBuf>,

        /// エンドポイントを一時的に上書き
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// 保存済みレスポンスからレポートを生成
    Render {
        /// レスポンス本体のJSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 表示する分類
        #[arg(short, long, default_value = "all")]
        filter: CategoryFilter,

        /// HTMLレポートの出力先（デフォルト: 入力ファイル名.proofread.html）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 修正文をクリップボードにコピー
        #[arg(long)]
        copy: bool,
    },

    /// 設定を表示/編集
    Config {
        /// エンドポイントを設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// タイムアウト秒数を設定
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// レポートの既定の出力先
pub fn default_report_path(input: &std::path::Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "document".to_string());
    input.with_file_name(format!("{}.proofread.html", stem))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use proofread_common::Category;
    use std::path::Path;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check_with_filter() {
        let cli = Cli::parse_from(["proofread", "check", "novel.docx", "--filter", "grammar", "--copy"]);
        match cli.command {
            Commands::Check { file, filter, copy, output, .. } => {
                assert_eq!(file, PathBuf::from("novel.docx"));
                assert_eq!(filter, CategoryFilter::Only(Category::Grammar));
                assert!(copy);
                assert!(output.is_none());
            }
            _ => panic!("Expected check command"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_filter() {
        let result = Cli::try_parse_from(["proofread", "check", "a.txt", "--filter", "style"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_report_path() {
        assert_eq!(
            default_report_path(Path::new("/tmp/story.docx")),
            PathBuf::from("/tmp/story.proofread.html")
        );
    }
}
