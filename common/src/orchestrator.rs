//! アップロード処理の状態管理
//!
//! ファイル選択 → アップロード → レスポンス解析 → 表示更新 の流れを
//! 通信手段から切り離して管理する。ブラウザ版とCLI版で共有する。
//!
//! 状態遷移: Idle → Uploading → {Succeeded, Failed}
//! （Succeeded/FailedはIdleと同様に次のアップロードを受け付ける）

use crate::error::{Error, Result};
use crate::filter::{empty_filter_notice, filter_mistakes, CategoryFilter};
use crate::keyboard::{is_submit_key, FocusTarget};
use crate::notice::Notice;
use crate::parser::parse_service_response;
use crate::render::{render_annotated, RenderMode, Rendered};
use crate::types::{Mistake, ProofreadResult};

/// アップロードの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadPhase {
    #[default]
    Idle,
    Uploading,
    Succeeded,
    Failed,
}

/// レスポンス処理の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// 誤りなし
    Clean,
    /// 誤りあり（件数）
    Annotated(usize),
    Failed(Error),
    /// アップロード中でない時に届いたレスポンス
    Ignored,
}

/// 画面の状態
///
/// `F` はファイルハンドルの型（ブラウザは `web_sys::File`、CLIは `PathBuf`）
#[derive(Debug, Clone)]
pub struct ViewState<F> {
    selected_file: Option<F>,
    result: Option<ProofreadResult>,
    filter: CategoryFilter,
    phase: UploadPhase,
    notice: Option<Notice>,
    scroll_requested: bool,
}

impl<F> Default for ViewState<F> {
    fn default() -> Self {
        Self {
            selected_file: None,
            result: None,
            filter: CategoryFilter::All,
            phase: UploadPhase::Idle,
            notice: None,
            scroll_requested: false,
        }
    }
}

impl<F: Clone> ViewState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_file(&mut self, file: F) {
        self.selected_file = Some(file);
    }

    pub fn clear_file(&mut self) {
        self.selected_file = None;
    }

    pub fn selected_file(&self) -> Option<&F> {
        self.selected_file.as_ref()
    }

    pub fn result(&self) -> Option<&ProofreadResult> {
        self.result.as_ref()
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn phase(&self) -> UploadPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == UploadPhase::Uploading
    }

    pub fn has_mistakes(&self) -> bool {
        self.result.as_ref().is_some_and(|r| !r.mistakes.is_empty())
    }

    /// アップロード開始
    ///
    /// アップロード中は何もせず `UploadInProgress` を返す（リクエストを重複させない）。
    /// ファイル未選択の場合は通知を出して状態を変えない。
    /// 開始時には前回の通知を消す。
    ///
    /// # Returns
    /// * `Ok(F)` - 送信するファイル
    pub fn begin_upload(&mut self) -> Result<F> {
        if self.is_loading() {
            return Err(Error::UploadInProgress);
        }

        let Some(file) = self.selected_file.clone() else {
            self.notice = Some(Notice::NoFileSelected);
            return Err(Error::NoFileSelected);
        };

        self.phase = UploadPhase::Uploading;
        self.notice = None;
        Ok(file)
    }

    /// レスポンスを反映
    ///
    /// 失敗時は前回の結果をそのまま残し、成功時は結果を丸ごと置き換える
    pub fn finish_upload(&mut self, response: Result<String>) -> UploadOutcome {
        if !self.is_loading() {
            return UploadOutcome::Ignored;
        }

        let parsed = response.and_then(|body| parse_service_response(&body));
        match parsed {
            Ok(result) => {
                let count = result.mistakes.len();
                self.result = Some(result);
                self.phase = UploadPhase::Succeeded;

                if count == 0 {
                    self.notice = Some(Notice::DocumentClean);
                    UploadOutcome::Clean
                } else {
                    self.scroll_requested = true;
                    self.notice = empty_filter_notice(self.all_mistakes(), self.filter);
                    UploadOutcome::Annotated(count)
                }
            }
            Err(error) => {
                self.phase = UploadPhase::Failed;
                self.notice = Some(match &error {
                    Error::MalformedResponse(detail) => Notice::MalformedResponse(detail.clone()),
                    Error::NetworkFailure(detail) => Notice::NetworkFailure(detail.clone()),
                    other => Notice::NetworkFailure(other.to_string()),
                });
                UploadOutcome::Failed(error)
            }
        }
    }

    /// 絞り込み条件を変更（結果が変わっても保持される）
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        if let Some(notice) = empty_filter_notice(self.all_mistakes(), filter) {
            self.notice = Some(notice);
        }
    }

    fn all_mistakes(&self) -> &[Mistake] {
        self.result.as_ref().map(|r| r.mistakes.as_slice()).unwrap_or(&[])
    }

    pub fn filtered_mistakes(&self) -> Vec<Mistake> {
        filter_mistakes(self.all_mistakes(), self.filter)
    }

    /// 原文表示（誤り箇所をハイライト）
    pub fn original_view(&self) -> Rendered {
        self.render(RenderMode::Original)
    }

    /// 修正文表示（修正箇所をハイライト）
    pub fn corrected_view(&self) -> Rendered {
        self.render(RenderMode::Corrected)
    }

    fn render(&self, mode: RenderMode) -> Rendered {
        let Some(result) = &self.result else {
            return Rendered::Plain(String::new());
        };
        let text = match mode {
            RenderMode::Original => &result.original_text,
            RenderMode::Corrected => &result.corrected_text,
        };
        render_annotated(text, &self.filtered_mistakes(), mode)
    }

    /// クリップボードにコピーする修正文（マークアップなし）
    pub fn copy_text(&self) -> Option<&str> {
        self.result.as_ref().map(|r| r.corrected_text.as_str())
    }

    pub fn mark_copied(&mut self) {
        self.notice = Some(Notice::Copied);
    }

    /// グローバルEnterキーでアップロードを起動するか
    pub fn should_submit_on_key(&self, key: &str, focus: &FocusTarget) -> bool {
        is_submit_key(key) && self.selected_file.is_some() && !self.is_loading() && !focus.is_text_entry()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_requested)
    }
}
