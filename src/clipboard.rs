//! 修正文のクリップボードコピー

use arboard::Clipboard;
#[cfg(all(unix, not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))))]
use arboard::SetExtLinux;
use std::time::{Duration, Instant};

use crate::error::{ProofreadError, Result};

/// X11/Waylandでクリップボードの所有権を保持する最大時間
///
/// プロセス終了と同時に内容が消えるため、クリップボードマネージャーが
/// 引き取るか、この時間が過ぎるまで待つ
pub const CLIPBOARD_HOLD: Duration = Duration::from_secs(10);

/// 保持の期限
pub fn hold_deadline(now: Instant) -> Instant {
    now + CLIPBOARD_HOLD
}

/// テキストをそのままクリップボードへ書き込む
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().map_err(|e| ProofreadError::Clipboard(e.to_string()))?;
    let set = clipboard.set();

    #[cfg(all(unix, not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))))]
    let set = set.wait_until(hold_deadline(Instant::now()));

    set.text(text.to_string())
        .map_err(|e| ProofreadError::Clipboard(e.to_string()))?;
    tracing::debug!(chars = text.chars().count(), "copied corrected text");
    Ok(())
}
