//! Preferred mechanism: the OS clipboard via `arboard`.
//!
//! The clipboard handle is created fresh for each write to avoid holding
//! platform resources between copies. Common failure cases: no display
//! server (headless Linux), permission denied.

use super::Backend;
use anyhow::Context;
use arboard::Clipboard;

pub struct SystemClipboard;

impl Backend for SystemClipboard {
    fn name(&self) -> &'static str {
        "system clipboard"
    }

    fn write(&mut self, text: &str) -> anyhow::Result<()> {
        let mut clipboard = Clipboard::new().context("failed to access clipboard")?;
        clipboard
            .set_text(text)
            .context("failed to set clipboard text")?;
        Ok(())
    }
}
