//! Clipboard access for paste

use anyhow::{Context, Result};

/// Source of plain clipboard text
pub trait ClipboardSource {
    fn read_text(&mut self) -> Result<String>;
}

/// The system clipboard, opened per read
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl ClipboardSource for SystemClipboard {
    fn read_text(&mut self) -> Result<String> {
        let mut clipboard = arboard::Clipboard::new().context("Failed to open clipboard")?;
        clipboard
            .get_text()
            .context("Clipboard does not hold plain text")
    }
}
