use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use sv_core::ports::ClipboardPort;

/// System clipboard backed by arboard.
pub struct ArboardClipboard {
    inner: Mutex<arboard::Clipboard>,
}

impl ArboardClipboard {
    pub fn new() -> Result<Self> {
        let clipboard = arboard::Clipboard::new().context("Failed to open system clipboard")?;
        Ok(Self {
            inner: Mutex::new(clipboard),
        })
    }
}

impl ClipboardPort for ArboardClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut clipboard = self
            .inner
            .lock()
            .map_err(|_| anyhow!("clipboard lock poisoned"))?;
        clipboard
            .set_text(text.to_string())
            .context("Failed to write text to system clipboard")?;
        log::debug!("copied {} bytes to system clipboard", text.len());
        Ok(())
    }
}

/// Process-local clipboard for sessions without a system clipboard.
#[derive(Debug, Default)]
pub struct InMemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl InMemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|c| c.clone())
    }
}

impl ClipboardPort for InMemoryClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut contents = self
            .contents
            .lock()
            .map_err(|_| anyhow!("clipboard lock poisoned"))?;
        *contents = Some(text.to_string());
        Ok(())
    }
}
