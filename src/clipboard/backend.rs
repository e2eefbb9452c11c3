//! Clipboard access behind a small trait so the guard can be exercised
//! without a display server.

use arboard::Clipboard;

use crate::errors::{PassVaultError, Result};

pub trait ClipboardBackend {
    /// Current text contents, or `None` if the clipboard holds no text.
    fn get_text(&mut self) -> Result<Option<String>>;

    fn set_text(&mut self, text: &str) -> Result<()>;

    fn clear(&mut self) -> Result<()>;
}

/// The OS clipboard, opened on first use.
///
/// On X11/Wayland the contents are served by this process, so it has to
/// stay alive for as long as the secret should remain pasteable.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut Clipboard> {
        if self.inner.is_none() {
            let clipboard = Clipboard::new()
                .map_err(|e| PassVaultError::Clipboard(format!("cannot open clipboard: {e}")))?;
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| PassVaultError::Clipboard("clipboard unavailable".into()))
    }
}

impl ClipboardBackend for SystemClipboard {
    fn get_text(&mut self) -> Result<Option<String>> {
        match self.handle()?.get_text() {
            Ok(text) => Ok(Some(text)),
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => Err(PassVaultError::Clipboard(format!("read failed: {e}"))),
        }
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        self.handle()?
            .set_text(text)
            .map_err(|e| PassVaultError::Clipboard(format!("write failed: {e}")))
    }

    fn clear(&mut self) -> Result<()> {
        self.handle()?
            .clear()
            .map_err(|e| PassVaultError::Clipboard(format!("clear failed: {e}")))
    }
}

/// In-process clipboard used by tests and headless sessions.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl ClipboardBackend for MemoryClipboard {
    fn get_text(&mut self) -> Result<Option<String>> {
        Ok(self.contents.clone())
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.contents = None;
        Ok(())
    }
}
