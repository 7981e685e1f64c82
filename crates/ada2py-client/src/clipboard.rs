//! System clipboard access

use std::sync::Mutex;

use tracing::debug;

use ada2py_core::prelude::*;

/// Write-only clipboard seam.
///
/// Calls may block on the platform clipboard, so async callers should run
/// them on a blocking thread.
pub trait ClipboardWriter: Send + Sync {
    /// Replace the clipboard contents with `text`
    fn set_text(&self, text: &str) -> Result<()>;
}

/// Platform clipboard backed by `arboard`.
///
/// The handle is opened lazily on first use and kept, since some platforms
/// drop the contents when the owning handle goes away.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Mutex<Option<arboard::Clipboard>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard").finish_non_exhaustive()
    }
}

impl ClipboardWriter for SystemClipboard {
    fn set_text(&self, text: &str) -> Result<()> {
        let mut guard = self
            .handle
            .lock()
            .map_err(|_| Error::clipboard("clipboard lock poisoned"))?;

        if guard.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| Error::clipboard(e.to_string()))?;
            *guard = Some(clipboard);
        }

        let clipboard = guard
            .as_mut()
            .ok_or_else(|| Error::clipboard("clipboard unavailable"))?;

        clipboard
            .set_text(text.to_owned())
            .map_err(|e| Error::clipboard(e.to_string()))?;

        debug!("Copied {} bytes to clipboard", text.len());
        Ok(())
    }
}
