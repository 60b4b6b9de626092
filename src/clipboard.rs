//! Clipboard output
//!
//! Generated prompts and vocabulary exports can be copied instead of printed.
//! A failed copy never touches stored data; callers get `false` and decide
//! how to fall back.

use arboard::Clipboard;
use log::{debug, warn};

use crate::error::{ReadlogError, ReadlogResult};

/// Somewhere text can be copied to
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> ReadlogResult<()>;
}

/// The system clipboard
#[derive(Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> ReadlogResult<()> {
        let mut clipboard = Clipboard::new().map_err(|e| ReadlogError::Clipboard(e.to_string()))?;
        set_owned_text(&mut clipboard, text).map_err(|e| ReadlogError::Clipboard(e.to_string()))
    }
}

// X11 and Wayland selections live only as long as their owner. Block until a
// clipboard manager (or another program) takes the contents over, otherwise
// they vanish when the CLI exits.
#[cfg(target_os = "linux")]
fn set_owned_text(clipboard: &mut Clipboard, text: &str) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    debug!("Waiting for the clipboard contents to be taken over");
    clipboard.set().wait().text(text.to_owned())
}

#[cfg(not(target_os = "linux"))]
fn set_owned_text(clipboard: &mut Clipboard, text: &str) -> Result<(), arboard::Error> {
    clipboard.set_text(text.to_owned())
}

/// Copy `text`, logging instead of failing. Returns whether it was copied.
pub fn copy_text(sink: &mut dyn ClipboardSink, text: &str) -> bool {
    match sink.set_text(text) {
        Ok(()) => {
            debug!("Copied {} characters to clipboard", text.chars().count());
            true
        }
        Err(e) => {
            warn!("{}", e);
            false
        }
    }
}
