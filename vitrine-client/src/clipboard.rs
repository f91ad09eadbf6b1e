//! Host clipboard access behind a small trait.
//!
//! Copying is best effort: callers log failures and carry on.

use std::io::{self, IsTerminal, Write};

use base64::{Engine as _, engine::general_purpose::STANDARD};
use clipboard_rs::{Clipboard as _, ClipboardContext};
use log::debug;
use parking_lot::Mutex;

use crate::error::ClipboardError;

pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// The desktop clipboard of the host.
///
/// A context is opened per write so the value stays `Send + Sync` on every
/// platform.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let context = ClipboardContext::new()
            .map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
        context
            .set_text(text.to_string())
            .map_err(|err| ClipboardError::Host(err.to_string()))
    }
}

/// Tries `primary`, and on any failure writes through `fallback` instead.
#[derive(Debug)]
pub struct FallbackClipboard<P, F> {
    primary: P,
    fallback: F,
}

impl<P: Clipboard, F: Clipboard> FallbackClipboard<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: Clipboard, F: Clipboard> Clipboard for FallbackClipboard<P, F> {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        match self.primary.write_text(text) {
            Ok(()) => Ok(()),
            Err(err) => {
                debug!("primary clipboard failed ({}), using fallback", err);
                self.fallback.write_text(text)
            }
        }
    }
}

/// Host clipboard first, then OSC 52 on stdout for remote terminals.
pub fn terminal_clipboard() -> FallbackClipboard<SystemClipboard, Osc52Clipboard> {
    FallbackClipboard::new(SystemClipboard, Osc52Clipboard::stdout())
}

/// Writes the OSC 52 escape sequence, which most terminal emulators turn
/// into a system clipboard update.
pub struct Osc52Clipboard {
    sink: Mutex<Box<dyn Write + Send>>,
    require_terminal: bool,
}

impl std::fmt::Debug for Osc52Clipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Osc52Clipboard")
            .field("require_terminal", &self.require_terminal)
            .finish_non_exhaustive()
    }
}

impl Osc52Clipboard {
    /// Target the process's stdout. Fails with `Unavailable` when stdout is
    /// not a terminal.
    pub fn stdout() -> Self {
        Self {
            sink: Mutex::new(Box::new(io::stdout())),
            require_terminal: true,
        }
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            sink: Mutex::new(Box::new(writer)),
            require_terminal: false,
        }
    }

    pub fn escape_sequence(text: &str) -> String {
        format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
    }
}

impl Clipboard for Osc52Clipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.require_terminal && !io::stdout().is_terminal() {
            return Err(ClipboardError::Unavailable(
                "stdout is not a terminal".to_string(),
            ));
        }

        let mut sink = self.sink.lock();
        sink.write_all(Self::escape_sequence(text).as_bytes())
            .and_then(|()| sink.flush())
            .map_err(ClipboardError::Write)
    }
}

/// Clipboard for hosts without one. Every write fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableClipboard;

impl Clipboard for UnavailableClipboard {
    fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable(
            "no clipboard on this host".to_string(),
        ))
    }
}

/// In-process clipboard that keeps the last written text.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        *self.contents.lock() = Some(text.to_string());
        Ok(())
    }
}

impl<C: Clipboard + ?Sized> Clipboard for std::sync::Arc<C> {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        (**self).write_text(text)
    }
}
