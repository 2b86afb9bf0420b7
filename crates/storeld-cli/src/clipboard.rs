//! Clipboard targets for the `copy` action.

use std::io::Write;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use thiserror::Error;

/// Largest base64 payload sent in one OSC 52 sequence. Terminals silently
/// drop larger selections.
pub const OSC52_MAX_ENCODED_BYTES: usize = 100_000;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no terminal attached to receive the clipboard sequence")]
    NotATerminal,

    #[error("payload is {len} bytes encoded, above the {limit}-byte terminal limit")]
    TooLarge { len: usize, limit: usize },

    #[error("terminal write failed: {0}")]
    Io(#[from] std::io::Error),
}

pub trait Clipboard {
    /// Place `text` on the clipboard.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError`] if the platform rejects the write.
    fn write(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Sets the system clipboard through the terminal's OSC 52 escape sequence.
pub struct Osc52Clipboard<W: Write> {
    out: W,
    attached: bool,
}

impl<W: Write> Osc52Clipboard<W> {
    /// `attached` is whether `out` reaches a terminal; writes are refused
    /// when it does not.
    pub fn new(out: W, attached: bool) -> Self {
        Self { out, attached }
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        if !self.attached {
            return Err(ClipboardError::NotATerminal);
        }

        let encoded = STANDARD.encode(text);
        if encoded.len() > OSC52_MAX_ENCODED_BYTES {
            return Err(ClipboardError::TooLarge {
                len: encoded.len(),
                limit: OSC52_MAX_ENCODED_BYTES,
            });
        }

        write!(self.out, "\x1b]52;c;{encoded}\x07")?;
        self.out.flush()?;
        tracing::debug!(bytes = text.len(), "clipboard sequence written");
        Ok(())
    }
}
