//! Terminal session lifecycle.
//!
//! Owns the raw-mode resource for the duration of one prompt: TTY probe,
//! raw-mode entry, blocking chunk reads, and restoration. Restoration is
//! idempotent and also wired into [`Drop`], so early returns, `?`
//! propagation, and panics all release the terminal exactly once.

use std::io::{self, Read, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crossterm::terminal;
use crossterm::tty::IsTty;
use tracing::debug;

use crate::error::{PromptError, Result};

/// Read chunk size. Longer than the longest recognized escape sequence
/// (3 bytes) and the longest UTF-8 scalar (4 bytes), so one read never
/// splits a decodable unit and the decoder needs no cross-call buffering.
pub const READ_CHUNK: usize = 8;

/// Cooperative cancellation flag shared with the read loop.
///
/// Clones observe the same flag. Tripping it makes the active prompt
/// return [`PromptError::Canceled`] through the normal restoration path
/// at the next iteration boundary; nothing is force-terminated. Note that
/// in raw mode Ctrl-C arrives in-band as byte `0x03`, so user-initiated
/// cancellation is ordinarily handled by the key decoder; the token
/// exists for external collaborators such as a caller-installed signal
/// handler.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation of the prompt observing this token.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_canceled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// Scoped owner of the terminal's raw mode.
///
/// At most one session should hold raw mode at a time; the prompt
/// controllers create one per `run` and drop it before returning.
pub struct TerminalSession {
    cols: u16,
    rows: u16,
    raw_active: bool,
    cancel: CancelToken,
}

impl TerminalSession {
    /// Probe the controlling terminal and capture its size.
    ///
    /// Fails with [`PromptError::NotATerminal`] when stdin is not
    /// interactive. Raw mode is not entered yet.
    pub fn open(cancel: CancelToken) -> Result<Self> {
        if !io::stdin().is_tty() {
            return Err(PromptError::NotATerminal);
        }
        let (cols, rows) = terminal::size().map_err(PromptError::TerminalMode)?;
        Ok(Self {
            cols,
            rows,
            raw_active: false,
            cancel,
        })
    }

    /// Disable line buffering and echo.
    pub fn enter_raw(&mut self) -> Result<()> {
        terminal::enable_raw_mode().map_err(PromptError::TerminalMode)?;
        self.raw_active = true;
        debug!("raw mode entered");
        Ok(())
    }

    /// Block until input is available and fill `buf` with one chunk.
    ///
    /// The cancel token is checked before blocking and again once the
    /// read returns, so an externally tripped token is observed at the
    /// iteration boundary. EOF is reported as [`PromptError::ReadFailure`]:
    /// a prompt cannot make progress on a closed input stream.
    pub fn read_raw(&mut self, buf: &mut [u8; READ_CHUNK]) -> Result<usize> {
        if self.cancel.is_canceled() {
            return Err(PromptError::Canceled);
        }
        let n = io::stdin().read(buf).map_err(PromptError::ReadFailure)?;
        if self.cancel.is_canceled() {
            return Err(PromptError::Canceled);
        }
        if n == 0 {
            return Err(PromptError::ReadFailure(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            )));
        }
        Ok(n)
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Revert the terminal to its saved mode.
    ///
    /// Idempotent: a no-op unless raw mode is currently active. The
    /// cursor glyph is shown again and the output moves to a fresh line
    /// before cooked mode returns. Errors are logged, not propagated;
    /// restoration is best-effort by the time it runs.
    pub fn restore(&mut self) {
        if !self.raw_active {
            return;
        }
        self.raw_active = false;

        let mut stdout = io::stdout();
        let _ = write!(stdout, "\x1b[?25h");
        let _ = stdout.flush();

        if let Err(e) = terminal::disable_raw_mode() {
            debug!("failed to restore terminal mode: {e}");
        }

        let _ = writeln!(stdout);
        let _ = stdout.flush();
        debug!("raw mode restored");
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        self.restore();
    }
}
