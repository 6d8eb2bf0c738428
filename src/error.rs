//! Error taxonomy for prompt execution.
//!
//! `Canceled` is a distinguished value rather than a failure: callers
//! branch on [`PromptError::is_canceled`] to tell user cancellation apart
//! from true errors. Everything else is fatal to the prompt and crosses
//! the prompt boundary unchanged once the terminal has been restored.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("stdin is not a terminal")]
    NotATerminal,

    #[error("failed to change terminal mode: {0}")]
    TerminalMode(#[source] io::Error),

    #[error("failed to read input: {0}")]
    ReadFailure(#[source] io::Error),

    #[error("failed to write to terminal: {0}")]
    WriteFailure(#[source] io::Error),

    #[error("canceled")]
    Canceled,

    #[error("no options to choose from")]
    NoOptions,

    #[error("bind target does not match result shape: {0}")]
    InvalidBindTarget(String),
}

impl PromptError {
    /// True when the user aborted the prompt rather than something failing.
    pub fn is_canceled(&self) -> bool {
        matches!(self, PromptError::Canceled)
    }
}

pub type Result<T> = std::result::Result<T, PromptError>;
