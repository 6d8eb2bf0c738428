//! Prompt controllers.
//!
//! Each prompt kind is a plain configuration struct with public fields
//! and a single `run` entry point; unspecified fields come from
//! `Default`. The key-to-transition logic lives in pure `step` functions
//! so the state machines can be exercised without a terminal; `run`
//! wires them to a [`TerminalSession`](crate::core::term::TerminalSession)
//! and a [`Renderer`](crate::ui::Renderer) over stdout.
//!
//! Every controller honors Ctrl-C and Ctrl-Q as cancellation, surfaces
//! it as [`PromptError::Canceled`](crate::error::PromptError), and
//! restores the terminal on every exit path.

mod confirm;
mod input;
mod multi_select;
mod select;

pub use confirm::Confirm;
pub use input::{Input, Validator};
pub use multi_select::MultiSelect;
pub use select::Select;

use crate::core::key::{self, KeyEvent};
use crate::core::term::{TerminalSession, READ_CHUNK};
use crate::error::Result;

/// Read one chunk from the session and decode it to a logical key event.
pub(crate) fn next_event(session: &mut TerminalSession) -> Result<KeyEvent> {
    let mut buf = [0u8; READ_CHUNK];
    let n = session.read_raw(&mut buf)?;
    Ok(key::decode(&buf[..n]))
}

/// Outcome of feeding one key event to a list prompt state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ListFlow {
    Browsing,
    Confirmed,
    Canceled,
}
