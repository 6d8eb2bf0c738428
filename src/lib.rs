//! promptline - interactive terminal prompts
//!
//! Four prompt kinds over a shared raw-terminal core:
//!
//! - [`Confirm`]: yes/no question with a default answer
//! - [`Input`]: single-line text editing with optional validation
//! - [`Select`]: pick one option from a list
//! - [`MultiSelect`]: toggle any number of options
//!
//! Prompts are plain configuration structs with a single `run` entry
//! point; results come back by value. Cancellation (Ctrl-C / Ctrl-Q) is
//! a distinguished [`PromptError::Canceled`], and the terminal is
//! restored from raw mode on every exit path, including panics.
//!
//! # Quick start
//!
//! ```no_run
//! use promptline::{Confirm, OptionItem, Select};
//!
//! fn main() -> promptline::Result<()> {
//!     let proceed = Confirm {
//!         title: "Deploy?".into(),
//!         ..Default::default()
//!     }
//!     .run()?;
//!
//!     let target = Select {
//!         title: "Environment".into(),
//!         options: vec![
//!             OptionItem::new("staging", "staging"),
//!             OptionItem::new("production", "production"),
//!         ],
//!         ..Default::default()
//!     }
//!     .run()?;
//!
//!     println!("{proceed} {target}");
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Prompt (Confirm | Input | Select | MultiSelect)
//! ├── TerminalSession (raw mode lifecycle + chunk reads)
//! ├── KeyDecoder (bytes → KeyEvent)
//! ├── LineBuffer / OptionList (logical cursor state)
//! └── Renderer (cursor-relative ANSI repaint)
//! ```

pub mod bind;
pub mod core;
pub mod error;
pub mod prompt;
pub mod theme;
pub mod ui;

pub use crate::core::buffer::LineBuffer;
pub use crate::core::key::{decode, KeyEvent};
pub use crate::core::options::{OptionItem, OptionList};
pub use crate::core::term::{CancelToken, TerminalSession, READ_CHUNK};
pub use crate::error::{PromptError, Result};
pub use crate::prompt::{Confirm, Input, MultiSelect, Select, Validator};
pub use crate::theme::Theme;
pub use crate::ui::renderer::{Frame, Renderer};
