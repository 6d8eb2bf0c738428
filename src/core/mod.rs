//! Core prompt machinery.
//!
//! - **key**: raw byte chunks → logical key events
//! - **term**: raw-mode session lifecycle and cooperative cancellation
//! - **buffer**: cursor-addressed line buffer with display-width queries
//! - **options**: highlight and selection state for list prompts
//!
//! # Architecture
//!
//! ```text
//! Prompt controller
//! ├── TerminalSession (raw mode + chunk reads)
//! │   └── KeyDecoder (bytes → KeyEvent)
//! └── LineBuffer | OptionList (logical cursor state)
//! ```

pub mod buffer;
pub mod key;
pub mod options;
pub mod term;
