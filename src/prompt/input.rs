//! Single-line text input prompt.

use std::io;

use tracing::debug;
use unicode_width::UnicodeWidthStr;

use crate::core::buffer::LineBuffer;
use crate::core::key::KeyEvent;
use crate::core::term::{CancelToken, TerminalSession};
use crate::error::{PromptError, Result};
use crate::theme::Theme;
use crate::ui::renderer::{Frame, Renderer};

use super::next_event;

/// Validation hook run when the user submits; `Err` carries the message
/// rendered next to the input.
pub type Validator = Box<dyn Fn(&str) -> std::result::Result<(), String>>;

/// A single-line text prompt with optional placeholder, initial value,
/// and validation.
///
/// ```no_run
/// use promptline::Input;
///
/// let name = Input {
///     title: "Name: ".into(),
///     placeholder: "world".into(),
///     validate: Some(Box::new(|value: &str| {
///         if value.trim().is_empty() {
///             Err("name must not be empty".into())
///         } else {
///             Ok(())
///         }
///     })),
///     ..Default::default()
/// }
/// .run()?;
/// # Ok::<(), promptline::PromptError>(())
/// ```
#[derive(Default)]
pub struct Input {
    /// Text rendered before the editing area.
    pub title: String,
    /// Dim hint shown while the buffer is empty.
    pub placeholder: String,
    /// Initial buffer content; the cursor starts at its end.
    pub initial: String,
    /// Submission validator. A failure keeps the prompt editing and
    /// shows the message; it never aborts the prompt.
    pub validate: Option<Validator>,
    /// Clear the whole screen before each frame.
    pub clear_screen: bool,
    pub theme: Theme,
    /// Observed for external cancellation while the prompt is blocked.
    pub cancel: CancelToken,
}

/// Mutable editing state carried across events.
struct InputState {
    buffer: LineBuffer,
    error: Option<String>,
}

impl InputState {
    fn new(initial: &str) -> Self {
        Self {
            buffer: LineBuffer::from_initial(initial),
            error: None,
        }
    }
}

/// Outcome of feeding one key event to the input state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
enum InputFlow {
    Editing,
    Submitted(String),
    Canceled,
}

impl Input {
    /// One state-machine transition against the editing state.
    ///
    /// Vertical arrows are ignored: this is a single-line editor. Any
    /// edit clears a previous validation error.
    fn step(&self, state: &mut InputState, event: KeyEvent) -> InputFlow {
        match event {
            KeyEvent::Ctrl('c') | KeyEvent::Ctrl('q') => InputFlow::Canceled,
            KeyEvent::Enter => {
                let value = state.buffer.to_string();
                if let Some(validate) = &self.validate {
                    if let Err(message) = validate(&value) {
                        state.error = Some(message);
                        return InputFlow::Editing;
                    }
                }
                InputFlow::Submitted(value)
            }
            KeyEvent::Backspace => {
                state.buffer.delete_before();
                state.error = None;
                InputFlow::Editing
            }
            KeyEvent::Left => {
                state.buffer.move_left();
                InputFlow::Editing
            }
            KeyEvent::Right => {
                state.buffer.move_right();
                InputFlow::Editing
            }
            KeyEvent::Space => {
                state.buffer.insert(' ');
                state.error = None;
                InputFlow::Editing
            }
            KeyEvent::Rune(ch) => {
                state.buffer.insert(ch);
                state.error = None;
                InputFlow::Editing
            }
            KeyEvent::Up | KeyEvent::Down | KeyEvent::Ctrl(_) | KeyEvent::Unknown => {
                InputFlow::Editing
            }
        }
    }

    /// Compose the editing line. The cursor column is the title width
    /// plus the buffer width up to the cursor, measured in terminal
    /// columns so wide and combining characters place correctly.
    fn frame(&self, state: &InputState) -> Frame {
        let mut text = self.title.clone();
        if state.buffer.is_empty() && !self.placeholder.is_empty() {
            text.push_str(&self.theme.placeholder_style);
            text.push_str(&self.placeholder);
            text.push_str("\x1b[0m");
        } else {
            text.push_str(&state.buffer.to_string());
        }
        if let Some(error) = &state.error {
            text.push_str("  ");
            text.push_str(&self.theme.error_style);
            text.push_str(error);
            text.push_str("\x1b[0m");
        }

        let cursor_col = self.title.width() + state.buffer.width_to_cursor();
        Frame::Line {
            text,
            cursor_col: Some(cursor_col),
        }
    }

    /// Run the prompt to completion.
    ///
    /// Returns the submitted text, or [`PromptError::Canceled`] when the
    /// user aborts. The terminal is restored before this returns.
    pub fn run(&self) -> Result<String> {
        let mut session = TerminalSession::open(self.cancel.clone())?;
        session.enter_raw()?;
        debug!("input prompt started");

        let mut renderer = Renderer::new(io::stdout(), session.rows(), self.clear_screen);
        renderer
            .margin_top(self.theme.margin_top)
            .map_err(PromptError::WriteFailure)?;

        let outcome = self.drive(&mut session, &mut renderer);

        let _ = renderer.margin_bottom(self.theme.margin_bottom);
        session.restore();
        debug!("input prompt finished");
        outcome
    }

    fn drive(
        &self,
        session: &mut TerminalSession,
        renderer: &mut Renderer<io::Stdout>,
    ) -> Result<String> {
        let mut state = InputState::new(&self.initial);
        loop {
            renderer
                .paint(&self.frame(&state))
                .map_err(PromptError::WriteFailure)?;
            match self.step(&mut state, next_event(session)?) {
                InputFlow::Editing => continue,
                InputFlow::Submitted(value) => return Ok(value),
                InputFlow::Canceled => return Err(PromptError::Canceled),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::key::decode;

    #[test]
    fn mid_string_insertion_commits_the_edited_buffer() {
        let prompt = Input::default();
        let mut state = InputState::new("");
        for chunk in [&b"h"[..], b"i", b"\x1b[D", b"!"] {
            assert_eq!(prompt.step(&mut state, decode(chunk)), InputFlow::Editing);
        }
        assert_eq!(
            prompt.step(&mut state, decode(b"\r")),
            InputFlow::Submitted("h!i".into())
        );
    }

    #[test]
    fn initial_value_is_editable() {
        let prompt = Input {
            initial: "abc".into(),
            ..Default::default()
        };
        let mut state = InputState::new(&prompt.initial);
        prompt.step(&mut state, KeyEvent::Backspace);
        assert_eq!(
            prompt.step(&mut state, KeyEvent::Enter),
            InputFlow::Submitted("ab".into())
        );
    }

    #[test]
    fn vertical_arrows_are_ignored() {
        let prompt = Input::default();
        let mut state = InputState::new("xy");
        prompt.step(&mut state, KeyEvent::Up);
        prompt.step(&mut state, KeyEvent::Down);
        assert_eq!(state.buffer.to_string(), "xy");
        assert_eq!(state.buffer.cursor(), 2);
    }

    #[test]
    fn ctrl_keys_cancel_mid_edit() {
        let prompt = Input::default();
        let mut state = InputState::new("partial");
        assert_eq!(
            prompt.step(&mut state, decode(&[0x03])),
            InputFlow::Canceled
        );
        assert_eq!(
            prompt.step(&mut state, decode(&[0x11])),
            InputFlow::Canceled
        );
    }

    #[test]
    fn validation_failure_stays_editing_until_corrected() {
        let prompt = Input {
            validate: Some(Box::new(|value: &str| {
                if value.len() < 3 {
                    Err("too short".into())
                } else {
                    Ok(())
                }
            })),
            ..Default::default()
        };
        let mut state = InputState::new("");
        prompt.step(&mut state, KeyEvent::Rune('a'));
        assert_eq!(prompt.step(&mut state, KeyEvent::Enter), InputFlow::Editing);
        assert_eq!(state.error.as_deref(), Some("too short"));

        prompt.step(&mut state, KeyEvent::Rune('b'));
        assert_eq!(state.error, None);
        prompt.step(&mut state, KeyEvent::Rune('c'));
        assert_eq!(
            prompt.step(&mut state, KeyEvent::Enter),
            InputFlow::Submitted("abc".into())
        );
    }

    #[test]
    fn placeholder_renders_only_while_empty() {
        let prompt = Input {
            title: "> ".into(),
            placeholder: "hint".into(),
            ..Default::default()
        };
        let mut state = InputState::new("");
        let Frame::Line { text, .. } = prompt.frame(&state) else {
            panic!("expected a line frame");
        };
        assert!(text.contains("hint"));

        prompt.step(&mut state, KeyEvent::Rune('x'));
        let Frame::Line { text, .. } = prompt.frame(&state) else {
            panic!("expected a line frame");
        };
        assert!(!text.contains("hint"));
        assert!(text.contains('x'));
    }

    #[test]
    fn cursor_column_counts_title_and_wide_characters() {
        let prompt = Input {
            title: "> ".into(),
            ..Default::default()
        };
        let mut state = InputState::new("");
        prompt.step(&mut state, KeyEvent::Rune('あ'));
        let Frame::Line { cursor_col, .. } = prompt.frame(&state) else {
            panic!("expected a line frame");
        };
        assert_eq!(cursor_col, Some(4)); // "> " is 2 columns, 'あ' is 2

        prompt.step(&mut state, KeyEvent::Left);
        let Frame::Line { cursor_col, .. } = prompt.frame(&state) else {
            panic!("expected a line frame");
        };
        assert_eq!(cursor_col, Some(2));
    }

    #[test]
    fn validation_error_is_rendered_with_the_error_style() {
        let prompt = Input {
            validate: Some(Box::new(|_| Err("bad".into()))),
            ..Default::default()
        };
        let mut state = InputState::new("");
        prompt.step(&mut state, KeyEvent::Enter);
        let Frame::Line { text, .. } = prompt.frame(&state) else {
            panic!("expected a line frame");
        };
        assert!(text.contains("\x1b[31mbad\x1b[0m"));
    }
}
