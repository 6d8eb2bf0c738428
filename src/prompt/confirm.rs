//! Yes/no confirmation prompt.

use std::io;

use tracing::debug;

use crate::core::key::KeyEvent;
use crate::core::term::{CancelToken, TerminalSession};
use crate::error::{PromptError, Result};
use crate::theme::Theme;
use crate::ui::renderer::{Frame, Renderer};

use super::next_event;

/// A yes/no question with a default answer.
///
/// ```no_run
/// use promptline::Confirm;
///
/// let proceed = Confirm {
///     title: "Continue?".into(),
///     default: true,
///     ..Default::default()
/// }
/// .run()?;
/// # Ok::<(), promptline::PromptError>(())
/// ```
#[derive(Default)]
pub struct Confirm {
    /// Question text; rendered with a `[y/N]` or `[Y/n]` suffix.
    pub title: String,
    /// Answer committed when the user presses Enter.
    pub default: bool,
    /// Clear the whole screen before each frame.
    pub clear_screen: bool,
    pub theme: Theme,
    /// Observed for external cancellation while the prompt is blocked.
    pub cancel: CancelToken,
}

/// Outcome of feeding one key event to the confirm state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ConfirmFlow {
    Asking,
    Confirmed(bool),
    Canceled,
}

impl Confirm {
    /// One state-machine transition. Unrecognized keys keep asking.
    fn step(&self, event: KeyEvent) -> ConfirmFlow {
        match event {
            KeyEvent::Ctrl('c') | KeyEvent::Ctrl('q') => ConfirmFlow::Canceled,
            KeyEvent::Enter => ConfirmFlow::Confirmed(self.default),
            KeyEvent::Rune('y') | KeyEvent::Rune('Y') => ConfirmFlow::Confirmed(true),
            KeyEvent::Rune('n') | KeyEvent::Rune('N') => ConfirmFlow::Confirmed(false),
            _ => ConfirmFlow::Asking,
        }
    }

    fn frame(&self) -> Frame {
        let hint = if self.default { "Y/n" } else { "y/N" };
        Frame::Line {
            text: format!("{} [{}]", self.title, hint),
            cursor_col: None,
        }
    }

    /// Run the prompt to completion.
    ///
    /// Returns the chosen answer, or [`PromptError::Canceled`] when the
    /// user aborts. The terminal is restored before this returns.
    pub fn run(&self) -> Result<bool> {
        let mut session = TerminalSession::open(self.cancel.clone())?;
        session.enter_raw()?;
        debug!("confirm prompt started");

        let mut renderer = Renderer::new(io::stdout(), session.rows(), self.clear_screen);
        renderer
            .margin_top(self.theme.margin_top)
            .map_err(PromptError::WriteFailure)?;
        renderer
            .hide_cursor()
            .map_err(PromptError::WriteFailure)?;

        let outcome = self.drive(&mut session, &mut renderer);

        let _ = renderer.margin_bottom(self.theme.margin_bottom);
        session.restore();
        debug!("confirm prompt finished");
        outcome
    }

    fn drive(
        &self,
        session: &mut TerminalSession,
        renderer: &mut Renderer<io::Stdout>,
    ) -> Result<bool> {
        loop {
            renderer
                .paint(&self.frame())
                .map_err(PromptError::WriteFailure)?;
            match self.step(next_event(session)?) {
                ConfirmFlow::Asking => continue,
                ConfirmFlow::Confirmed(answer) => return Ok(answer),
                ConfirmFlow::Canceled => return Err(PromptError::Canceled),
            }
        }
    }
}
