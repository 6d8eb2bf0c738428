//! Single-selection list prompt.

use std::io;

use tracing::debug;

use crate::core::key::KeyEvent;
use crate::core::options::{OptionItem, OptionList};
use crate::core::term::{CancelToken, TerminalSession};
use crate::error::{PromptError, Result};
use crate::theme::Theme;
use crate::ui::renderer::{Frame, Renderer};

use super::{next_event, ListFlow};

/// Pick exactly one option from a list.
///
/// The chosen option's value is returned by move, so `run` consumes the
/// prompt.
///
/// ```no_run
/// use promptline::{OptionItem, Select};
///
/// let color = Select {
///     title: "Pick a color".into(),
///     options: vec![
///         OptionItem::new("red", "#f00"),
///         OptionItem::new("green", "#0f0"),
///     ],
///     ..Default::default()
/// }
/// .run()?;
/// # Ok::<(), promptline::PromptError>(())
/// ```
pub struct Select<T> {
    /// Title line rendered above the options.
    pub title: String,
    /// Options in display order. Must not be empty.
    pub options: Vec<OptionItem<T>>,
    /// Clear the whole screen before each frame.
    pub clear_screen: bool,
    pub theme: Theme,
    /// Observed for external cancellation while the prompt is blocked.
    pub cancel: CancelToken,
}

impl<T> Default for Select<T> {
    fn default() -> Self {
        Self {
            title: String::new(),
            options: Vec::new(),
            clear_screen: false,
            theme: Theme::default(),
            cancel: CancelToken::default(),
        }
    }
}

/// One state-machine transition: arrows move the highlight, Enter
/// confirms it, anything unrecognized keeps browsing.
fn step<T>(list: &mut OptionList<T>, event: KeyEvent) -> ListFlow {
    match event {
        KeyEvent::Ctrl('c') | KeyEvent::Ctrl('q') => ListFlow::Canceled,
        KeyEvent::Up => {
            list.move_highlight_up();
            ListFlow::Browsing
        }
        KeyEvent::Down => {
            list.move_highlight_down();
            ListFlow::Browsing
        }
        KeyEvent::Enter => ListFlow::Confirmed,
        _ => ListFlow::Browsing,
    }
}

fn frame<T>(title: &str, theme: &Theme, list: &OptionList<T>) -> Frame {
    let mut lines = Vec::with_capacity(list.len() + 1);
    if !title.is_empty() {
        lines.push(title.to_string());
    }
    for (i, item) in list.items().iter().enumerate() {
        let prefix = if i == list.highlight() {
            theme.prompt_marker.as_str()
        } else {
            "  "
        };
        lines.push(format!("{prefix}{}", item.label));
    }
    Frame::List {
        lines,
        help: Some(theme.select_help.clone()),
    }
}

impl<T> Select<T> {
    /// Run the prompt to completion and return the chosen value.
    ///
    /// Fails with [`PromptError::NoOptions`] before any terminal state
    /// is touched when the option list is empty, and with
    /// [`PromptError::Canceled`] when the user aborts.
    pub fn run(self) -> Result<T> {
        let Select {
            title,
            options,
            clear_screen,
            theme,
            cancel,
        } = self;
        let mut list = OptionList::new(options)?;

        let mut session = TerminalSession::open(cancel)?;
        session.enter_raw()?;
        debug!("select prompt started");

        let mut renderer = Renderer::new(io::stdout(), session.rows(), clear_screen);
        renderer
            .margin_top(theme.margin_top)
            .map_err(PromptError::WriteFailure)?;
        renderer.hide_cursor().map_err(PromptError::WriteFailure)?;

        let outcome = drive(&title, &theme, &mut list, &mut session, &mut renderer);

        let _ = renderer.margin_bottom(theme.margin_bottom);
        session.restore();
        debug!("select prompt finished");

        outcome.map(|()| list.confirmed_value())
    }
}

fn drive<T>(
    title: &str,
    theme: &Theme,
    list: &mut OptionList<T>,
    session: &mut TerminalSession,
    renderer: &mut Renderer<io::Stdout>,
) -> Result<()> {
    loop {
        renderer
            .paint(&frame(title, theme, list))
            .map_err(PromptError::WriteFailure)?;
        match step(list, next_event(session)?) {
            ListFlow::Browsing => continue,
            ListFlow::Confirmed => return Ok(()),
            ListFlow::Canceled => return Err(PromptError::Canceled),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::key::decode;

    fn abc() -> OptionList<&'static str> {
        OptionList::new(vec![
            OptionItem::new("first", "a"),
            OptionItem::new("second", "b"),
            OptionItem::new("third", "c"),
        ])
        .unwrap()
    }

    #[test]
    fn arrows_move_the_highlight_with_clamping() {
        let mut list = abc();
        assert_eq!(step(&mut list, decode(b"\x1b[A")), ListFlow::Browsing);
        assert_eq!(list.highlight(), 0);
        step(&mut list, decode(b"\x1b[B"));
        step(&mut list, decode(b"\x1b[B"));
        step(&mut list, decode(b"\x1b[B"));
        assert_eq!(list.highlight(), 2);
    }

    #[test]
    fn enter_confirms_the_highlighted_value() {
        let mut list = abc();
        step(&mut list, KeyEvent::Down);
        assert_eq!(step(&mut list, decode(b"\r")), ListFlow::Confirmed);
        assert_eq!(list.confirmed_value(), "b");
    }

    #[test]
    fn space_does_not_select_in_single_select() {
        let mut list = abc();
        assert_eq!(step(&mut list, KeyEvent::Space), ListFlow::Browsing);
        assert!(list.items().iter().all(|item| !item.selected));
    }

    #[test]
    fn ctrl_keys_cancel() {
        let mut list = abc();
        assert_eq!(step(&mut list, decode(&[0x03])), ListFlow::Canceled);
        assert_eq!(step(&mut list, decode(&[0x11])), ListFlow::Canceled);
    }

    #[test]
    fn empty_options_fail_before_any_terminal_state() {
        let result = Select::<&str> {
            options: Vec::new(),
            ..Default::default()
        }
        .run();
        assert!(matches!(result, Err(PromptError::NoOptions)));
    }

    #[test]
    fn frame_marks_only_the_highlighted_option() {
        let theme = Theme::default();
        let mut list = abc();
        step(&mut list, KeyEvent::Down);
        let Frame::List { lines, help } = frame("choose", &theme, &list) else {
            panic!("expected a list frame");
        };
        assert_eq!(lines[0], "choose");
        assert!(lines[1].starts_with("  "));
        assert!(lines[2].starts_with(&theme.prompt_marker));
        assert!(lines[3].starts_with("  "));
        assert_eq!(help.as_deref(), Some(theme.select_help.as_str()));
    }
}
