//! Multiple-selection list prompt.

use std::io;

use tracing::debug;

use crate::core::key::KeyEvent;
use crate::core::options::{OptionItem, OptionList};
use crate::core::term::{CancelToken, TerminalSession};
use crate::error::{PromptError, Result};
use crate::theme::Theme;
use crate::ui::renderer::{Frame, Renderer};

use super::{next_event, ListFlow};

/// Toggle any number of options and confirm the set.
///
/// Confirming with nothing toggled yields an empty `Vec`; that is a
/// valid answer, not an error.
///
/// ```no_run
/// use promptline::{MultiSelect, OptionItem};
///
/// let toppings = MultiSelect {
///     title: "Toppings?".into(),
///     options: vec![
///         OptionItem::new("mushrooms", "mushrooms"),
///         OptionItem::new("olives", "olives").with_selected(true),
///     ],
///     ..Default::default()
/// }
/// .run()?;
/// # Ok::<(), promptline::PromptError>(())
/// ```
pub struct MultiSelect<T> {
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

impl<T> Default for MultiSelect<T> {
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

/// One state-machine transition: arrows move the highlight, Space
/// toggles it, Enter confirms the selected set.
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
        KeyEvent::Space => {
            list.toggle_selected();
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
        let mark = if item.selected {
            theme.selected_mark.as_str()
        } else {
            theme.unselected_mark.as_str()
        };
        lines.push(format!("{prefix}{mark} {}", item.label));
    }
    Frame::List {
        lines,
        help: Some(theme.multi_select_help.clone()),
    }
}

impl<T> MultiSelect<T> {
    /// Run the prompt to completion and return the selected values in
    /// display order.
    ///
    /// Fails with [`PromptError::NoOptions`] before any terminal state
    /// is touched when the option list is empty, and with
    /// [`PromptError::Canceled`] when the user aborts.
    pub fn run(self) -> Result<Vec<T>> {
        let MultiSelect {
            title,
            options,
            clear_screen,
            theme,
            cancel,
        } = self;
        let mut list = OptionList::new(options)?;

        let mut session = TerminalSession::open(cancel)?;
        session.enter_raw()?;
        debug!("multi-select prompt started");

        let mut renderer = Renderer::new(io::stdout(), session.rows(), clear_screen);
        renderer
            .margin_top(theme.margin_top)
            .map_err(PromptError::WriteFailure)?;
        renderer.hide_cursor().map_err(PromptError::WriteFailure)?;

        let outcome = drive(&title, &theme, &mut list, &mut session, &mut renderer);

        let _ = renderer.margin_bottom(theme.margin_bottom);
        session.restore();
        debug!("multi-select prompt finished");

        outcome.map(|()| list.selected_values())
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
    fn toggling_two_options_confirms_them_in_order() {
        let mut list = abc();
        for chunk in [&b"\x1b[B"[..], b" ", b"\x1b[B", b" "] {
            assert_eq!(step(&mut list, decode(chunk)), ListFlow::Browsing);
        }
        assert_eq!(step(&mut list, decode(b"\r")), ListFlow::Confirmed);
        assert_eq!(list.selected_values(), vec!["b", "c"]);
    }

    #[test]
    fn confirming_nothing_yields_an_empty_set() {
        let mut list = abc();
        assert_eq!(step(&mut list, decode(b"\r")), ListFlow::Confirmed);
        assert_eq!(list.selected_values(), Vec::<&str>::new());
    }

    #[test]
    fn space_toggles_off_again() {
        let mut list = abc();
        step(&mut list, KeyEvent::Space);
        step(&mut list, KeyEvent::Space);
        assert_eq!(list.selected_values(), Vec::<&str>::new());
    }

    #[test]
    fn ctrl_keys_cancel_regardless_of_selection() {
        let mut list = abc();
        step(&mut list, KeyEvent::Space);
        assert_eq!(step(&mut list, decode(&[0x03])), ListFlow::Canceled);
        assert_eq!(step(&mut list, decode(&[0x11])), ListFlow::Canceled);
    }

    #[test]
    fn empty_options_fail_before_any_terminal_state() {
        let result = MultiSelect::<&str> {
            options: Vec::new(),
            ..Default::default()
        }
        .run();
        assert!(matches!(result, Err(PromptError::NoOptions)));
    }

    #[test]
    fn frame_shows_marks_and_highlight() {
        let theme = Theme::default();
        let mut list = abc();
        step(&mut list, KeyEvent::Space); // select "first"
        step(&mut list, KeyEvent::Down);
        let Frame::List { lines, help } = frame("", &theme, &list) else {
            panic!("expected a list frame");
        };
        assert_eq!(lines.len(), 3); // empty title adds no line
        assert!(lines[0].starts_with("  "));
        assert!(lines[0].contains(&theme.selected_mark));
        assert!(lines[1].starts_with(&theme.prompt_marker));
        assert!(lines[1].contains(&theme.unselected_mark));
        assert_eq!(help.as_deref(), Some(theme.multi_select_help.as_str()));
    }
}
