//! Frame painting over cursor-relative ANSI repositioning.
//!
//! The renderer repaints prompts in place instead of redrawing the
//! screen. A single editing line is cleared and rewritten with the
//! physical cursor placed by absolute column; a list block is rewound by
//! its previous height and rewritten line by line, each line force-reset
//! to column 0 so stale wider content cannot cause drift. Help text is
//! pinned to the bottom terminal row with a save/jump/restore sequence so
//! list navigation never disturbs it.

use std::io::{self, Write};

/// One prompt frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Frame {
    /// A single editing line. `cursor_col` is the absolute column the
    /// physical cursor lands on, or `None` to leave it at the line end.
    Line {
        text: String,
        cursor_col: Option<usize>,
    },
    /// A block of list lines (title included as the first line when
    /// present), redrawn in full every frame, plus optional pinned help.
    List {
        lines: Vec<String>,
        help: Option<String>,
    },
}

/// Paints frames to a terminal-like writer.
///
/// Generic over the writer so frames can be asserted against a byte
/// buffer; prompts instantiate it over stdout.
pub struct Renderer<W: Write> {
    out: W,
    /// Bottom terminal row, for pinning help text.
    rows: u16,
    /// Clear the whole screen instead of repainting in place.
    full_clear: bool,
    /// How many lines below the frame start the cursor sits after the
    /// previous paint; 0 before the first frame and after line frames.
    rewind: usize,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, rows: u16, full_clear: bool) -> Self {
        Self {
            out,
            rows,
            full_clear,
            rewind: 0,
        }
    }

    /// Paint one frame, replacing the previous one in place.
    pub fn paint(&mut self, frame: &Frame) -> io::Result<()> {
        if self.full_clear {
            self.clear_screen_and_home()?;
        } else {
            if self.rewind > 0 {
                self.move_cursor_up(self.rewind)?;
            }
            self.clear_line()?;
        }

        match frame {
            Frame::Line { text, cursor_col } => {
                write!(self.out, "{text}")?;
                if let Some(col) = cursor_col {
                    self.move_cursor_right(*col)?;
                }
                self.rewind = 0;
            }
            Frame::List { lines, help } => {
                for line in lines {
                    write!(self.out, "\r{line}\n")?;
                }
                if let Some(help) = help {
                    self.help_bar(help)?;
                }
                self.rewind = lines.len();
            }
        }

        self.out.flush()
    }

    /// Hide the terminal's cursor glyph (list prompts show selection via
    /// the marker prefix instead).
    pub fn hide_cursor(&mut self) -> io::Result<()> {
        write!(self.out, "\x1b[?25l")?;
        self.out.flush()
    }

    /// Show the terminal's cursor glyph.
    pub fn show_cursor(&mut self) -> io::Result<()> {
        write!(self.out, "\x1b[?25h")?;
        self.out.flush()
    }

    /// Blank lines above the prompt block.
    pub fn margin_top(&mut self, n: usize) -> io::Result<()> {
        self.blank_lines(n)
    }

    /// Blank lines below the prompt block.
    pub fn margin_bottom(&mut self, n: usize) -> io::Result<()> {
        self.blank_lines(n)
    }

    fn blank_lines(&mut self, n: usize) -> io::Result<()> {
        for _ in 0..n {
            write!(self.out, "\r\n")?;
        }
        self.out.flush()
    }

    fn clear_screen_and_home(&mut self) -> io::Result<()> {
        write!(self.out, "\x1b[2J\x1b[H")
    }

    fn clear_line(&mut self) -> io::Result<()> {
        write!(self.out, "\x1b[2K\r")
    }

    fn move_cursor_right(&mut self, cols: usize) -> io::Result<()> {
        // ESC[0C would still move one column, so column 0 is a bare
        // carriage return.
        if cols == 0 {
            write!(self.out, "\r")
        } else {
            write!(self.out, "\r\x1b[{cols}C")
        }
    }

    fn move_cursor_up(&mut self, times: usize) -> io::Result<()> {
        for _ in 0..times {
            write!(self.out, "\x1b[A")?;
        }
        Ok(())
    }

    /// Pin help text to the bottom terminal row without moving the
    /// logical cursor: save, jump, clear, write, restore.
    fn help_bar(&mut self, text: &str) -> io::Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        write!(self.out, "\x1b[s")?;
        write!(self.out, "\x1b[{};1H", self.rows)?;
        write!(self.out, "\x1b[2K")?;
        write!(self.out, "{text}")?;
        write!(self.out, "\x1b[u")
    }
}
