//! Cursor-addressed line buffer for the input prompt.

use unicode_width::UnicodeWidthChar;

/// An ordered sequence of code points with a cursor offset.
///
/// The cursor always satisfies `0 <= cursor <= len`. Widths are measured
/// in terminal columns, not code points: wide CJK characters occupy two
/// columns and combining marks occupy none, so the rendered cursor column
/// must come from [`LineBuffer::width_to_cursor`], never from the cursor
/// offset itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineBuffer {
    content: Vec<char>,
    cursor: usize,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the buffer with an initial value, cursor at the end.
    pub fn from_initial(initial: &str) -> Self {
        let content: Vec<char> = initial.chars().collect();
        let cursor = content.len();
        Self { content, cursor }
    }

    /// Insert a code point at the cursor and advance past it.
    pub fn insert(&mut self, ch: char) {
        self.content.insert(self.cursor, ch);
        self.cursor += 1;
    }

    /// Remove the code point before the cursor. No-op at offset 0.
    pub fn delete_before(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.content.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.content.len() {
            self.cursor += 1;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Rendered width of the whole content in terminal columns.
    pub fn width(&self) -> usize {
        Self::columns(&self.content)
    }

    /// Rendered width of the content up to the cursor.
    pub fn width_to_cursor(&self) -> usize {
        Self::columns(&self.content[..self.cursor])
    }

    fn columns(chars: &[char]) -> usize {
        chars.iter().map(|ch| ch.width().unwrap_or(0)).sum()
    }
}

impl std::fmt::Display for LineBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for ch in &self.content {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invariant(buf: &LineBuffer) {
        assert!(buf.cursor() <= buf.len());
    }

    #[test]
    fn cursor_stays_in_bounds_through_edits() {
        let mut buf = LineBuffer::new();
        buf.move_left();
        assert_invariant(&buf);
        buf.insert('a');
        buf.insert('b');
        buf.move_right();
        assert_invariant(&buf);
        assert_eq!(buf.cursor(), 2);
        buf.move_left();
        buf.move_left();
        buf.move_left();
        assert_invariant(&buf);
        assert_eq!(buf.cursor(), 0);
        buf.delete_before();
        assert_invariant(&buf);
        buf.move_right();
        buf.delete_before();
        assert_invariant(&buf);
        assert_eq!(buf.to_string(), "b");
    }

    #[test]
    fn delete_before_on_empty_buffer_is_a_noop() {
        let mut buf = LineBuffer::new();
        buf.delete_before();
        assert!(buf.is_empty());
        assert_eq!(buf.cursor(), 0);
    }

    #[test]
    fn mid_string_insertion() {
        let mut buf = LineBuffer::new();
        buf.insert('h');
        buf.insert('i');
        buf.move_left();
        buf.insert('!');
        assert_eq!(buf.to_string(), "h!i");
        assert_eq!(buf.cursor(), 2);
    }

    #[test]
    fn initial_value_places_cursor_at_end() {
        let buf = LineBuffer::from_initial("héllo");
        assert_eq!(buf.len(), 5);
        assert_eq!(buf.cursor(), 5);
        assert_eq!(buf.to_string(), "héllo");
    }

    #[test]
    fn width_counts_columns_not_code_points() {
        let mut buf = LineBuffer::from_initial("aあ");
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.width(), 3); // 'あ' is two columns wide

        // Combining acute accent adds a code point but no columns.
        buf.insert('\u{0301}');
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.width(), 3);
    }

    #[test]
    fn width_is_monotonic_in_the_cursor() {
        let mut buf = LineBuffer::from_initial("aあe\u{0301}z");
        let mut previous = buf.width_to_cursor();
        while buf.cursor() > 0 {
            buf.move_left();
            let width = buf.width_to_cursor();
            assert!(width <= previous);
            previous = width;
        }
        assert_eq!(previous, 0);
    }
}
