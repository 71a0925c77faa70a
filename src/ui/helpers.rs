//! Low-level drawing helpers shared by the components.
//!
//! Components draw into a [`Canvas`], an ANSI frame buffer, instead of
//! printing directly. The plugin runtime prints the finished frame in one go,
//! and tests can inspect it.
//!
//! Positions are 1-indexed like the terminal's cursor addressing. Widths are
//! measured in characters, not bytes.

use crate::ui::theme::Theme;

/// An ANSI frame under construction.
#[derive(Debug, Default)]
pub struct Canvas {
    buf: String,
}

impl Canvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the cursor to `row`, `col`.
    pub fn move_to(&mut self, row: usize, col: usize) {
        self.buf.push_str(&format!("\u{1b}[{row};{col}H"));
    }

    /// Appends text or an escape sequence.
    pub fn put(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    /// Appends `count` spaces.
    pub fn pad(&mut self, count: usize) {
        self.buf.extend(std::iter::repeat(' ').take(count));
    }

    /// Appends `text` followed by spaces up to `width` characters.
    pub fn put_padded(&mut self, text: &str, width: usize) {
        self.put(text);
        self.pad(width.saturating_sub(text_width(text)));
    }

    /// Writes `text` centered on `row`, filling the line to `cols`.
    pub fn put_centered(&mut self, row: usize, text: &str, cols: usize) {
        let len = text_width(text).min(cols);
        let padding = cols.saturating_sub(len) / 2;
        self.move_to(row, 1);
        self.pad(padding);
        self.put(text);
        self.pad(cols.saturating_sub(padding + len));
    }

    /// The frame so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    #[must_use]
    pub fn finish(self) -> String {
        self.buf
    }
}

/// Width of `text` in terminal columns, assuming one column per character.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Writes `text` with the given character ranges highlighted.
///
/// `restore` is re-applied after each highlighted run so the surrounding
/// style (row stripe, text color) continues.
///
/// ```
/// use staff_portal::ui::helpers::{render_highlighted_text, Canvas};
/// use staff_portal::ui::Theme;
///
/// let mut canvas = Canvas::new();
/// render_highlighted_text(&mut canvas, "S100", &[(0, 2)], &Theme::default(), "");
/// assert!(canvas.as_str().ends_with("00"));
/// ```
pub fn render_highlighted_text(
    canvas: &mut Canvas,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    restore: &str,
) {
    if ranges.is_empty() {
        canvas.put(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        if start > current_pos {
            let normal: String = chars[current_pos..start].iter().collect();
            canvas.put(&normal);
        }

        canvas.put(&Theme::fg(&theme.colors.match_highlight_fg));
        canvas.put(&Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted: String = chars[start..end].iter().collect();
        canvas.put(&highlighted);
        canvas.put(Theme::reset());
        canvas.put(restore);

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        canvas.put(&remaining);
    }
}

/// Removes ANSI escape sequences, leaving the visible text.
#[must_use]
pub fn strip_ansi(frame: &str) -> String {
    let mut out = String::with_capacity(frame.len());
    let mut chars = frame.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_text() {
        let mut canvas = Canvas::new();
        canvas.put_centered(3, "abc", 9);
        assert_eq!(canvas.as_str(), "\u{1b}[3;1H   abc   ");
    }

    #[test]
    fn cursor_moves_use_terminal_addressing() {
        let mut canvas = Canvas::new();
        canvas.move_to(12, 40);
        canvas.put("x");
        assert_eq!(canvas.finish(), "\u{1b}[12;40Hx");
    }

    #[test]
    fn highlights_ranges_in_order() {
        let theme = Theme::default();
        let mut canvas = Canvas::new();
        render_highlighted_text(&mut canvas, "abcdef", &[(1, 3), (4, 5)], &theme, "");
        assert_eq!(strip_ansi(canvas.as_str()), "abcdef");
        assert!(canvas.as_str().starts_with('a'));
    }

    #[test]
    fn out_of_range_highlights_are_ignored() {
        let theme = Theme::default();
        let mut canvas = Canvas::new();
        render_highlighted_text(&mut canvas, "ab", &[(1, 9), (5, 6)], &theme, "");
        assert_eq!(strip_ansi(canvas.as_str()), "ab");
    }

    #[test]
    fn strips_escape_sequences() {
        let frame = format!("{}hi{}", Theme::fg("#ffffff"), Theme::reset());
        assert_eq!(strip_ansi(&frame), "hi");
        assert_eq!(strip_ansi("\u{1b}[2;1Hrow"), "row");
    }
}
