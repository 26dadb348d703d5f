//! Word wrapping for terminal display.
//!
//! Widths are measured in terminal columns with `unicode-width`, so wide
//! CJK glyphs and emoji occupy two cells. Paragraph breaks are kept as
//! empty lines. Words wider than the available width are hard-wrapped.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wraps prose to `max_width` columns, returning one entry per display row.
///
/// Runs of whitespace inside a line collapse to a single space at wrap
/// points. A `max_width` of zero returns the input lines unchanged.
#[must_use]
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return text.lines().map(str::to_owned).collect();
    }

    let mut rows = Vec::new();
    for line in text.lines() {
        wrap_line(line, max_width, &mut rows);
    }
    rows
}

fn wrap_line(line: &str, max_width: usize, rows: &mut Vec<String>) {
    if line.trim().is_empty() {
        rows.push(String::new());
        return;
    }

    let mut current = String::new();
    let mut current_width = 0;

    for word in line.split_whitespace() {
        let word_width = word.width();
        let separator = usize::from(current_width > 0);

        if current_width + separator + word_width <= max_width {
            if separator == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_width += separator + word_width;
            continue;
        }

        if current_width > 0 {
            rows.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= max_width {
            current.push_str(word);
            current_width = word_width;
        } else {
            current_width = hard_wrap_word(word, max_width, rows, &mut current);
        }
    }

    if current_width > 0 {
        rows.push(current);
    }
}

/// Splits an over-long word into full rows, leaving the remainder in
/// `current`. Returns the remainder's width.
fn hard_wrap_word(
    word: &str,
    max_width: usize,
    rows: &mut Vec<String>,
    current: &mut String,
) -> usize {
    let mut width = 0;
    for ch in word.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width && width > 0 {
            rows.push(std::mem::take(current));
            width = 0;
        }
        current.push(ch);
        width += ch_width;
    }
    width
}
