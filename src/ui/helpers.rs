//! Shared rendering utilities.
//!
//! Components append to a frame buffer (`&mut String`) rather than printing
//! directly, so a whole frame can be assembled, inspected in tests and written
//! to stdout in one go.
//!
//! All widths and ranges are in characters, not bytes.
//!
//! # Example
//!
//! ```
//! use signbridge::ui::helpers::{truncate, wrap_text};
//!
//! assert_eq!(truncate("Thank you very much", 10), "Thank y...");
//! assert_eq!(wrap_text("open palm wave", 9), vec!["open palm", "wave"]);
//! ```

use crate::ui::theme::Theme;

/// Appends a cursor move to `row`, `col` (both 1-indexed).
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    out.push_str(&format!("\u{1b}[{row};{col}H"));
}

/// Appends `count` spaces.
pub fn pad(out: &mut String, count: usize) {
    out.extend(std::iter::repeat(' ').take(count));
}

/// Number of characters in `text`.
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Shortens `text` to at most `width` characters, marking the cut with `...`.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if char_len(text) <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }

    let mut short: String = text.chars().take(width - 3).collect();
    short.push_str("...");
    short
}

/// Greedy word wrap to lines of at most `width` characters.
///
/// Words longer than `width` are split. Runs of whitespace collapse to a single
/// space; empty input yields no lines.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > width {
            if line_len > 0 {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        if line_len > 0 && line_len + 1 + word.len() > width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line_len += word.len();
        line.extend(word);
    }

    if line_len > 0 {
        lines.push(line);
    }
    lines
}

/// Appends `text` with highlighted character ranges.
///
/// Highlighting is skipped on selected rows so the selection colours stay
/// intact. Ranges past the end of `text` are clipped. After each highlighted
/// section `restore` is re-applied.
pub fn push_highlighted(
    out: &mut String,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
    restore: &str,
) {
    if ranges.is_empty() || is_selected {
        out.push_str(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len()).max(current_pos);
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }

        out.extend(&chars[current_pos..start]);
        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(restore);

        current_pos = end;
    }

    out.extend(&chars[current_pos..]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("Café", 4), "Café");
        assert_eq!(truncate("Cafés au lait", 8), "Cafés...");
        assert_eq!(truncate("Hello", 2), "He");
    }

    #[test]
    fn wrap_breaks_on_words() {
        let lines = wrap_text("Utilizing OpenCV to track hand landmarks", 16);
        assert_eq!(lines, vec!["Utilizing OpenCV", "to track hand", "landmarks"]);
        assert!(lines.iter().all(|l| char_len(l) <= 16));
    }

    #[test]
    fn wrap_splits_long_words() {
        assert_eq!(wrap_text("a abcdefgh", 4), vec!["a", "abcd", "efgh"]);
    }

    #[test]
    fn wrap_of_blank_text_is_empty() {
        assert!(wrap_text("   ", 10).is_empty());
        assert_eq!(wrap_text("one  two", 0), vec!["o", "n", "e", "t", "w", "o"]);
    }

    #[test]
    fn highlighted_text_keeps_all_characters() {
        let theme = Theme::default();
        let mut out = String::new();
        push_highlighted(&mut out, "Hello", &[(1, 3), (4, 9)], &theme, false, "");

        let plain: String = strip_escapes(&out);
        assert_eq!(plain, "Hello");
        assert!(out.contains(&Theme::bg(&theme.colors.match_highlight_bg)));
    }

    #[test]
    fn selected_rows_are_not_highlighted() {
        let theme = Theme::default();
        let mut out = String::new();
        push_highlighted(&mut out, "Hello", &[(0, 2)], &theme, true, "");
        assert_eq!(out, "Hello");
    }

    fn strip_escapes(s: &str) -> String {
        let mut plain = String::new();
        let mut in_escape = false;
        for c in s.chars() {
            match (in_escape, c) {
                (false, '\u{1b}') => in_escape = true,
                (true, 'm' | 'H') => in_escape = false,
                (true, _) => {}
                (false, c) => plain.push(c),
            }
        }
        plain
    }
}
