//! Static copy renderer for the home and about pages.

use crate::ui::copy::CopySection;
use crate::ui::helpers::{char_len, pad, position_cursor, truncate, wrap_text};
use crate::ui::theme::Theme;

/// Left margin of section text.
const MARGIN: usize = 2;

/// Renders headed, word-wrapped sections from `row` down to `bottom`.
///
/// A blank line separates sections. Text that would run past `bottom` is
/// dropped.
///
/// # Returns
///
/// The row after the last line written.
pub fn render_sections(
    out: &mut String,
    row: usize,
    bottom: usize,
    sections: &[CopySection],
    theme: &Theme,
    cols: usize,
) -> usize {
    let width = cols.saturating_sub(MARGIN * 2).max(1);
    let mut current_row = row;

    for (index, section) in sections.iter().enumerate() {
        if index > 0 {
            current_row += 1;
        }
        if current_row > bottom {
            break;
        }

        position_cursor(out, current_row, 1);
        pad(out, MARGIN);
        out.push_str(Theme::bold());
        out.push_str(&Theme::fg(&theme.colors.heading_fg));
        out.push_str(&truncate(section.heading, width));
        out.push_str(Theme::reset());
        current_row += 1;

        for paragraph in section.paragraphs {
            for line in wrap_text(paragraph, width) {
                if current_row > bottom {
                    return current_row;
                }
                position_cursor(out, current_row, 1);
                pad(out, MARGIN);
                out.push_str(&Theme::fg(&theme.colors.text_normal));
                out.push_str(&line);
                pad(out, width.saturating_sub(char_len(&line)));
                out.push_str(Theme::reset());
                current_row += 1;
            }
        }
    }

    current_row
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECTIONS: &[CopySection] = &[
        CopySection {
            heading: "Our Mission",
            paragraphs: &["Bridging the gap between signers and speakers"],
        },
        CopySection {
            heading: "How It Works",
            paragraphs: &["A camera reads the hands"],
        },
    ];

    #[test]
    fn sections_are_separated_by_a_blank_line() {
        let theme = Theme::default();
        let mut out = String::new();
        let next = render_sections(&mut out, 4, 40, SECTIONS, &theme, 30);

        // heading, two wrapped lines, blank, heading, one unwrapped line
        assert_eq!(next, 10);
        assert!(out.contains("\u{1b}[8;1H"));
        assert!(out.contains("How It Works"));
    }

    #[test]
    fn wrapped_paragraphs_push_later_rows_down() {
        let theme = Theme::default();
        let sections = [
            SECTIONS[0],
            CopySection {
                heading: "How It Works",
                paragraphs: &["A camera reads hand landmarks"],
            },
        ];
        let mut out = String::new();
        let next = render_sections(&mut out, 4, 40, &sections, &theme, 30);

        assert_eq!(next, 11);
        assert!(out.contains("\u{1b}[9;1H"));
        assert!(out.contains("\u{1b}[10;1H"));
    }

    #[test]
    fn overflow_is_clipped() {
        let theme = Theme::default();
        let mut out = String::new();
        render_sections(&mut out, 4, 5, SECTIONS, &theme, 30);

        assert!(out.contains("Our Mission"));
        assert!(!out.contains("How It Works"));
        assert!(!out.contains("\u{1b}[6;1H"));
    }
}
