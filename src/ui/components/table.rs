//! List component renderer.
//!
//! Each record occupies one row: title with search highlights, dimmed
//! subtitle, then a category chip and a coloured difficulty badge in fixed
//! columns on the right.

use crate::ui::helpers::{self, char_len, pad, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Width of the category chip column.
const TAG_WIDTH: usize = 16;

/// Width of the difficulty badge column (`[Medium]` plus a space).
const BADGE_WIDTH: usize = 10;

/// Below this width the chip and badge columns are dropped.
const MIN_FACET_WIDTH: usize = 48;

/// Renders all rows starting at `row`, `col`, each `width` characters wide.
///
/// # Returns
///
/// The next available row position (row + number of items)
pub fn render_table_rows(
    out: &mut String,
    row: usize,
    col: usize,
    items: &[DisplayItem],
    theme: &Theme,
    width: usize,
) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(out, current_row, col, item, theme, width);
    }
    current_row
}

/// Renders a single row.
///
/// # Styling Precedence
///
/// 1. Selection colours across the whole row (if `is_selected`)
/// 2. Match highlights, chip and badge colours (unless selected)
/// 3. Normal text color
fn render_table_row(
    out: &mut String,
    row: usize,
    col: usize,
    item: &DisplayItem,
    theme: &Theme,
    width: usize,
) -> usize {
    let base = if item.is_selected {
        Theme::fg(&theme.colors.selection_fg) + &Theme::bg(&theme.colors.selection_bg)
    } else {
        Theme::fg(&theme.colors.text_normal)
    };

    position_cursor(out, row, col);
    out.push_str(&base);
    out.push(' ');

    let show_facets = width >= MIN_FACET_WIDTH;
    let facet_width = if show_facets { TAG_WIDTH + BADGE_WIDTH } else { 0 };
    let title_width = width.saturating_sub(1 + facet_width);

    let title = truncate(&item.title, title_width);
    let ranges = visible_ranges(&item.highlight_ranges, &item.title, &title);
    helpers::push_highlighted(out, &title, &ranges, theme, item.is_selected, &base);

    let mut used = char_len(&title);
    let room = title_width.saturating_sub(used);
    if !item.subtitle.is_empty() && room > 6 {
        let subtitle = truncate(&item.subtitle, room - 2);
        let dim = if item.is_selected {
            base.clone()
        } else {
            Theme::fg(&theme.colors.text_dim)
        };
        out.push_str(&dim);
        out.push_str("  ");
        let ranges = visible_ranges(&item.subtitle_ranges, &item.subtitle, &subtitle);
        helpers::push_highlighted(out, &subtitle, &ranges, theme, item.is_selected, &dim);
        out.push_str(&base);
        used += 2 + char_len(&subtitle);
    }
    pad(out, title_width.saturating_sub(used));

    if show_facets {
        let tag = item
            .tag
            .as_deref()
            .map(|tag| truncate(tag, TAG_WIDTH - 1))
            .unwrap_or_default();
        if !item.is_selected {
            out.push_str(&Theme::fg(&theme.colors.tag_fg));
        }
        out.push_str(&tag);
        pad(out, TAG_WIDTH - char_len(&tag));

        let badge = item
            .badge
            .as_ref()
            .map(|(label, tier)| (truncate(&format!("[{label}]"), BADGE_WIDTH - 1), *tier));
        match badge {
            Some((text, tier)) => {
                if !item.is_selected {
                    out.push_str(&Theme::fg(theme.badge_color(tier)));
                }
                out.push_str(&text);
                pad(out, BADGE_WIDTH - char_len(&text));
            }
            None => pad(out, BADGE_WIDTH),
        }
    }

    out.push_str(Theme::reset());
    row + 1
}

/// Clips highlight ranges to the part of the title left visible by truncation.
fn visible_ranges(ranges: &[(usize, usize)], full: &str, shown: &str) -> Vec<(usize, usize)> {
    let limit = if full == shown {
        char_len(shown)
    } else {
        char_len(shown).saturating_sub(3)
    };

    ranges
        .iter()
        .filter(|(start, _)| *start < limit)
        .map(|&(start, end)| (start, end.min(limit)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::viewmodel::DifficultyTier;

    fn item(selected: bool) -> DisplayItem {
        DisplayItem {
            title: "Thank You".to_string(),
            subtitle: "\"Thank you\"".to_string(),
            tag: Some("Greetings".to_string()),
            badge: Some(("Easy".to_string(), DifficultyTier::Easy)),
            is_selected: selected,
            highlight_ranges: vec![(0, 5)],
            subtitle_ranges: vec![],
        }
    }

    #[test]
    fn wide_rows_show_chip_and_colored_badge() {
        let theme = Theme::default();
        let mut out = String::new();
        let next = render_table_rows(&mut out, 4, 1, &[item(false)], &theme, 80);

        assert_eq!(next, 5);
        assert!(out.starts_with("\u{1b}[4;1H"));
        assert!(out.contains("Greetings"));
        assert!(out.contains(&format!("{}[Easy]", Theme::fg(&theme.colors.badge_easy))));
        assert!(out.contains(&Theme::bg(&theme.colors.match_highlight_bg)));
    }

    #[test]
    fn subtitle_matches_are_highlighted() {
        let theme = Theme::default();
        let highlight = Theme::bg(&theme.colors.match_highlight_bg);
        let mut row = item(false);
        row.highlight_ranges.clear();
        row.subtitle_ranges = vec![(1, 6)];

        let mut out = String::new();
        render_table_rows(&mut out, 1, 1, &[row], &theme, 80);

        assert!(out.contains(&format!("{highlight}Thank")));
        assert_eq!(out.matches(&highlight).count(), 1);
    }

    #[test]
    fn narrow_rows_drop_facet_columns() {
        let theme = Theme::default();
        let mut out = String::new();
        render_table_rows(&mut out, 1, 1, &[item(false)], &theme, 30);

        assert!(!out.contains("Greetings"));
        assert!(!out.contains("[Easy]"));
    }

    #[test]
    fn selected_row_uses_selection_colors_only() {
        let theme = Theme::default();
        let mut out = String::new();
        render_table_rows(&mut out, 1, 1, &[item(true)], &theme, 80);

        assert!(out.contains(&Theme::bg(&theme.colors.selection_bg)));
        assert!(!out.contains(&Theme::bg(&theme.colors.match_highlight_bg)));
    }

    #[test]
    fn truncated_titles_do_not_highlight_the_ellipsis() {
        assert_eq!(visible_ranges(&[(2, 12)], "Good Morning Sun", "Good Mo..."), vec![(2, 7)]);
        assert!(visible_ranges(&[(9, 12)], "Good Morning Sun", "Good Mo...").is_empty());
        assert_eq!(visible_ranges(&[(0, 4)], "Good", "Good"), vec![(0, 4)]);
    }
}
