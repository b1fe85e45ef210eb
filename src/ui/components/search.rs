//! Search bar component renderer.
//!
//! This module renders the search input box with a bordered frame and query
//! text display.

use crate::ui::helpers::{char_len, pad, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 2;

/// Renders the search input box at the specified row.
///
/// # Layout
///
/// ```text
/// [margin] ┌─────────────────────┐ [margin]
/// [margin] │ / query_            │ [margin]
/// [margin] └─────────────────────┘ [margin]
/// ```
///
/// An empty query shows the dimmed placeholder. While typing, a cursor block
/// follows the query; while browsing results the border is dimmed.
///
/// # Returns
///
/// The next available row position (row + 3, since search box uses 3 lines)
pub fn render_search_bar(out: &mut String, row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if search.is_typing {
        Theme::fg(&theme.colors.search_bar_border)
    } else {
        Theme::fg(&theme.colors.border)
    };

    position_cursor(out, row, 1);
    pad(out, SEARCH_BOX_MARGIN);
    out.push_str(&border);
    out.push('┌');
    out.push_str(&"─".repeat(inner_width));
    out.push('┐');
    out.push_str(Theme::reset());

    position_cursor(out, row + 1, 1);
    pad(out, SEARCH_BOX_MARGIN);
    out.push_str(&border);
    out.push('│');

    let prompt = " / ";
    let cursor = if search.is_typing { "▏" } else { "" };
    let room = inner_width.saturating_sub(char_len(prompt) + char_len(cursor));
    let used = if search.query.is_empty() {
        let placeholder = truncate(&search.placeholder, room);
        out.push_str(&Theme::fg(&theme.colors.text_normal));
        out.push_str(prompt);
        out.push_str(cursor);
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str(&placeholder);
        char_len(prompt) + char_len(cursor) + char_len(&placeholder)
    } else {
        let query = tail(&search.query, room);
        out.push_str(&Theme::fg(&theme.colors.text_normal));
        out.push_str(prompt);
        out.push_str(&query);
        out.push_str(cursor);
        char_len(prompt) + char_len(&query) + char_len(cursor)
    };

    pad(out, inner_width.saturating_sub(used));
    out.push_str(&border);
    out.push('│');
    out.push_str(Theme::reset());

    position_cursor(out, row + 2, 1);
    pad(out, SEARCH_BOX_MARGIN);
    out.push_str(&border);
    out.push('└');
    out.push_str(&"─".repeat(inner_width));
    out.push('┘');
    out.push_str(Theme::reset());

    row + 3
}

/// Last `width` characters of `text`, so the end of a long query stays visible.
fn tail(text: &str, width: usize) -> String {
    let len = char_len(text);
    text.chars().skip(len.saturating_sub(width)).collect()
}
