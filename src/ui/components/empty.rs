//! Empty state component renderer.
//!
//! Shown in place of a list while records load, when nothing matches, or when
//! the content store is unreachable.

use crate::ui::helpers::{char_len, pad, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centered two-line message starting at `row`.
///
/// The message uses `error_fg` for failures and `empty_state_fg` otherwise;
/// the subtitle is dimmed. An empty subtitle leaves its line blank.
///
/// # Returns
///
/// The row after the subtitle.
pub fn render_empty_state(out: &mut String, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let color = if empty.is_error {
        &theme.colors.error_fg
    } else {
        &theme.colors.empty_state_fg
    };

    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(color));
    push_centered(out, &empty.message, cols);
    out.push_str(Theme::reset());

    position_cursor(out, row + 1, 1);
    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    push_centered(out, &empty.subtitle, cols);
    out.push_str(Theme::reset());

    row + 2
}

fn push_centered(out: &mut String, text: &str, cols: usize) {
    let text = truncate(text, cols);
    let len = char_len(&text);
    let padding = cols.saturating_sub(len) / 2;

    pad(out, padding);
    out.push_str(&text);
    pad(out, cols.saturating_sub(padding + len));
}
