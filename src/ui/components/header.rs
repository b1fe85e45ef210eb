//! Header component renderer.
//!
//! Renders the brand line with the page tabs to its right.

use crate::ui::helpers::{char_len, pad, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header bar at the specified row.
///
/// # Layout
///
/// ```text
/// SignBridge  /gestures   1 Home  [2 Gestures]  3 Use Cases  4 About
/// ```
///
/// The title is bold in `header_fg`. The active tab uses the `tab_active_*`
/// colours; inactive tabs are dimmed. Tabs that do not fit are dropped from
/// the right, and the line is padded to `cols`.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_header(out: &mut String, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let base = header_base(theme);

    position_cursor(out, row, 1);
    out.push_str(&base);
    out.push_str(Theme::bold());

    let title = truncate(&header.title, cols);
    let mut used = char_len(&title);
    out.push_str(&title);
    out.push_str(Theme::reset());
    out.push_str(&base);

    for tab in &header.tabs {
        let label = format!(" {} ", tab.label);
        let width = char_len(&label) + 1;
        if used + width > cols {
            break;
        }

        out.push(' ');
        if tab.is_active {
            out.push_str(Theme::bold());
            out.push_str(&Theme::fg(&theme.colors.tab_active_fg));
            out.push_str(&Theme::bg(&theme.colors.tab_active_bg));
        } else {
            out.push_str(&Theme::fg(&theme.colors.text_dim));
        }
        out.push_str(&label);
        out.push_str(Theme::reset());
        out.push_str(&base);
        used += width;
    }

    pad(out, cols.saturating_sub(used));
    out.push_str(Theme::reset());
    row + 1
}

fn header_base(theme: &Theme) -> String {
    let mut base = Theme::fg(&theme.colors.header_fg);
    if let Some(bg) = &theme.colors.header_bg {
        base.push_str(&Theme::bg(bg));
    }
    base
}
