//! Composable UI component renderers.
//!
//! Each component appends one part of the interface to a frame buffer and
//! returns the next free row, so layouts read top to bottom.
//!
//! # Components
//!
//! - [`header`]: Brand line and page tabs
//! - [`footer`]: Keybinding hints
//! - [`search`]: Search input box
//! - [`filters`]: Facet selections and result count
//! - [`table`]: Record rows with chips and badges
//! - [`detail`]: Long-form fields of the selected record
//! - [`sections`]: Static copy of the home and about pages
//! - [`empty`]: Loading, no-match and unavailable messages
//!
//! # Layout Modes
//!
//! - [`render_listing_mode`]: Header + Search + Filters + List/Detail + Footer
//! - [`render_static_mode`]: Header + Sections + Featured list + Footer

mod detail;
mod empty;
mod filters;
mod footer;
mod header;
mod search;
mod sections;
mod table;

pub use detail::render_detail;
pub use empty::render_empty_state;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use filters::render_filter_bar;
use footer::render_footer;
use header::render_header;
use search::render_search_bar;
use sections::render_sections;
use table::render_table_rows;

/// Minimum pane width for the detail panel to sit beside the list.
pub const DETAIL_MIN_COLS: usize = 90;

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    row + 1
}

/// Draws the closing border and the footer on the last two rows.
fn render_bottom(out: &mut String, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_row = rows.max(2);
    render_border(out, footer_row - 1, &theme.colors.border, cols);
    render_footer(out, footer_row, &vm.footer, theme, cols);
}

/// Renders a listing page.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Bar - 3 lines, search mode only]
/// [Filter Bar]
/// [List rows          │ Detail panel]
/// [Border]
/// [Footer]
/// ```
///
/// The detail panel is shown only when the pane is at least
/// [`DETAIL_MIN_COLS`] wide. An empty state replaces both list and detail.
pub fn render_listing_mode(out: &mut String, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(out, current_row, &vm.header, theme, cols);
    current_row = render_border(out, current_row, &theme.colors.border, cols);
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(out, current_row, search, theme, cols);
    }
    if let Some(bar) = &vm.filter_bar {
        current_row = render_filter_bar(out, current_row, bar, theme, cols);
    }

    let bottom = rows.saturating_sub(2);
    if let Some(empty) = &vm.empty_state {
        if current_row + 2 <= bottom {
            render_empty_state(out, current_row + 1, empty, theme, cols);
        }
    } else {
        let fits = (bottom + 1).saturating_sub(current_row);
        let items = &vm.display_items[..vm.display_items.len().min(fits)];

        match &vm.detail {
            Some(detail) if cols >= DETAIL_MIN_COLS => {
                let list_width = cols * 3 / 5;
                render_table_rows(out, current_row, 1, items, theme, list_width);
                for row in current_row..=bottom {
                    position_cursor(out, row, list_width + 1);
                    out.push_str(&Theme::fg(&theme.colors.border));
                    out.push('│');
                    out.push_str(Theme::reset());
                }
                render_detail(
                    out,
                    current_row,
                    bottom,
                    list_width + 3,
                    detail,
                    theme,
                    cols.saturating_sub(list_width + 3),
                );
            }
            _ => {
                render_table_rows(out, current_row, 1, items, theme, cols);
            }
        }
    }

    render_bottom(out, vm, theme, cols, rows);
}

/// Renders the home or about page.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Sections]
/// [Featured rows or empty state]
/// [Detail of the selected featured row]
/// [Border]
/// [Footer]
/// ```
///
/// Everything below the sections is clipped above the closing border.
pub fn render_static_mode(out: &mut String, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(out, current_row, &vm.header, theme, cols);
    current_row = render_border(out, current_row, &theme.colors.border, cols);

    let bottom = rows.saturating_sub(2);
    current_row = render_sections(out, current_row + 1, bottom, &vm.sections, theme, cols);

    if let Some(empty) = &vm.empty_state {
        if current_row + 2 <= bottom {
            render_empty_state(out, current_row + 1, empty, theme, cols);
        }
    } else if current_row <= bottom {
        let fits = bottom - current_row + 1;
        let items = &vm.display_items[..vm.display_items.len().min(fits)];
        current_row = render_table_rows(out, current_row, 1, items, theme, cols);

        if let Some(detail) = &vm.detail {
            if current_row < bottom {
                render_detail(out, current_row + 1, bottom, 3, detail, theme, cols.saturating_sub(4));
            }
        }
    }

    render_bottom(out, vm, theme, cols, rows);
}
