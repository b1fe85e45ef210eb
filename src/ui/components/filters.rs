//! Filter bar component renderer.

use crate::ui::helpers::{char_len, pad, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterBarInfo;

/// Renders the facet selections and the result count on one line.
///
/// ```text
///  Category: Greetings   Level: All Levels          Showing 2 of 5 gestures
/// ```
///
/// Facets a record kind lacks are omitted. The summary is right-aligned and
/// wins over the facets when the line is too narrow for both.
pub fn render_filter_bar(out: &mut String, row: usize, bar: &FilterBarInfo, theme: &Theme, cols: usize) -> usize {
    let summary = truncate(&bar.summary, cols.saturating_sub(1));
    let summary_len = char_len(&summary) + 1;

    let mut facets = String::new();
    if let Some(category) = &bar.category {
        facets.push_str(&format!(" Category: {category}  "));
    }
    if let Some(difficulty) = &bar.difficulty {
        facets.push_str(&format!(" Level: {difficulty}  "));
    }
    let facets = truncate(&facets, cols.saturating_sub(summary_len));
    let facets_len = char_len(&facets);

    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.tag_fg));
    out.push_str(&facets);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    pad(out, cols.saturating_sub(facets_len + summary_len));
    out.push_str(&summary);
    out.push(' ');
    out.push_str(Theme::reset());
    row + 1
}
