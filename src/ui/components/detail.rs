//! Detail panel component renderer.

use crate::ui::helpers::{char_len, pad, position_cursor, truncate, wrap_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailPanel;

/// Renders the selected record's long-form fields in a column.
///
/// The panel occupies rows `top..=bottom` starting at `col`. Each field gets a
/// heading line followed by its wrapped text; whatever does not fit above
/// `bottom` is cut off. The update time and image reference close the panel
/// when there is room.
pub fn render_detail(
    out: &mut String,
    top: usize,
    bottom: usize,
    col: usize,
    detail: &DetailPanel,
    theme: &Theme,
    width: usize,
) {
    let mut lines: Vec<(String, String)> = Vec::new();
    let heading = Theme::bold().to_string() + &Theme::fg(&theme.colors.heading_fg);
    let normal = Theme::fg(&theme.colors.text_normal);
    let dim = Theme::fg(&theme.colors.text_dim);

    lines.push((heading, truncate(&detail.title, width)));
    for (label, text) in &detail.fields {
        lines.push((String::new(), String::new()));
        lines.push((Theme::fg(&theme.colors.tag_fg), truncate(label, width)));
        lines.extend(wrap_text(text, width).into_iter().map(|line| (normal.clone(), line)));
    }
    if detail.updated.is_some() || detail.image.is_some() {
        lines.push((String::new(), String::new()));
    }
    if let Some(updated) = &detail.updated {
        lines.push((dim.clone(), truncate(updated, width)));
    }
    if let Some(image) = &detail.image {
        lines.push((dim.clone(), truncate(&format!("Image: {image}"), width)));
    }

    for (row, (style, text)) in (top..=bottom).zip(lines) {
        position_cursor(out, row, col);
        out.push_str(&style);
        out.push_str(&text);
        pad(out, width.saturating_sub(char_len(&text)));
        out.push_str(Theme::reset());
    }
}
