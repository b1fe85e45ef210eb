//! View model types representing renderable UI state.
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data such
//! as highlight ranges, badge tiers and pre-formatted status lines.
//!
//! # Example
//!
//! ```
//! use signbridge::ui::viewmodel::{DifficultyTier, DisplayItem};
//!
//! let item = DisplayItem {
//!     title: "Hello".to_string(),
//!     subtitle: "\"Hello\"".to_string(),
//!     tag: Some("Greetings".to_string()),
//!     badge: Some(("Easy".to_string(), DifficultyTier::classify("Easy"))),
//!     is_selected: true,
//!     highlight_ranges: vec![(0, 3)],
//!     subtitle_ranges: vec![(1, 4)],
//! };
//! assert_eq!(item.badge.unwrap().1, DifficultyTier::Easy);
//! ```

use crate::ui::copy::CopySection;

/// Complete UI view model for rendering one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Brand line and page tabs.
    pub header: HeaderInfo,

    /// Present while search mode is active.
    pub search_bar: Option<SearchBarInfo>,

    /// Present on listing pages.
    pub filter_bar: Option<FilterBarInfo>,

    /// Static copy shown above any list.
    pub sections: Vec<CopySection>,

    /// Rows of the visible window of the list.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected row within `display_items`.
    pub selected_index: usize,

    /// Long-form fields of the selected record.
    pub detail: Option<DetailPanel>,

    /// Replaces the list when there is nothing to show.
    pub empty_state: Option<EmptyState>,

    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    pub tabs: Vec<TabInfo>,
}

/// One page tab in the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabInfo {
    /// Label including the jump key, e.g. `"2 Gestures"`.
    pub label: String,
    pub is_active: bool,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text for the current mode and page.
    pub keybindings: String,
}

/// Message shown instead of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
    /// Rendered with the error colour rather than the neutral one.
    pub is_error: bool,
}

/// Search input display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
    /// Placeholder shown while the query is empty.
    pub placeholder: String,
    /// Whether keystrokes currently edit the query.
    pub is_typing: bool,
}

/// Facet selections and the result count of a listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBarInfo {
    /// Selected category label, or `None` when the kind has no categories.
    pub category: Option<String>,
    /// Selected difficulty label, or `None` when the kind has no difficulties.
    pub difficulty: Option<String>,
    /// e.g. `"Showing 2 of 5 gestures"`.
    pub summary: String,
}

/// Display information for a single list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub title: String,
    pub subtitle: String,
    /// Category chip.
    pub tag: Option<String>,
    /// Difficulty label with its colour tier.
    pub badge: Option<(String, DifficultyTier)>,
    pub is_selected: bool,
    /// Character ranges of `title` matching the search text.
    pub highlight_ranges: Vec<(usize, usize)>,
    /// Character ranges of `subtitle` matching the search text.
    pub subtitle_ranges: Vec<(usize, usize)>,
}

/// Colour tier of a difficulty badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyTier {
    Easy,
    Medium,
    Hard,
    Other,
}

impl DifficultyTier {
    /// Classifies a difficulty label, ignoring ASCII case and surrounding space.
    ///
    /// Only affects styling; filtering always compares labels exactly.
    #[must_use]
    pub fn classify(label: &str) -> Self {
        let label = label.trim();
        if label.eq_ignore_ascii_case("easy") {
            Self::Easy
        } else if label.eq_ignore_ascii_case("medium") {
            Self::Medium
        } else if label.eq_ignore_ascii_case("hard") {
            Self::Hard
        } else {
            Self::Other
        }
    }
}

/// Long-form view of the selected record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPanel {
    pub title: String,
    /// Labelled paragraphs, wrapped at render time.
    pub fields: Vec<(String, String)>,
    /// Relative update time, e.g. `"Updated 3d ago"`.
    pub updated: Option<String>,
    /// Opaque image reference, shown verbatim.
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_classification_ignores_ascii_case() {
        assert_eq!(DifficultyTier::classify("easy"), DifficultyTier::Easy);
        assert_eq!(DifficultyTier::classify("MEDIUM"), DifficultyTier::Medium);
        assert_eq!(DifficultyTier::classify(" Hard "), DifficultyTier::Hard);
        assert_eq!(DifficultyTier::classify("Expert"), DifficultyTier::Other);
        assert_eq!(DifficultyTier::classify(""), DifficultyTier::Other);
    }
}
