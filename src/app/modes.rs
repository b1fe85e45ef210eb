//! Input mode and page state types for the application.
//!
//! # State Machine
//!
//! The application operates in one of two input modes:
//! - **Normal**: Page navigation, selection and facet commands
//! - **Search**: Editing or browsing the search text of the current listing
//!
//! Independently, exactly one [`Page`] is shown at a time. Pages are cycled with
//! `Tab`/`Shift+Tab` or jumped to with `1`-`4`.
//!
//! # Example
//!
//! ```
//! use signbridge::app::{InputMode, Page, SearchFocus};
//!
//! let input_mode = InputMode::Search(SearchFocus::Typing);
//! assert_eq!(Page::Home.next(), Page::Gestures);
//! assert_eq!(Page::parse("use-cases"), Some(Page::UseCases));
//! ```

use crate::content::Collection;

/// Focus state within search mode.
///
/// Determines whether search input is being typed or the filtered results are
/// being navigated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// Characters edit the search text.
    Typing,

    /// j/k move through the results; `/` returns to typing.
    Navigating,
}

/// Current input handling mode.
///
/// Controls which keybindings are active and whether the search bar is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Default navigation and command mode.
    #[default]
    Normal,

    /// Active search mode with focus state.
    Search(SearchFocus),
}

/// Host permission state for outgoing web requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WebAccess {
    /// The permission request has not been answered yet.
    #[default]
    Pending,
    Granted,
    Denied,
}

/// The four views of the content browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    /// Hero copy, mission statement and featured use cases.
    #[default]
    Home,
    /// The searchable, faceted gesture library.
    Gestures,
    /// The searchable list of use-case case studies.
    UseCases,
    /// Technology and team copy.
    About,
}

impl Page {
    /// Every page, in tab order.
    pub const ALL: [Self; 4] = [Self::Home, Self::Gestures, Self::UseCases, Self::About];

    /// Route label of the page, as used in links.
    #[must_use]
    pub const fn route(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Gestures => "/gestures",
            Self::UseCases => "/use-cases",
            Self::About => "/about",
        }
    }

    /// Tab title shown in the header.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Gestures => "Gestures",
            Self::UseCases => "Use Cases",
            Self::About => "About",
        }
    }

    /// Zero-based position in tab order.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Home => 0,
            Self::Gestures => 1,
            Self::UseCases => 2,
            Self::About => 3,
        }
    }

    /// Page at a zero-based tab position.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next page in tab order, wrapping to the first.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous page in tab order, wrapping to the last.
    #[must_use]
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Parses a configuration value (`home`, `gestures`, `use-cases`, `about`).
    ///
    /// Route labels such as `/use-cases` are accepted as well.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().trim_start_matches('/').to_ascii_lowercase().as_str() {
            "" | "home" => Some(Self::Home),
            "gestures" => Some(Self::Gestures),
            "use-cases" | "usecases" | "use_cases" => Some(Self::UseCases),
            "about" => Some(Self::About),
            _ => None,
        }
    }

    /// Collection mounted while the page is shown, if any.
    #[must_use]
    pub const fn collection(self) -> Option<Collection> {
        match self {
            Self::Gestures => Some(Collection::Gestures),
            Self::Home | Self::UseCases => Some(Collection::UseCases),
            Self::About => None,
        }
    }

    /// Whether the page offers search and facet filters.
    #[must_use]
    pub const fn is_listing(self) -> bool {
        matches!(self, Self::Gestures | Self::UseCases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_order_wraps() {
        assert_eq!(Page::About.next(), Page::Home);
        assert_eq!(Page::Home.prev(), Page::About);
        for page in Page::ALL {
            assert_eq!(page.next().prev(), page);
            assert_eq!(Page::from_index(page.index()), Some(page));
        }
        assert_eq!(Page::from_index(4), None);
    }

    #[test]
    fn parse_accepts_names_and_routes() {
        assert_eq!(Page::parse("Gestures"), Some(Page::Gestures));
        assert_eq!(Page::parse("/about"), Some(Page::About));
        assert_eq!(Page::parse("/"), Some(Page::Home));
        assert_eq!(Page::parse("settings"), None);
        for page in Page::ALL {
            assert_eq!(Page::parse(page.route()), Some(page));
        }
    }

    #[test]
    fn home_mounts_use_cases() {
        assert_eq!(Page::Home.collection(), Some(Collection::UseCases));
        assert_eq!(Page::About.collection(), None);
        assert!(!Page::Home.is_listing());
        assert!(Page::UseCases.is_listing());
    }
}
