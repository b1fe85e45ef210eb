//! Event handling and state transition logic.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime (keys, permissions, web responses)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `NextPage`, `PrevPage`, `GoToPage`
//! - **Search**: `SearchMode`, `FocusSearchBar`, `FocusResults`, `ExitSearch`, `Char`, `Backspace`, `Escape`
//! - **Facets**: `CycleCategory`, `CycleDifficulty`, `ClearFilters`
//! - **System**: `Start`, `Refresh`, `PermissionsResult`, `CollectionFetched`
//!
//! # Example
//!
//! ```
//! use signbridge::app::{handle_event, AppState, Event, Page};
//! use signbridge::content::CrudService;
//! use signbridge::ui::Theme;
//!
//! let crud = CrudService::new("http://localhost:8080/api", None);
//! let mut state = AppState::new(crud, Page::Home, Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::NextPage)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! assert_eq!(state.page, Page::Gestures);
//! # Ok::<(), signbridge::SignBridgeError>(())
//! ```

use super::modes::{InputMode, Page, SearchFocus};
use crate::app::{Action, AppState};
use crate::content::{FetchResponse, FetchTicket};
use crate::domain::error::Result;

/// Events triggered by user input or host notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The plugin finished loading; mounts the start page.
    Start,
    /// Moves selection down by one row (wraps to top).
    KeyDown,
    /// Moves selection up by one row (wraps to bottom).
    KeyUp,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,
    /// Shows the next page in tab order.
    NextPage,
    /// Shows the previous page in tab order.
    PrevPage,
    /// Jumps to a specific page.
    GoToPage(Page),
    /// Re-reads the current page's collection with a new ticket.
    Refresh,
    /// Enters search mode with typing focus.
    SearchMode,
    /// Focuses the search input field (from navigating mode).
    FocusSearchBar,
    /// Focuses the result list (from typing mode).
    FocusResults,
    /// Leaves search mode and clears the search text.
    ExitSearch,
    /// Appends a character to the search text.
    Char(char),
    /// Removes the last character of the search text.
    Backspace,
    /// Clears the search text and returns to normal mode.
    Escape,
    /// Steps the category filter forward or backward.
    CycleCategory { forward: bool },
    /// Steps the difficulty filter forward or backward.
    CycleDifficulty { forward: bool },
    /// Resets search text, category and difficulty.
    ClearFilters,

    /// The host answered the permission request.
    PermissionsResult {
        /// Whether outgoing web requests were allowed.
        web_access: bool,
    },

    /// A store read completed.
    ///
    /// `ticket` is recovered from the request context; responses whose ticket is
    /// no longer outstanding are dropped.
    CollectionFetched {
        ticket: FetchTicket,
        response: FetchResponse,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// Whether the UI should re-render, and the actions to execute in order.
///
/// # Errors
///
/// Returns request construction errors raised while mounting a page.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Start => Ok((true, state.mount()?)),
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::NextPage => Ok((true, state.navigate(state.page.next())?)),
        Event::PrevPage => Ok((true, state.navigate(state.page.prev())?)),
        Event::GoToPage(page) => {
            if *page == state.page {
                return Ok((false, vec![]));
            }
            Ok((true, state.navigate(*page)?))
        }
        Event::Refresh => {
            tracing::debug!(page = ?state.page, "refresh requested");
            Ok((true, state.mount()?))
        }
        Event::SearchMode => {
            if state.active_listing().is_none() {
                return Ok((false, vec![]));
            }
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.search_text().is_empty() {
                state.input_mode = InputMode::Normal;
                return Ok((true, vec![]));
            }
            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch | Event::Escape => {
            tracing::debug!(query = %state.search_text(), "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.edit_listing(|listing| listing.set_search_text(String::new()));
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if !matches!(state.input_mode, InputMode::Search(SearchFocus::Typing)) {
                return Ok((false, vec![]));
            }
            let changed = state.edit_listing(|listing| listing.push_search_char(*c));
            tracing::trace!(query = %state.search_text(), "search text updated");
            Ok((changed, vec![]))
        }
        Event::Backspace => {
            if !matches!(state.input_mode, InputMode::Search(SearchFocus::Typing)) {
                return Ok((false, vec![]));
            }
            Ok((state.edit_listing(|listing| listing.pop_search_char()), vec![]))
        }
        Event::CycleCategory { forward } => {
            let forward = *forward;
            Ok((state.edit_listing(|listing| listing.cycle_category(forward)), vec![]))
        }
        Event::CycleDifficulty { forward } => {
            let forward = *forward;
            Ok((state.edit_listing(|listing| listing.cycle_difficulty(forward)), vec![]))
        }
        Event::ClearFilters => {
            let changed = state.edit_listing(|listing| listing.clear_filters());
            if changed {
                state.input_mode = InputMode::Normal;
            }
            Ok((changed, vec![]))
        }
        Event::PermissionsResult { web_access } => Ok((true, state.set_web_access(*web_access)?)),
        Event::CollectionFetched { ticket, response } => {
            Ok((state.receive(ticket, response), vec![]))
        }
    }
}
