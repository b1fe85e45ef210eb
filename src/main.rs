//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the SignBridge library and the Zellij
//! plugin system: it translates host events into library events, performs the
//! library's actions through the host API and delegates rendering.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key`, `WebRequestResult` and
//!    `PermissionRequestResult` events
//! 3. **Start**: Mount the start page; listings show a loading state
//! 4. **Permission**: Once web access is granted the pending reads go out
//! 5. **Update**: Handle events, delegate to library layer
//! 6. **Render**: Call library render function
//!
//! # Event Mapping
//!
//! - `Key(..)` → navigation, search and facet events (see below)
//! - `PermissionRequestResult` → `Event::PermissionsResult`
//! - `WebRequestResult` → `Event::CollectionFetched` (ticket from the context)
//!
//! # Keybindings
//!
//! In normal mode and while browsing search results:
//! - `j`/`Down`, `k`/`Up`: Move selection
//! - `Tab`/`l`/`Right`, `Shift+Tab`/`h`/`Left`: Next / previous page
//! - `1`-`4`: Jump to a page
//! - `/`: Search (or return to the search input)
//! - `c`/`C`, `d`/`D`: Cycle category / difficulty forward / back
//! - `x`: Clear filters
//! - `r`: Refresh
//! - `q`: Close plugin
//! - `Esc`: Leave search, or close plugin in normal mode
//!
//! While typing a query:
//! - Printable keys edit the query, `Backspace` deletes
//! - `Enter`: Browse results
//! - `Ctrl+n` / `Ctrl+p`: Move selection
//! - `Esc`: Clear and leave search

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
use std::collections::BTreeMap;
#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

#[cfg(target_family = "wasm")]
use signbridge::content::{FetchResponse, FetchTicket};
#[cfg(target_family = "wasm")]
use signbridge::{handle_event, Action, AppState, Config, Event, InputMode, Page, SearchFocus};

#[cfg(target_family = "wasm")]
register_plugin!(State);

/// Plugin state wrapper around the library's `AppState`.
#[cfg(target_family = "wasm")]
struct State {
    app: AppState,
}

#[cfg(target_family = "wasm")]
impl Default for State {
    fn default() -> Self {
        Self {
            app: signbridge::initialize(&Config::default()),
        }
    }
}

#[cfg(target_family = "wasm")]
impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// # Permissions
    ///
    /// - `ReadApplicationState`: Needed for pane visibility control
    /// - `WebAccess`: Content store reads
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        signbridge::observability::init_tracing(&config);

        let _span = tracing::debug_span!("plugin_load").entered();
        tracing::debug!(store_url = %config.store_url, start_page = ?config.start_page, "parsed configuration");

        self.app = signbridge::initialize(&config);

        request_permission(&[PermissionType::ReadApplicationState, PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        self.dispatch(&Event::Start);
        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let _span = tracing::debug_span!("plugin_update_event", event_type = %event_name).entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                let web_access = matches!(status, PermissionStatus::Granted);
                if !web_access {
                    tracing::warn!("permissions denied - content store is unreachable");
                }
                Event::PermissionsResult { web_access }
            }
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_result(status, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    fn render(&mut self, rows: usize, cols: usize) {
        signbridge::ui::render(&self.app, rows, cols);
    }
}

#[cfg(target_family = "wasm")]
impl State {
    /// Runs one library event and executes the resulting actions.
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                for action in actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                true
            }
        }
    }

    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps a completed web request back to the fetch that issued it.
    fn map_web_result(status: u16, body: Vec<u8>, context: &BTreeMap<String, String>) -> Option<Event> {
        let Some(ticket) = FetchTicket::from_context(context) else {
            tracing::debug!(status, "web result without a fetch ticket, ignoring");
            return None;
        };

        tracing::debug!(status, collection = %ticket.collection_id, ticket = ticket.ticket, body_len = body.len(), "web result");
        Some(Event::CollectionFetched {
            ticket,
            response: FetchResponse::new(status, body),
        })
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        let ctrl = key.has_modifiers(&[KeyModifier::Ctrl]);
        let shift_tab = key.bare_key == BareKey::Tab && key.has_modifiers(&[KeyModifier::Shift]);

        if ctrl {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }

        if self.app.input_mode == InputMode::Search(SearchFocus::Typing) {
            return match key.bare_key {
                BareKey::Esc => Some(Event::ExitSearch),
                BareKey::Enter => Some(Event::FocusResults),
                BareKey::Backspace => Some(Event::Backspace),
                BareKey::Down => Some(Event::KeyDown),
                BareKey::Up => Some(Event::KeyUp),
                BareKey::Char(c) => Some(Event::Char(c)),
                _ => None,
            };
        }

        let searching = matches!(self.app.input_mode, InputMode::Search(_));
        Some(match key.bare_key {
            _ if shift_tab => Event::PrevPage,
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Tab | BareKey::Right | BareKey::Char('l') => Event::NextPage,
            BareKey::Left | BareKey::Char('h') => Event::PrevPage,
            BareKey::Char(digit @ '1'..='4') => {
                let index = digit.to_digit(10).map_or(0, |d| d as usize - 1);
                Event::GoToPage(Page::from_index(index)?)
            }
            BareKey::Char('/') if searching => Event::FocusSearchBar,
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Char('c') => Event::CycleCategory { forward: true },
            BareKey::Char('C') => Event::CycleCategory { forward: false },
            BareKey::Char('d') => Event::CycleDifficulty { forward: true },
            BareKey::Char('D') => Event::CycleDifficulty { forward: false },
            BareKey::Char('x') => Event::ClearFilters,
            BareKey::Char('r') => Event::Refresh,
            BareKey::Esc if searching => Event::ExitSearch,
            BareKey::Esc | BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Executes an action returned from event handling.
    fn execute_action(action: Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::FetchCollection(request) => {
                tracing::debug!(url = %request.url, ticket = request.ticket.ticket, "issuing collection read");
                let context = request.ticket.to_context();
                web_request(request.url, HttpVerb::Get, request.headers, vec![], context);
            }
        }
    }
}

#[cfg(not(target_family = "wasm"))]
fn main() {}
