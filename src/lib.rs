//! SignBridge: a Zellij plugin for browsing a sign-language gesture library.
//!
//! SignBridge reads two collections from a headless content store, the gesture
//! library and the catalogue of project use cases, and presents them as
//! searchable, filterable listings next to static home and about pages:
//! - Substring search over names, translations, titles and summaries
//! - Category and difficulty facets derived from the loaded records
//! - Fetch tickets so late responses never overwrite newer state
//! - Themed ANSI rendering with a detail panel for the selected record
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Pages, modes
//! │  - Event handling                                   │  ← Fetch tickets
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Listing Layer │   │ Content Layer │
//! │ (ui/)         │   │ (listing/)    │   │ (content/)    │
//! │ - Rendering   │   │ - Controllers │   │ - Collections │
//! │ - Theming     │   │ - Facets      │   │ - CRUD reads  │
//! │ - Components  │   │ - Search      │   │ - Decoding    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Records and errors (domain/)                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - OTLP file tracing (observability/)               │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/signbridge.wasm" {
//!         store_url "https://cms.example.org/api"
//!         store_token "…"
//!         start_page "gestures"
//!         theme "catppuccin-mocha"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Request Flow
//!
//! 1. Entering a listing page mounts its controller and emits
//!    [`Action::FetchCollection`] with a fresh ticket.
//! 2. The shim performs the web request and feeds the response back as
//!    [`Event::CollectionFetched`].
//! 3. Responses whose ticket is no longer pending are dropped; the rest are
//!    decoded and loaded, which derives facets and recomputes the view.
//!
//! # Example
//!
//! ```
//! use signbridge::{handle_event, initialize, Action, Config, Event, Page};
//!
//! let config = Config {
//!     start_page: Page::Gestures,
//!     ..Config::default()
//! };
//! let mut state = initialize(&config);
//!
//! handle_event(&mut state, &Event::Start)?;
//! let (_, actions) = handle_event(&mut state, &Event::PermissionsResult { web_access: true })?;
//! assert!(matches!(actions.as_slice(), [Action::FetchCollection(_)]));
//! # Ok::<(), signbridge::SignBridgeError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod content;
pub mod domain;
pub mod infrastructure;
pub mod listing;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode, Page, SearchFocus};
pub use content::{Collection, CrudService};
pub use domain::{Result, SignBridgeError};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Default content store location.
pub const DEFAULT_STORE_URL: &str = "http://localhost:8080/api";

/// Default tracing filter directive.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Plugin configuration parsed from the Zellij KDL block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the content store. Trailing slashes are trimmed.
    pub store_url: String,

    /// Bearer token sent with every read, passed through as is.
    pub store_token: Option<String>,

    /// Page shown when the plugin opens.
    pub start_page: Page,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: String,

    /// Path to a custom TOML theme file (`~` maps to the sandbox home).
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for exported spans.
    pub trace_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_url: DEFAULT_STORE_URL.to_string(),
            store_token: None,
            start_page: Page::Home,
            theme_name: ui::theme::DEFAULT_THEME.to_string(),
            theme_file: None,
            trace_level: DEFAULT_TRACE_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Blank values count as absent. An unknown `start_page` falls back to the
    /// home page with a warning.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use signbridge::{Config, Page};
    ///
    /// let map = BTreeMap::from([
    ///     ("store_url".to_string(), "https://cms.example.org/api/".to_string()),
    ///     ("start_page".to_string(), "use-cases".to_string()),
    /// ]);
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.store_url, "https://cms.example.org/api");
    /// assert_eq!(config.start_page, Page::UseCases);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let defaults = Self::default();

        let start_page = value("start_page").map_or(defaults.start_page, |name| {
            Page::parse(&name).unwrap_or_else(|| {
                tracing::warn!(start_page = %name, "unknown start page, using home");
                Page::Home
            })
        });

        Self {
            store_url: value("store_url")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.store_url),
            store_token: value("store_token"),
            start_page,
            theme_name: value("theme").unwrap_or(defaults.theme_name),
            theme_file: value("theme_file"),
            trace_level: value("trace_level").unwrap_or(defaults.trace_level),
        }
    }

    /// Resolves the theme: `theme_file` wins over `theme_name`, and any
    /// failure falls back to the default theme.
    #[must_use]
    pub fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            return Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %path.display(), error = %e, "failed to load theme file, using default");
                Theme::default()
            });
        }

        Theme::from_name(&self.theme_name).unwrap_or_else(|| {
            tracing::warn!(theme_name = %self.theme_name, "unknown theme, using default");
            Theme::default()
        })
    }
}

/// Builds the application state for `config`.
///
/// No request is issued here: listings are mounted by [`Event::Start`] and
/// fetched once web access is granted.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(store_url = %config.store_url, start_page = ?config.start_page, "initializing signbridge");

    let crud = CrudService::new(config.store_url.clone(), config.store_token.clone());
    AppState::new(crud, config.start_page, config.load_theme())
}
