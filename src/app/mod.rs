//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the content,
//! listing and UI layers.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Store Responses ─────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input mode, page and permission state types
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```
//! use signbridge::app::{handle_event, AppState, Event, Page};
//! use signbridge::content::CrudService;
//! use signbridge::ui::Theme;
//!
//! let crud = CrudService::new("http://localhost:8080/api", None);
//! let mut state = AppState::new(crud, Page::Gestures, Theme::default());
//! let (_, actions) = handle_event(&mut state, &Event::PermissionsResult { web_access: true })?;
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), signbridge::SignBridgeError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, Page, SearchFocus, WebAccess};
pub use state::AppState;
