//! User interface rendering layer with component-based architecture.
//!
//! This module turns application state into ANSI-styled output through
//! composable rendering components, with theme support and search match
//! highlighting.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render_frame → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (highlighting, wrapping)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation
//! - [`copy`]: Static page copy
//!
//! # Example
//!
//! ```
//! use signbridge::app::{AppState, Page};
//! use signbridge::content::CrudService;
//! use signbridge::ui::{render_frame, Theme};
//!
//! let state = AppState::new(CrudService::new("http://localhost:8080/api", None), Page::About, Theme::default());
//! let frame = render_frame(&state, 24, 80);
//! assert!(frame.contains("SignBridge"));
//! ```

pub mod components;
pub mod copy;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_frame};
pub use theme::Theme;
pub use viewmodel::{
    DetailPanel, DifficultyTier, DisplayItem, EmptyState, FilterBarInfo, FooterInfo, HeaderInfo,
    SearchBarInfo, TabInfo, UIViewModel,
};
