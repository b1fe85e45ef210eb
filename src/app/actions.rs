//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! plugin runtime executes them in order; the library itself never performs I/O.
//!
//! # Example
//!
//! ```
//! use signbridge::app::Action;
//! use signbridge::content::CrudService;
//!
//! let crud = CrudService::new("http://localhost:8080/api", None);
//! let action = Action::FetchCollection(crud.list_request("projectusecases", 1)?);
//! assert!(matches!(action, Action::FetchCollection(ref r) if r.ticket.ticket == 1));
//! # Ok::<(), signbridge::SignBridgeError>(())
//! ```

use crate::content::FetchRequest;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    CloseFocus,

    /// Performs a GET request against the content store.
    ///
    /// The request's ticket must be handed back with the response so stale
    /// answers can be told apart from the current one.
    FetchCollection(FetchRequest),
}
