//! Content store access.
//!
//! The store exclusively owns record lifetime and identity; this module only
//! reads. Reads are split into request construction and response decoding so the
//! plugin runtime can perform the I/O through host events.
//!
//! # Modules
//!
//! - [`collection`]: Identifiers of the collections the pages mount
//! - [`crud`]: Generic read client, request/response types and fetch tickets
//! - [`items`]: Normalization of list responses into `{items}`

pub mod collection;
pub mod crud;
pub mod items;

pub use collection::Collection;
pub use crud::{CrudService, FetchRequest, FetchResponse, FetchTicket};
pub use items::{decode_items, Items};
