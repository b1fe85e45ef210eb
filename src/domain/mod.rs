//! Domain layer for the SignBridge plugin.
//!
//! This module contains the record schemas and error types, independent of
//! Zellij-specific APIs or the content store transport.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`records`]: Gesture and use-case record schemas
//!
//! # Examples
//!
//! ```
//! use signbridge::domain::{GestureRecord, Record};
//!
//! let gesture = GestureRecord::new("g-1");
//! assert_eq!(gesture.id(), "g-1");
//! assert_eq!(GestureRecord::COLLECTION_ID, "signlanguagegestures");
//! ```

pub mod error;
pub mod records;

pub use error::{Result, SignBridgeError};
pub use records::{time_ago, GestureRecord, Record, UseCaseRecord};
