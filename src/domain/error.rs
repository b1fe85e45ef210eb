//! Error types for the SignBridge plugin.
//!
//! This module defines the centralized error type [`SignBridgeError`] and a type alias
//! [`Result`] used throughout the plugin. Content store failures are split into
//! transport, not-found and decode kinds so the presentation layer can tell them
//! apart. An empty collection is never an error.

use thiserror::Error;

/// The main error type for SignBridge operations.
///
/// # Examples
///
/// ```
/// use signbridge::SignBridgeError;
///
/// let err = SignBridgeError::NotFound("signlanguagegestures".to_string());
/// assert!(err.is_not_found());
/// assert_eq!(err.to_string(), "Collection not found: signlanguagegestures");
/// ```
#[derive(Debug, Error)]
pub enum SignBridgeError {
    /// The content store could not be reached or answered with a failure status.
    ///
    /// `status` is the HTTP status reported by the host. Unreachable stores are
    /// reported by the host with a synthetic non-2xx status.
    #[error("Transport error (status {status}): {message}")]
    Transport {
        /// HTTP status code of the failed exchange.
        status: u16,
        /// Body text or host-provided failure description.
        message: String,
    },

    /// The requested collection is unknown to the content store.
    ///
    /// Treated as a configuration or programming error rather than a normal
    /// user-facing state.
    #[error("Collection not found: {0}")]
    NotFound(String),

    /// The store answered successfully but the body could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SignBridgeError {
    /// Returns `true` for store unreachability or failure statuses.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Returns `true` when the store reported the collection as unknown.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// A specialized `Result` type for SignBridge operations.
pub type Result<T> = std::result::Result<T, SignBridgeError>;
