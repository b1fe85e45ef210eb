//! Generic read access to content store collections.
//!
//! [`CrudService`] is stateless: it turns a collection identifier into a
//! [`FetchRequest`] and turns the host's [`FetchResponse`] back into typed
//! [`Items`]. The request itself is performed by the plugin runtime, which makes
//! the response the only suspension point of a read.
//!
//! # Example
//!
//! ```
//! use signbridge::content::{CrudService, FetchResponse};
//! use signbridge::domain::GestureRecord;
//!
//! let crud = CrudService::new("https://cms.example.org/api/", None);
//! let request = crud.list_request("signlanguagegestures", 1)?;
//! assert_eq!(request.url, "https://cms.example.org/api/collections/signlanguagegestures/items");
//!
//! let response = FetchResponse::new(200, br#"{"items": [{"_id": "g-1"}]}"#.to_vec());
//! let items = crud.read_all::<GestureRecord>("signlanguagegestures", &response)?;
//! assert_eq!(items.items[0].id, "g-1");
//! # Ok::<(), signbridge::SignBridgeError>(())
//! ```

use super::items::{decode_items, Items};
use crate::domain::error::{Result, SignBridgeError};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

/// Context key carrying the collection identifier through the host.
const CONTEXT_COLLECTION: &str = "collection";

/// Context key carrying the fetch ticket through the host.
const CONTEXT_TICKET: &str = "ticket";

/// Longest failure body kept in a transport error message.
const MAX_ERROR_MESSAGE_CHARS: usize = 200;

/// Identifies one in-flight read so late responses can be matched or discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    /// Collection the read targets.
    pub collection_id: String,
    /// Monotonic ticket number assigned by the caller.
    pub ticket: u64,
}

impl FetchTicket {
    /// Encodes the ticket into a host request context.
    #[must_use]
    pub fn to_context(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            (CONTEXT_COLLECTION.to_string(), self.collection_id.clone()),
            (CONTEXT_TICKET.to_string(), self.ticket.to_string()),
        ])
    }

    /// Recovers a ticket from a host response context.
    ///
    /// Returns `None` for contexts that did not originate from [`CrudService`].
    #[must_use]
    pub fn from_context(context: &BTreeMap<String, String>) -> Option<Self> {
        let collection_id = context.get(CONTEXT_COLLECTION)?.clone();
        let ticket = context.get(CONTEXT_TICKET)?.parse().ok()?;
        Some(Self {
            collection_id,
            ticket,
        })
    }
}

/// A fully built GET request for the host to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub ticket: FetchTicket,
}

/// Status and body of a completed host request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl FetchResponse {
    #[must_use]
    pub const fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Whether the status is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Stateless, generic read client for content store collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrudService {
    store_url: String,
    token: Option<String>,
}

impl CrudService {
    /// Creates a client for the store at `store_url`.
    ///
    /// Trailing slashes are trimmed. `token`, when set, is sent as a bearer
    /// token and never interpreted.
    #[must_use]
    pub fn new(store_url: impl Into<String>, token: Option<String>) -> Self {
        let store_url = store_url.into().trim_end_matches('/').to_string();
        Self { store_url, token }
    }

    /// Base URL of the store.
    #[must_use]
    pub fn store_url(&self) -> &str {
        &self.store_url
    }

    /// Builds the request that retrieves every item of `collection_id`.
    ///
    /// No pagination, filtering or sorting is requested: the whole collection is
    /// always read.
    ///
    /// # Errors
    ///
    /// Returns [`SignBridgeError::Config`] if `collection_id` is empty.
    pub fn list_request(&self, collection_id: &str, ticket: u64) -> Result<FetchRequest> {
        let collection_id = collection_id.trim();
        if collection_id.is_empty() {
            return Err(SignBridgeError::Config(
                "collection identifier must not be empty".to_string(),
            ));
        }

        let mut headers = BTreeMap::from([(
            "Accept".to_string(),
            "application/json".to_string(),
        )]);
        if let Some(token) = &self.token {
            headers.insert("Authorization".to_string(), format!("Bearer {token}"));
        }

        let request = FetchRequest {
            url: format!("{}/collections/{collection_id}/items", self.store_url),
            headers,
            ticket: FetchTicket {
                collection_id: collection_id.to_string(),
                ticket,
            },
        };

        tracing::debug!(url = %request.url, ticket = ticket, "built collection request");
        Ok(request)
    }

    /// Classifies and decodes the response to a [`list_request`](Self::list_request).
    ///
    /// # Errors
    ///
    /// - [`SignBridgeError::NotFound`] on status 404
    /// - [`SignBridgeError::Transport`] on any other non-2xx status
    /// - [`SignBridgeError::Decode`] if a 2xx body cannot be decoded
    pub fn read_all<T: DeserializeOwned>(
        &self,
        collection_id: &str,
        response: &FetchResponse,
    ) -> Result<Items<T>> {
        let _span = tracing::debug_span!("crud_read_all",
            collection = %collection_id,
            status = response.status,
            body_len = response.body.len()
        )
        .entered();

        if response.status == 404 {
            tracing::debug!("collection unknown to store");
            return Err(SignBridgeError::NotFound(collection_id.to_string()));
        }

        if !response.is_success() {
            let message = failure_message(response);
            tracing::debug!(message = %message, "store request failed");
            return Err(SignBridgeError::Transport {
                status: response.status,
                message,
            });
        }

        let items = decode_items::<T>(&response.body)?;
        tracing::debug!(count = items.len(), "collection decoded");
        Ok(items)
    }
}

/// Extracts a readable, bounded message from a failed response.
fn failure_message(response: &FetchResponse) -> String {
    let text = String::from_utf8_lossy(&response.body);
    let text = text.trim();
    if text.is_empty() {
        format!("content store answered with status {}", response.status)
    } else {
        text.chars().take(MAX_ERROR_MESSAGE_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GestureRecord;

    fn service() -> CrudService {
        CrudService::new("http://cms.local/api//", Some("secret".to_string()))
    }

    #[test]
    fn list_request_targets_collection_items() {
        let request = service().list_request("signlanguagegestures", 7).unwrap();

        assert_eq!(request.url, "http://cms.local/api/collections/signlanguagegestures/items");
        assert_eq!(request.headers.get("Accept").map(String::as_str), Some("application/json"));
        assert_eq!(
            request.headers.get("Authorization").map(String::as_str),
            Some("Bearer secret")
        );
        assert_eq!(request.ticket.ticket, 7);
    }

    #[test]
    fn list_request_without_token_sends_no_authorization() {
        let request = CrudService::new("http://cms.local", None)
            .list_request("projectusecases", 1)
            .unwrap();
        assert!(!request.headers.contains_key("Authorization"));
    }

    #[test]
    fn empty_collection_id_is_rejected() {
        let err = service().list_request("  ", 1).unwrap_err();
        assert!(matches!(err, SignBridgeError::Config(_)));
    }

    #[test]
    fn ticket_survives_host_context() {
        let request = service().list_request("projectusecases", 42).unwrap();
        let context = request.ticket.to_context();

        assert_eq!(FetchTicket::from_context(&context), Some(request.ticket));
        assert_eq!(FetchTicket::from_context(&BTreeMap::new()), None);

        let mut garbled = context;
        garbled.insert("ticket".to_string(), "soon".to_string());
        assert_eq!(FetchTicket::from_context(&garbled), None);
    }

    #[test]
    fn not_found_status() {
        let response = FetchResponse::new(404, b"no such collection".to_vec());
        let err = service()
            .read_all::<GestureRecord>("nope", &response)
            .unwrap_err();

        assert!(err.is_not_found());
    }

    #[test]
    fn failure_statuses_are_transport_errors() {
        for status in [400, 500, 503] {
            let response = FetchResponse::new(status, b"connection refused".to_vec());
            let err = service()
                .read_all::<GestureRecord>("signlanguagegestures", &response)
                .unwrap_err();

            assert!(err.is_transport());
            assert!(err.to_string().contains("connection refused"));
        }
    }

    #[test]
    fn empty_failure_body_gets_a_message() {
        let response = FetchResponse::new(502, Vec::new());
        let err = service()
            .read_all::<GestureRecord>("signlanguagegestures", &response)
            .unwrap_err();

        match err {
            SignBridgeError::Transport { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "content store answered with status 502");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn success_decodes_items_in_store_order() {
        let response = FetchResponse::new(
            200,
            br#"{"items": [{"_id": "b"}, {"_id": "a"}, {"_id": "c"}]}"#.to_vec(),
        );
        let items = service()
            .read_all::<GestureRecord>("signlanguagegestures", &response)
            .unwrap();

        let ids: Vec<&str> = items.items.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }
}
