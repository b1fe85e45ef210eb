//! Normalization of content store list responses.
//!
//! The store has answered list queries in three shapes over time:
//!
//! ```text
//! {"items": [{"_id": "a", ...}, ...]}
//! {"dataItems": [{"id": "a", "data": {...}}, ...]}
//! [{"_id": "a", ...}, ...]
//! ```
//!
//! All three normalize to [`Items`], preserving store order.

use crate::domain::error::{Result, SignBridgeError};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Uniform `{items}` result of a collection read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Items<T> {
    /// Records in the order the store returned them.
    pub items: Vec<T>,
}

impl<T> Items<T> {
    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Decodes a raw list response body into typed records.
///
/// # Errors
///
/// Returns [`SignBridgeError::Decode`] if the body is not JSON, matches none of the
/// known shapes, or any item fails to decode. No partial result is returned.
pub fn decode_items<T: DeserializeOwned>(body: &[u8]) -> Result<Items<T>> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| SignBridgeError::Decode(format!("response is not JSON: {e}")))?;

    let raw_items = normalize(value)?;

    let items = raw_items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<T>(item)
                .map_err(|e| SignBridgeError::Decode(format!("item {index}: {e}")))
        })
        .collect::<Result<Vec<T>>>()?;

    Ok(Items { items })
}

/// Flattens any supported response shape into a list of plain item objects.
fn normalize(value: Value) -> Result<Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items),
        Value::Object(mut map) => {
            if let Some(items) = map.remove("items") {
                expect_array(items, "items")
            } else if let Some(data_items) = map.remove("dataItems") {
                expect_array(data_items, "dataItems")?
                    .into_iter()
                    .map(unwrap_data_item)
                    .collect()
            } else {
                Err(SignBridgeError::Decode(
                    "response has neither `items` nor `dataItems`".to_string(),
                ))
            }
        }
        other => Err(SignBridgeError::Decode(format!(
            "unexpected response type: {}",
            json_kind(&other)
        ))),
    }
}

fn expect_array(value: Value, field: &str) -> Result<Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(SignBridgeError::Decode(format!(
            "`{field}` is {} instead of an array",
            json_kind(&other)
        ))),
    }
}

/// Extracts `data` from a wrapped item, carrying the wrapper `id` over as `_id`.
fn unwrap_data_item(item: Value) -> Result<Value> {
    let mut wrapper = match item {
        Value::Object(wrapper) => wrapper,
        other => {
            return Err(SignBridgeError::Decode(format!(
                "data item is {} instead of an object",
                json_kind(&other)
            )))
        }
    };

    let mut data = match wrapper.remove("data") {
        Some(Value::Object(data)) => data,
        Some(other) => {
            return Err(SignBridgeError::Decode(format!(
                "data item payload is {} instead of an object",
                json_kind(&other)
            )))
        }
        None => Map::new(),
    };

    if !data.contains_key("_id") {
        if let Some(id) = wrapper.remove("id") {
            data.insert("_id".to_string(), id);
        }
    }

    Ok(Value::Object(data))
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GestureRecord, UseCaseRecord};

    fn ids(items: &Items<GestureRecord>) -> Vec<&str> {
        items.items.iter().map(|g| g.id.as_str()).collect()
    }

    #[test]
    fn items_envelope() {
        let body = br#"{"items": [{"_id": "a", "gestureName": "Hello"}, {"_id": "b"}]}"#;
        let items: Items<GestureRecord> = decode_items(body).unwrap();

        assert_eq!(ids(&items), vec!["a", "b"]);
        assert_eq!(items.items[0].gesture_name.as_deref(), Some("Hello"));
    }

    #[test]
    fn data_items_envelope_carries_wrapper_id() {
        let body = br#"{
            "dataItems": [
                {"id": "a", "dataCollectionId": "signlanguagegestures", "data": {"gestureName": "Hello"}},
                {"id": "ignored", "data": {"_id": "b"}}
            ],
            "pagingMetadata": {"count": 2}
        }"#;
        let items: Items<GestureRecord> = decode_items(body).unwrap();

        assert_eq!(ids(&items), vec!["a", "b"]);
    }

    #[test]
    fn bare_array() {
        let body = br#"[{"_id": "u1", "title": "Education"}]"#;
        let items: Items<UseCaseRecord> = decode_items(body).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items.items[0].title.as_deref(), Some("Education"));
    }

    #[test]
    fn empty_collection_is_not_an_error() {
        let items: Items<GestureRecord> = decode_items(br#"{"items": []}"#).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn unknown_shape_is_a_decode_error() {
        let err = decode_items::<GestureRecord>(br#"{"records": []}"#).unwrap_err();
        assert!(matches!(err, SignBridgeError::Decode(_)));

        let err = decode_items::<GestureRecord>(b"<html>oops</html>").unwrap_err();
        assert!(matches!(err, SignBridgeError::Decode(_)));

        let err = decode_items::<GestureRecord>(br#"{"items": {"_id": "a"}}"#).unwrap_err();
        assert!(err.to_string().contains("an object instead of an array"));
    }

    #[test]
    fn one_bad_item_fails_the_whole_read() {
        let body = br#"{"items": [{"_id": "a"}, {"gestureName": "no id"}]}"#;
        let err = decode_items::<GestureRecord>(body).unwrap_err();

        assert!(err.to_string().contains("item 1"));
    }
}
