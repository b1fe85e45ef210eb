//! Entity schemas for the two content collections.
//!
//! Records are read-only snapshots of items owned by the external content store.
//! Every attribute except the identifier is optional: a missing field decodes to
//! `None` and is simply not rendered or considered by filters.
//!
//! Text attributes are decoded leniently (see [`lenient_text`]) because the store
//! does not validate field types. Timestamps accept both a plain RFC 3339 string
//! and the store's `{"$date": "..."}` wrapper.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// Shape shared by every record the CRUD accessor can read.
///
/// `COLLECTION_ID` names the store collection the record kind lives in, so a
/// caller can pick the record type and the collection with a single type
/// parameter.
pub trait Record: serde::de::DeserializeOwned + Clone {
    /// Identifier of the store collection holding this record kind.
    const COLLECTION_ID: &'static str;

    /// Opaque, store-assigned identifier. Unique within the collection.
    fn id(&self) -> &str;

    /// Last update time, falling back to creation time.
    fn touched_at(&self) -> Option<DateTime<Utc>>;
}

/// A sign language gesture from the `signlanguagegestures` collection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GestureRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_createdDate", default, deserialize_with = "store_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "_updatedDate", default, deserialize_with = "store_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub gesture_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub text_translation: Option<String>,
    /// Opaque image reference, handed to the image loader verbatim.
    #[serde(default, deserialize_with = "lenient_text")]
    pub gesture_image: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub gesture_category: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub gesture_description: Option<String>,
    /// Conventionally "Easy", "Medium" or "Hard"; not enforced.
    #[serde(default, deserialize_with = "lenient_text")]
    pub difficulty_level: Option<String>,
}

impl GestureRecord {
    /// Creates a gesture with only an identifier set.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            created_at: None,
            updated_at: None,
            gesture_name: None,
            text_translation: None,
            gesture_image: None,
            gesture_category: None,
            gesture_description: None,
            difficulty_level: None,
        }
    }
}

impl Record for GestureRecord {
    const COLLECTION_ID: &'static str = "signlanguagegestures";

    fn id(&self) -> &str {
        &self.id
    }

    fn touched_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at.or(self.created_at)
    }
}

/// A case study from the `projectusecases` collection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UseCaseRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_createdDate", default, deserialize_with = "store_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "_updatedDate", default, deserialize_with = "store_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub short_description: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub benefits: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub target_audience: Option<String>,
}

impl UseCaseRecord {
    /// Creates a use case with only an identifier set.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            created_at: None,
            updated_at: None,
            title: None,
            short_description: None,
            description: None,
            image: None,
            benefits: None,
            target_audience: None,
        }
    }
}

impl Record for UseCaseRecord {
    const COLLECTION_ID: &'static str = "projectusecases";

    fn id(&self) -> &str {
        &self.id
    }

    fn touched_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at.or(self.created_at)
    }
}

/// Decodes an optional text attribute without failing on unexpected types.
///
/// Strings are kept as-is, numbers and booleans are rendered to text, and
/// `null`, arrays and objects are treated as absent.
fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

/// Decodes a store timestamp: an RFC 3339 string or `{"$date": "<rfc3339>"}`.
fn store_timestamp<'de, D>(deserializer: D) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Object(mut map) => match map.remove("$date") {
            Some(Value::String(s)) => Some(s),
            _ => None,
        },
        _ => None,
    };

    Ok(raw.and_then(|s| {
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
    }))
}

/// Formats how long ago `at` was, relative to `now`.
///
/// - Less than 1 minute: "just now"
/// - Less than 1 hour: "Xm ago"
/// - Less than 1 day: "Xh ago"
/// - Otherwise: "Xd ago"
///
/// Timestamps in the future are reported as "just now".
#[must_use]
pub fn time_ago(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = (now - at).num_seconds();

    if diff < SECONDS_PER_MINUTE {
        "just now".to_string()
    } else if diff < SECONDS_PER_HOUR {
        let mins = diff / SECONDS_PER_MINUTE;
        format!("{mins}m ago")
    } else if diff < SECONDS_PER_DAY {
        let hours = diff / SECONDS_PER_HOUR;
        format!("{hours}h ago")
    } else {
        let days = diff / SECONDS_PER_DAY;
        format!("{days}d ago")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn gesture_decodes_store_field_names() {
        let gesture: GestureRecord = serde_json::from_value(serde_json::json!({
            "_id": "g-1",
            "_createdDate": {"$date": "2024-03-01T10:00:00Z"},
            "_updatedDate": "2024-03-02T10:00:00.000Z",
            "gestureName": "Hello",
            "textTranslation": "Hello",
            "gestureImage": "wix:image://v1/hello.png",
            "gestureCategory": "Greetings",
            "gestureDescription": "Open palm wave",
            "difficultyLevel": "Easy"
        }))
        .unwrap();

        assert_eq!(gesture.id, "g-1");
        assert_eq!(gesture.gesture_name.as_deref(), Some("Hello"));
        assert_eq!(gesture.gesture_category.as_deref(), Some("Greetings"));
        assert_eq!(gesture.difficulty_level.as_deref(), Some("Easy"));
        assert_eq!(
            gesture.created_at,
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap())
        );
        assert_eq!(
            gesture.touched_at(),
            Some(Utc.with_ymd_and_hms(2024, 3, 2, 10, 0, 0).unwrap())
        );
    }

    #[test]
    fn missing_fields_are_absent_not_defaulted() {
        let gesture: GestureRecord =
            serde_json::from_value(serde_json::json!({ "_id": "g-2" })).unwrap();

        assert_eq!(gesture, GestureRecord::new("g-2"));
        assert!(gesture.touched_at().is_none());
    }

    #[test]
    fn text_fields_tolerate_unexpected_types() {
        let use_case: UseCaseRecord = serde_json::from_value(serde_json::json!({
            "_id": "u-1",
            "title": 42,
            "benefits": true,
            "description": null,
            "image": {"url": "x"},
            "targetAudience": ["students"],
            "_updatedDate": "not a date"
        }))
        .unwrap();

        assert_eq!(use_case.title.as_deref(), Some("42"));
        assert_eq!(use_case.benefits.as_deref(), Some("true"));
        assert!(use_case.description.is_none());
        assert!(use_case.image.is_none());
        assert!(use_case.target_audience.is_none());
        assert!(use_case.updated_at.is_none());
    }

    #[test]
    fn identifier_is_required() {
        let result: std::result::Result<UseCaseRecord, _> =
            serde_json::from_value(serde_json::json!({ "title": "Education" }));
        assert!(result.is_err());
    }

    #[test]
    fn time_ago_buckets() {
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();

        assert_eq!(time_ago(now, now), "just now");
        assert_eq!(time_ago(now - chrono::Duration::minutes(5), now), "5m ago");
        assert_eq!(time_ago(now - chrono::Duration::hours(3), now), "3h ago");
        assert_eq!(time_ago(now - chrono::Duration::days(7), now), "7d ago");
        assert_eq!(time_ago(now + chrono::Duration::days(1), now), "just now");
    }
}
