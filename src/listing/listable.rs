//! Which record attributes the listing pipeline looks at.

use crate::domain::{GestureRecord, Record, UseCaseRecord};

/// A record kind that can be searched and faceted on a listing page.
///
/// Kinds without a category or difficulty keep the defaults, which makes any
/// non-`All` selection on those facets match nothing.
pub trait Listable: Record {
    /// Text fields the search box matches against.
    fn search_fields(&self) -> Vec<Option<&str>>;

    fn category(&self) -> Option<&str> {
        None
    }

    fn difficulty(&self) -> Option<&str> {
        None
    }
}

impl Listable for GestureRecord {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            self.gesture_name.as_deref(),
            self.text_translation.as_deref(),
        ]
    }

    fn category(&self) -> Option<&str> {
        self.gesture_category.as_deref()
    }

    fn difficulty(&self) -> Option<&str> {
        self.difficulty_level.as_deref()
    }
}

impl Listable for UseCaseRecord {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![self.title.as_deref(), self.short_description.as_deref()]
    }
}
