//! Known content store collections.

use crate::domain::{GestureRecord, Record, UseCaseRecord};

/// A collection this plugin reads from the content store.
///
/// The CRUD accessor itself accepts any collection identifier; this enum only
/// names the two collections the pages mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// The gesture library (`signlanguagegestures`).
    Gestures,
    /// The use-case case studies (`projectusecases`).
    UseCases,
}

impl Collection {
    /// Every collection, in display order.
    pub const ALL: [Self; 2] = [Self::Gestures, Self::UseCases];

    /// Store identifier of the collection.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Gestures => GestureRecord::COLLECTION_ID,
            Self::UseCases => UseCaseRecord::COLLECTION_ID,
        }
    }

    /// Resolves a store identifier back to a known collection.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }

    /// Plural noun used in status lines ("Showing 3 of 5 gestures").
    #[must_use]
    pub const fn noun(self) -> &'static str {
        match self {
            Self::Gestures => "gestures",
            Self::UseCases => "use cases",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for collection in Collection::ALL {
            assert_eq!(Collection::from_id(collection.id()), Some(collection));
        }
        assert_eq!(Collection::from_id("unknown"), None);
    }
}
