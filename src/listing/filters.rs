//! Filter configuration for listing pages.

/// Sentinel value meaning "no restriction" for a facet filter.
pub const ALL: &str = "all";

/// Selection for one facet: either the "all" sentinel or an exact value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FacetFilter {
    #[default]
    All,
    Value(String),
}

impl FacetFilter {
    /// Parses a selection, mapping the `"all"` sentinel to [`FacetFilter::All`].
    ///
    /// # Example
    ///
    /// ```
    /// use signbridge::listing::FacetFilter;
    ///
    /// assert_eq!(FacetFilter::parse("all"), FacetFilter::All);
    /// assert_eq!(FacetFilter::parse("Greetings"), FacetFilter::Value("Greetings".into()));
    /// ```
    #[must_use]
    pub fn parse(selection: &str) -> Self {
        if selection == ALL {
            Self::All
        } else {
            Self::Value(selection.to_string())
        }
    }

    /// Whether a record's facet value passes this filter.
    ///
    /// Matching is exact and case-sensitive. An absent value only passes `All`.
    #[must_use]
    pub fn admits(&self, value: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Value(wanted) => value == Some(wanted.as_str()),
        }
    }

    /// Selection as the string the site used (`"all"` or the exact value).
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Value(value) => value,
        }
    }

    /// Whether this selection can still be made from `facets`. `All` always can.
    #[must_use]
    pub fn is_offered(&self, facets: &[String]) -> bool {
        match self {
            Self::All => true,
            Self::Value(value) => facets.contains(value),
        }
    }

    /// Steps through `All, facets[0], .., facets[n-1], All`.
    ///
    /// A selection that is no longer among `facets` is treated as `All`.
    #[must_use]
    pub fn cycle(&self, facets: &[String], forward: bool) -> Self {
        let position = match self {
            Self::All => None,
            Self::Value(value) => facets.iter().position(|f| f == value),
        };

        // Index 0 is `All`, facets occupy 1..=len.
        let slots = facets.len() + 1;
        let current = position.map_or(0, |p| p + 1);
        let next = if forward {
            (current + 1) % slots
        } else {
            (current + slots - 1) % slots
        };

        if next == 0 {
            Self::All
        } else {
            Self::Value(facets[next - 1].clone())
        }
    }
}

/// The filter inputs of one listing page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingFilters {
    /// Free text, matched case-insensitively against designated fields.
    pub search_text: String,
    pub category: FacetFilter,
    pub difficulty: FacetFilter,
}

impl ListingFilters {
    /// Whether any filter differs from its default.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self != &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facets() -> Vec<String> {
        vec!["Greetings".to_string(), "Courtesy".to_string()]
    }

    #[test]
    fn all_admits_absent_values() {
        assert!(FacetFilter::All.admits(None));
        assert!(FacetFilter::All.admits(Some("Greetings")));
    }

    #[test]
    fn only_listed_values_are_offered() {
        assert!(FacetFilter::All.is_offered(&[]));
        assert!(FacetFilter::parse("Courtesy").is_offered(&facets()));
        assert!(!FacetFilter::parse("Numbers").is_offered(&facets()));
    }

    #[test]
    fn value_matching_is_exact() {
        let filter = FacetFilter::parse("Easy");

        assert!(filter.admits(Some("Easy")));
        assert!(!filter.admits(Some("easy")));
        assert!(!filter.admits(Some("Easy ")));
        assert!(!filter.admits(None));
    }

    #[test]
    fn cycle_forward_wraps_through_all() {
        let facets = facets();
        let first = FacetFilter::All.cycle(&facets, true);
        let second = first.cycle(&facets, true);
        let third = second.cycle(&facets, true);

        assert_eq!(first, FacetFilter::parse("Greetings"));
        assert_eq!(second, FacetFilter::parse("Courtesy"));
        assert_eq!(third, FacetFilter::All);
    }

    #[test]
    fn cycle_backward_from_all_goes_to_last() {
        assert_eq!(
            FacetFilter::All.cycle(&facets(), false),
            FacetFilter::parse("Courtesy")
        );
    }

    #[test]
    fn cycle_with_no_facets_stays_all() {
        assert_eq!(FacetFilter::All.cycle(&[], true), FacetFilter::All);
        assert_eq!(FacetFilter::parse("Gone").cycle(&[], false), FacetFilter::All);
    }

    #[test]
    fn defaults_are_inactive() {
        let mut filters = ListingFilters::default();
        assert!(!filters.is_active());
        assert_eq!(filters.category.as_str(), ALL);

        filters.search_text.push('h');
        assert!(filters.is_active());
    }
}
