//! Facet derivation from loaded records.

use super::filters::ALL;
use std::collections::HashSet;

/// Distinct non-empty values in first-occurrence order, excluding `"all"`.
///
/// # Example
///
/// ```
/// use signbridge::listing::distinct_facets;
///
/// let values = [Some("Greetings"), None, Some(""), Some("Courtesy"), Some("Greetings"), Some("all")];
/// assert_eq!(distinct_facets(values), vec!["Greetings", "Courtesy"]);
/// ```
#[must_use]
pub fn distinct_facets<'a>(values: impl IntoIterator<Item = Option<&'a str>>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut facets = Vec::new();

    for value in values.into_iter().flatten() {
        if value.is_empty() || value == ALL {
            continue;
        }
        if seen.insert(value) {
            facets.push(value.to_string());
        }
    }

    facets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_values_no_facets() {
        assert!(distinct_facets(std::iter::empty()).is_empty());
        assert!(distinct_facets([None, Some("")]).is_empty());
    }

    #[test]
    fn case_variants_are_distinct_facets() {
        let facets = distinct_facets([Some("Easy"), Some("easy"), Some("Easy")]);
        assert_eq!(facets, vec!["Easy", "easy"]);
    }

    #[test]
    fn only_the_exact_sentinel_is_excluded() {
        let facets = distinct_facets([Some("all"), Some("All")]);
        assert_eq!(facets, vec!["All"]);
    }
}
