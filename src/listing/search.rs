//! Case-insensitive substring search and match highlighting.

/// Whether `needle_lower` occurs in the lower-cased value of any field.
///
/// `needle_lower` must already be lower-cased. An empty needle matches every
/// record; absent fields never match a non-empty needle.
#[must_use]
pub fn matches_any<'a>(needle_lower: &str, fields: impl IntoIterator<Item = Option<&'a str>>) -> bool {
    if needle_lower.is_empty() {
        return true;
    }

    fields
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle_lower))
}

/// Character ranges of every non-overlapping case-insensitive occurrence of `query`.
///
/// Ranges are `(start, end)` character indices with exclusive end. Text whose
/// lower-case form changes length yields no ranges.
///
/// # Example
///
/// ```
/// use signbridge::listing::highlight_ranges;
///
/// assert_eq!(highlight_ranges("Thank You", "you"), vec![(6, 9)]);
/// assert_eq!(highlight_ranges("Banana", "an"), vec![(1, 3), (3, 5)]);
/// ```
#[must_use]
pub fn highlight_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = query.to_lowercase().chars().collect();
    if needle.is_empty() {
        return vec![];
    }

    let haystack: Vec<char> = text.to_lowercase().chars().collect();
    if haystack.len() != text.chars().count() {
        return vec![];
    }

    let mut ranges = Vec::new();
    let mut i = 0;
    while i + needle.len() <= haystack.len() {
        if haystack[i..i + needle.len()] == needle[..] {
            ranges.push((i, i + needle.len()));
            i += needle.len();
        } else {
            i += 1;
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_needle_matches_everything() {
        assert!(matches_any("", [None]));
        assert!(matches_any("", std::iter::empty()));
    }

    #[test]
    fn absent_fields_never_match() {
        assert!(!matches_any("hello", [None, None]));
    }

    #[test]
    fn any_field_may_match() {
        assert!(matches_any("thank", [Some("Hello"), Some("Thank you")]));
        assert!(matches_any("hel", [None, Some("HELLO")]));
        assert!(!matches_any("bye", [Some("Hello"), Some("Thank you")]));
    }

    #[test]
    fn highlight_is_case_insensitive() {
        assert_eq!(highlight_ranges("Hello", "HEL"), vec![(0, 3)]);
        assert!(highlight_ranges("Hello", "").is_empty());
        assert!(highlight_ranges("Hello", "xyz").is_empty());
    }

    #[test]
    fn highlight_uses_character_indices() {
        assert_eq!(highlight_ranges("Café au lait", "au"), vec![(5, 7)]);
    }
}
