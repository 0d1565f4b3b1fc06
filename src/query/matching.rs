//! Name matching over reference tables
//!
//! Lookups are case-insensitive and run in two passes: exact equality first,
//! then bidirectional substring containment. The first record in table order
//! wins; there is no relevance ranking.

use crate::data::Named;

/// First record whose name equals `query`, ignoring case
pub fn find_exact<'a, T: Named>(items: &'a [T], query: &str) -> Option<&'a T> {
    let needle = query.to_lowercase();
    items.iter().find(|item| item.name().to_lowercase() == needle)
}

/// First record whose name contains `query` or is contained in it, ignoring case
pub fn find_containing<'a, T: Named>(items: &'a [T], query: &str) -> Option<&'a T> {
    let needle = query.to_lowercase();
    items.iter().find(|item| {
        let name = item.name().to_lowercase();
        name.contains(&needle) || needle.contains(&name)
    })
}

/// Exact match if any, otherwise the first substring match
pub fn find_by_name<'a, T: Named>(items: &'a [T], query: &str) -> Option<&'a T> {
    find_exact(items, query).or_else(|| find_containing(items, query))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str);

    impl Named for Row {
        fn name(&self) -> &str {
            self.0
        }
    }

    const ROWS: [Row; 3] = [Row("Los Lagos"), Row("Los Ríos"), Row("Biobío")];

    #[test]
    fn test_find_exact_ignores_case() {
        assert_eq!(find_exact(&ROWS, "los ríos").map(|r| r.0), Some("Los Ríos"));
        assert_eq!(find_exact(&ROWS, "BIOBÍO").map(|r| r.0), Some("Biobío"));
    }

    #[test]
    fn test_find_exact_rejects_partial_names() {
        assert!(find_exact(&ROWS, "Los").is_none());
    }

    #[test]
    fn test_find_containing_matches_record_inside_query() {
        let found = find_containing(&ROWS, "Región del Biobío");
        assert_eq!(found.map(|r| r.0), Some("Biobío"));
    }

    #[test]
    fn test_find_containing_matches_query_inside_record() {
        let found = find_containing(&ROWS, "lagos");
        assert_eq!(found.map(|r| r.0), Some("Los Lagos"));
    }

    #[test]
    fn test_find_containing_returns_first_in_table_order() {
        let found = find_containing(&ROWS, "los");
        assert_eq!(found.map(|r| r.0), Some("Los Lagos"));
    }

    #[test]
    fn test_find_by_name_without_match() {
        assert!(find_by_name(&ROWS, "Atlántida").is_none());
    }

    #[test]
    fn test_empty_table() {
        let empty: [Row; 0] = [];
        assert!(find_by_name(&empty, "Maule").is_none());
    }
}
