use serde::{Deserialize, Serialize};

use super::ProjectSummary;

/// Ordering applied to every project listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectOrder {
    #[default]
    CreatedDesc,
}

/// Filters for one project listing.
///
/// Empty strings are normalised to "no filter", so two queries compare equal
/// exactly when they select the same rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawProjectQuery")]
pub struct ProjectQuery {
    search: Option<String>,
    category: Option<String>,
}

/// Wire form of a [`ProjectQuery`] before normalisation.
#[derive(Deserialize)]
struct RawProjectQuery {
    search: Option<String>,
    category: Option<String>,
}

impl From<RawProjectQuery> for ProjectQuery {
    fn from(raw: RawProjectQuery) -> Self {
        Self::new(raw.search.unwrap_or_default(), raw.category)
    }
}

impl ProjectQuery {
    #[must_use]
    pub fn new(search: impl Into<String>, category: Option<String>) -> Self {
        let search = search.into();
        Self {
            search: (!search.is_empty()).then_some(search),
            category: category.filter(|c| !c.is_empty()),
        }
    }

    #[must_use]
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    #[must_use]
    pub fn order(&self) -> ProjectOrder {
        ProjectOrder::CreatedDesc
    }

    /// Whether either filter narrows the listing.
    #[must_use]
    pub fn is_filtered(&self) -> bool {
        self.search.is_some() || self.category.is_some()
    }

    /// `ILIKE` pattern for the title filter, with LIKE metacharacters escaped
    /// so the search text only ever matches as a literal substring.
    #[must_use]
    pub fn title_pattern(&self) -> Option<String> {
        self.search.as_deref().map(|s| {
            let mut pattern = String::with_capacity(s.len() + 2);
            pattern.push('%');
            for c in s.chars() {
                if matches!(c, '%' | '_' | '\\') {
                    pattern.push('\\');
                }
                pattern.push(c);
            }
            pattern.push('%');
            pattern
        })
    }

    /// In-memory version of the database predicate.
    #[must_use]
    pub fn matches(&self, project: &ProjectSummary) -> bool {
        let title_ok = self.search.as_deref().is_none_or(|needle| {
            project
                .title
                .to_lowercase()
                .contains(&needle.to_lowercase())
        });
        let category_ok = self
            .category
            .as_deref()
            .is_none_or(|label| project.categories.iter().any(|c| c == label));
        title_ok && category_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::project;

    #[test]
    fn empty_inputs_are_unfiltered() {
        let query = ProjectQuery::new("", None);
        assert_eq!(query, ProjectQuery::default());
        assert!(!query.is_filtered());
        assert_eq!(query.order(), ProjectOrder::CreatedDesc);
        assert!(query.title_pattern().is_none());
        assert!(query.category().is_none());
    }

    #[test]
    fn empty_category_counts_as_absent() {
        let query = ProjectQuery::new("", Some(String::new()));
        assert!(!query.is_filtered());
    }

    #[test]
    fn deserialized_empty_strings_are_unfiltered() {
        let query: ProjectQuery =
            serde_json::from_str(r#"{"search":"","category":""}"#).unwrap();
        assert_eq!(query, ProjectQuery::default());
        assert!(!query.is_filtered());
        assert!(query.title_pattern().is_none());
        assert!(query.category().is_none());
    }

    #[test]
    fn deserialized_query_matches_constructed_one() {
        let query: ProjectQuery =
            serde_json::from_str(r#"{"search":"map","category":"web"}"#).unwrap();
        assert_eq!(query, ProjectQuery::new("map", Some("web".to_string())));

        let missing: ProjectQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(missing, ProjectQuery::default());
    }

    #[test]
    fn whitespace_search_is_kept() {
        let query = ProjectQuery::new(" ", None);
        assert_eq!(query.search(), Some(" "));
        assert!(query.is_filtered());
    }

    #[test]
    fn search_matches_title_substring_case_insensitively() {
        let query = ProjectQuery::new("map", None);
        assert!(query.matches(&project("1", "World Map Viewer", &[])));
        assert!(query.matches(&project("2", "MAPPER", &[])));
        assert!(!query.matches(&project("3", "Globe", &[])));
    }

    #[test]
    fn category_requires_exact_label() {
        let query = ProjectQuery::new("", Some("web".to_string()));
        assert!(query.matches(&project("1", "a", &["cli", "web"])));
        assert!(!query.matches(&project("2", "b", &["webassembly"])));
        assert!(!query.matches(&project("3", "c", &["Web"])));
        assert!(!query.matches(&project("4", "d", &[])));
    }

    #[test]
    fn both_filters_must_hold() {
        let query = ProjectQuery::new("map", Some("gis".to_string()));
        assert!(query.matches(&project("1", "Map tiles", &["gis"])));
        assert!(!query.matches(&project("2", "Map tiles", &["web"])));
        assert!(!query.matches(&project("3", "Tiles", &["gis"])));
    }

    #[test]
    fn title_pattern_wraps_search() {
        let query = ProjectQuery::new("map", None);
        assert_eq!(query.title_pattern().as_deref(), Some("%map%"));
    }

    #[test]
    fn title_pattern_escapes_like_metacharacters() {
        let query = ProjectQuery::new(r"100%_a\b", None);
        assert_eq!(query.title_pattern().as_deref(), Some(r"%100\%\_a\\b%"));
    }

    #[test]
    fn query_serialises_normalised_fields() {
        let query = ProjectQuery::new("rust", Some("cli".to_string()));
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["search"], "rust");
        assert_eq!(json["category"], "cli");

        let parsed: ProjectQuery = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, query);
    }
}
