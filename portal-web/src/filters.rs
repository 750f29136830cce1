//! URL-driven filter state for paginated list pages.
//!
//! The query string is the single source of truth: back/forward navigation
//! and shared links reproduce the same view. Parsing is lenient, malformed
//! values fall back to defaults instead of erroring.

use serde::{Deserialize, Serialize};
use shared::models::PageParams;
use yew_router::prelude::Location;

/// Raw query-string shape. Values stay as strings so a malformed `page=abc`
/// degrades per-field instead of failing the whole parse.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// Committed filters for one list view. The category is kept as the opaque
/// URL value: a numeric id for publications, a name for the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub page: u32,
    pub category: Option<String>,
    pub search: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            page: 1,
            category: None,
            search: String::new(),
        }
    }
}

impl FilterState {
    /// Parse the current location's query string. Never fails.
    #[must_use]
    pub fn from_location(location: Option<&Location>) -> Self {
        location
            .and_then(|location| location.query::<FilterQuery>().ok())
            .map(Self::from_query)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn from_query(query: FilterQuery) -> Self {
        Self {
            page: query
                .page
                .and_then(|raw| raw.parse::<u32>().ok())
                .unwrap_or(1)
                .max(1),
            category: query.category.filter(|raw| !raw.is_empty()),
            search: query.search.unwrap_or_default(),
        }
    }

    /// Canonical query representation; defaults are omitted so plain URLs
    /// stay clean.
    #[must_use]
    pub fn to_query(&self) -> FilterQuery {
        FilterQuery {
            page: (self.page > 1).then(|| self.page.to_string()),
            category: self.category.clone(),
            search: (!self.search.trim().is_empty()).then(|| self.search.clone()),
        }
    }

    #[must_use]
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    /// Narrowing by category starts over from page 1 so the view cannot
    /// land on an out-of-range page.
    #[must_use]
    pub fn with_category(&self, category: Option<String>) -> Self {
        Self {
            page: 1,
            category: category.filter(|raw| !raw.is_empty()),
            search: self.search.clone(),
        }
    }

    /// Same page-reset rule as [`Self::with_category`].
    #[must_use]
    pub fn with_search(&self, search: String) -> Self {
        Self {
            page: 1,
            category: self.category.clone(),
            search,
        }
    }

    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        self.category.is_some() || !self.search.trim().is_empty()
    }

    /// Lower into request parameters. A numeric category travels as
    /// `category_id`, anything else as a category name.
    #[must_use]
    pub fn page_params(&self, per_page: u32) -> PageParams {
        let params = PageParams::new(self.page, per_page).with_search(&self.search);
        match &self.category {
            Some(raw) => match raw.parse::<i64>() {
                Ok(id) => params.with_category(Some(id)),
                Err(_) => params.with_category_name(Some(raw.clone())),
            },
            None => params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(query: &str) -> FilterState {
        FilterState::from_query(serde_urlencoded::from_str(query).unwrap())
    }

    #[test]
    fn empty_query_yields_defaults() {
        let filters = parse("");
        assert_eq!(filters, FilterState::default());
    }

    #[test]
    fn well_formed_query_parses() {
        let filters = parse("page=3&category=5&search=evento");
        assert_eq!(filters.page, 3);
        assert_eq!(filters.category.as_deref(), Some("5"));
        assert_eq!(filters.search, "evento");
    }

    #[test]
    fn malformed_page_falls_back_alone() {
        let filters = parse("page=abc&search=feria");
        assert_eq!(filters.page, 1);
        assert_eq!(filters.search, "feria");
    }

    #[test]
    fn page_zero_clamps_to_one() {
        assert_eq!(parse("page=0").page, 1);
        assert_eq!(parse("page=-2").page, 1);
    }

    #[test]
    fn empty_category_is_no_category() {
        assert_eq!(parse("category=").category, None);
    }

    #[test]
    fn category_change_resets_page() {
        let filters = FilterState {
            page: 3,
            category: Some("5".to_string()),
            search: "x".to_string(),
        };
        let updated = filters.with_category(Some("7".to_string()));
        assert_eq!(updated.page, 1);
        assert_eq!(updated.category.as_deref(), Some("7"));
        assert_eq!(updated.search, "x");
    }

    #[test]
    fn search_change_resets_page_and_keeps_category() {
        let filters = FilterState {
            page: 4,
            category: Some("2".to_string()),
            search: String::new(),
        };
        let updated = filters.with_search("aniversario".to_string());
        assert_eq!(updated.page, 1);
        assert_eq!(updated.category.as_deref(), Some("2"));
        assert_eq!(updated.search, "aniversario");
    }

    #[test]
    fn page_change_keeps_other_filters() {
        let filters = parse("category=9&search=banda");
        let updated = filters.with_page(2);
        assert_eq!(updated.page, 2);
        assert_eq!(updated.category.as_deref(), Some("9"));
        assert_eq!(updated.search, "banda");
    }

    #[test]
    fn query_omits_defaults() {
        let query = FilterState::default().to_query();
        assert_eq!(serde_urlencoded::to_string(&query).unwrap(), "");
    }

    #[test]
    fn query_roundtrip() {
        let filters = FilterState {
            page: 2,
            category: Some("3".to_string()),
            search: "kermesse".to_string(),
        };
        let encoded = serde_urlencoded::to_string(filters.to_query()).unwrap();
        assert_eq!(encoded, "page=2&category=3&search=kermesse");
        assert_eq!(parse(&encoded), filters);
    }

    #[test]
    fn numeric_category_lowers_to_id() {
        let params = parse("category=5").page_params(5);
        assert_eq!(params.category_id, Some(5));
        assert_eq!(params.category, None);
    }

    #[test]
    fn named_category_lowers_to_name() {
        let params = parse("category=Deportes").page_params(12);
        assert_eq!(params.category_id, None);
        assert_eq!(params.category.as_deref(), Some("Deportes"));
    }

    #[test]
    fn committed_search_becomes_request_param() {
        let filters = parse("search=event");
        let params = filters.page_params(5);
        assert_eq!(params.page, 1);
        assert_eq!(params.per_page, 5);
        assert_eq!(params.search.as_deref(), Some("event"));
        assert_eq!(params.category_id, None);
    }
}
