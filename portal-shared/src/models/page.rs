use serde::{Deserialize, Serialize};

/// Query parameters accepted by every paginated list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageParams {
    pub page: u32,
    pub per_page: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    /// Free-text category name, used by resources whose categories are not
    /// id-addressed (the gallery).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl PageParams {
    #[must_use]
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            // Page numbers are 1-based everywhere.
            page: page.max(1),
            per_page,
            category_id: None,
            category: None,
            search: None,
        }
    }

    #[must_use]
    pub fn with_category(mut self, category_id: Option<i64>) -> Self {
        self.category_id = category_id;
        self
    }

    #[must_use]
    pub fn with_category_name(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    /// Empty and whitespace-only search terms are not sent at all.
    #[must_use]
    pub fn with_search(mut self, search: &str) -> Self {
        let trimmed = search.trim();
        self.search = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }
}

/// One page of a listed resource. Recomputed on every fetch, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
}

impl<T> Paginated<T> {
    /// The degenerate page used when a fetch fails or returns nothing.
    #[must_use]
    pub fn empty(params: &PageParams) -> Self {
        Self {
            items: Vec::new(),
            page: params.page,
            per_page: params.per_page,
            total: 0,
        }
    }

    /// Number of pages, rounding up. An empty result still counts one page
    /// so pagination controls have a sane lower bound.
    #[must_use]
    pub fn total_pages(&self) -> u32 {
        if self.per_page == 0 || self.total == 0 {
            return 1;
        }
        u32::try_from(self.total.div_ceil(u64::from(self.per_page))).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Wire shape of a list response. Older endpoints return a bare JSON array;
/// newer ones return the `{items, total, page, per_page}` envelope. Both
/// normalize into [`Paginated`].
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Paged {
        #[serde(default = "Vec::new")]
        items: Vec<T>,
        #[serde(default)]
        total: u64,
        #[serde(default)]
        page: Option<u32>,
        #[serde(default)]
        per_page: Option<u32>,
    },
    Flat(Vec<T>),
}

impl<T> ListEnvelope<T> {
    /// Normalize into a [`Paginated`] page. A flat array becomes a single
    /// synthetic page holding everything the backend returned.
    #[must_use]
    pub fn into_paginated(self, params: &PageParams) -> Paginated<T> {
        match self {
            Self::Paged {
                items,
                total,
                page,
                per_page,
            } => Paginated {
                total,
                page: page.unwrap_or(params.page),
                per_page: per_page.unwrap_or(params.per_page),
                items,
            },
            Self::Flat(items) => Paginated {
                total: items.len() as u64,
                page: 1,
                per_page: params.per_page.max(items.len() as u32),
                items,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_params_clamp_to_first_page() {
        let params = PageParams::new(0, 20);
        assert_eq!(params.page, 1);
    }

    #[test]
    fn blank_search_is_dropped() {
        let params = PageParams::new(1, 5).with_search("   ");
        assert!(params.search.is_none());
        let params = PageParams::new(1, 5).with_search("  evento ");
        assert_eq!(params.search.as_deref(), Some("evento"));
    }

    #[test]
    fn params_serialize_as_query_string() {
        let params = PageParams::new(2, 5)
            .with_category(Some(3))
            .with_search("feria");
        let query = serde_urlencoded::to_string(&params).unwrap();
        assert_eq!(query, "page=2&per_page=5&category_id=3&search=feria");
    }

    #[test]
    fn category_name_serializes_when_set() {
        let params = PageParams::new(1, 12).with_category_name(Some("Deportes".to_string()));
        let query = serde_urlencoded::to_string(&params).unwrap();
        assert_eq!(query, "page=1&per_page=12&category=Deportes");
    }

    #[test]
    fn unset_filters_are_not_serialized() {
        let query = serde_urlencoded::to_string(PageParams::new(1, 12)).unwrap();
        assert_eq!(query, "page=1&per_page=12");
    }

    #[test]
    fn total_pages_rounds_up() {
        let page = Paginated::<u8> {
            items: Vec::new(),
            page: 1,
            per_page: 5,
            total: 11,
        };
        assert_eq!(page.total_pages(), 3);
    }

    #[test]
    fn empty_result_counts_one_page() {
        let params = PageParams::new(4, 5);
        let page = Paginated::<u8>::empty(&params);
        assert_eq!(page.total_pages(), 1);
        assert!(page.is_empty());
        assert_eq!(page.page, 4);
    }

    #[test]
    fn envelope_normalizes_paged_response() {
        let json = r#"{"items": [1, 2], "total": 2, "page": 1, "per_page": 5}"#;
        let envelope: ListEnvelope<u8> = serde_json::from_str(json).unwrap();
        let page = envelope.into_paginated(&PageParams::new(1, 5));
        assert_eq!(page.items, vec![1, 2]);
        assert_eq!(page.total, 2);
        assert_eq!(page.total_pages(), 1);
    }

    #[test]
    fn envelope_fills_missing_fields_from_params() {
        let json = r#"{"items": [9], "total": 21}"#;
        let envelope: ListEnvelope<u8> = serde_json::from_str(json).unwrap();
        let page = envelope.into_paginated(&PageParams::new(3, 10));
        assert_eq!(page.page, 3);
        assert_eq!(page.per_page, 10);
        assert_eq!(page.total_pages(), 3);
    }

    #[test]
    fn envelope_normalizes_flat_array() {
        let json = r#"[1, 2, 3]"#;
        let envelope: ListEnvelope<u8> = serde_json::from_str(json).unwrap();
        let page = envelope.into_paginated(&PageParams::new(1, 12));
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.total, 3);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages(), 1);
    }

    #[test]
    fn page_beyond_range_is_just_empty() {
        // The backend answers an out-of-range page with an empty item set;
        // the client must treat that as "no results", not as an error.
        let json = r#"{"items": [], "total": 11, "page": 9, "per_page": 5}"#;
        let envelope: ListEnvelope<u8> = serde_json::from_str(json).unwrap();
        let page = envelope.into_paginated(&PageParams::new(9, 5));
        assert!(page.is_empty());
        assert_eq!(page.total_pages(), 3);
    }
}
