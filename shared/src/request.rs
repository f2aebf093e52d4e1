//! Query parameter types for collection reads.

use serde::{Deserialize, Serialize};

/// Pagination and search parameters for paginated list endpoints
/// (`page`/`limit`/`search` query string).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListQuery {
    /// Page number (1-based)
    #[serde(default = "default_page")]
    pub page: u32,

    /// Items per page
    #[serde(default = "default_limit")]
    pub limit: u32,

    /// Search keyword, omitted from the query string when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    20
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 20,
            search: None,
        }
    }
}

impl ListQuery {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page,
            limit,
            search: None,
        }
    }

    /// Set the search keyword; blank input clears it.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        self.search = if search.trim().is_empty() {
            None
        } else {
            Some(search)
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_search_is_omitted() {
        let query = ListQuery::new(1, 20).with_search("   ");
        assert!(query.search.is_none());

        let encoded = serde_json::to_value(&query).unwrap();
        assert!(encoded.get("search").is_none());
    }

    #[test]
    fn test_search_is_kept() {
        let query = ListQuery::new(2, 25).with_search("колодки");
        assert_eq!(query.search.as_deref(), Some("колодки"));
    }
}
