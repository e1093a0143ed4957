//! API Response types
//!
//! Paginated envelopes returned by the list endpoints

use serde::{Deserialize, Serialize};

/// Pagination metadata attached to every list response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Total number of items across all pages
    pub total: u64,
    /// Items in this page, when the server reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

/// One page of a list endpoint, exactly as the server returned it
///
/// ```json
/// { "data": [ ... ], "meta": { "total": 42, "count": 10 } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new", alias = "items")]
    pub data: Vec<T>,
    pub meta: PageMeta,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, total: u64) -> Self {
        let count = data.len() as u64;
        Self {
            data,
            meta: PageMeta {
                total,
                count: Some(count),
            },
            extra: serde_json::Map::new(),
        }
    }

    pub fn total(&self) -> u64 {
        self.meta.total
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_accepts_items_alias() {
        let page: Page<u32> = serde_json::from_value(json!({
            "items": [1, 2, 3],
            "meta": {"total": 42}
        }))
        .unwrap();
        assert_eq!(page.data, vec![1, 2, 3]);
        assert_eq!(page.total(), 42);
        assert_eq!(page.meta.count, None);
    }

    #[test]
    fn test_page_requires_meta() {
        let result = serde_json::from_value::<Page<u32>>(json!({"data": [1]}));
        assert!(result.is_err());
    }

    #[test]
    fn test_page_new_counts_items() {
        let page = Page::new(vec!["a", "b"], 10);
        assert_eq!(page.meta.count, Some(2));
        assert_eq!(page.len(), 2);
        assert!(!page.is_empty());
    }
}
