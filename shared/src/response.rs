//! List response normalization and pagination.
//!
//! The admin API is not uniform about list payloads: some endpoints return
//! a bare array, others wrap the rows in `{rows, count}`, `{items}` or
//! `{data}`. Everything funnels through [`normalize_list`], which resolves
//! the shape in that priority order, drops soft-deleted rows and settles on
//! a single `rows + total` view of the collection.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::models::SoftDelete;

/// Normalization failure. Controllers treat this like any other fetch
/// error: log it and keep the previous list state.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The payload is neither an array nor a known wrapper object
    #[error("unrecognized list shape: {0}")]
    Shape(&'static str),

    /// Rows were found but did not deserialize as the entity
    #[error("malformed rows: {0}")]
    Rows(#[from] serde_json::Error),
}

/// A normalized page of entities plus the collection totals.
#[derive(Debug, Clone)]
pub struct ListPage<T> {
    pub rows: Vec<T>,
    /// Server-reported total when present, otherwise the row count
    pub total: u64,
    /// Server-reported active count (Products header), when present
    pub active: Option<u64>,
}

impl<T> Default for ListPage<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            total: 0,
            active: None,
        }
    }
}

/// Normalize any list endpoint payload into a [`ListPage`].
///
/// Shape priority: bare array, then `.rows`, `.items`, `.data`. Totals come
/// from `.count`, then `.total`, then the surviving row count. Rows with
/// `isDeleted == true` never make it out, regardless of server filtering.
pub fn normalize_list<T>(value: Value) -> Result<ListPage<T>, NormalizeError>
where
    T: DeserializeOwned + SoftDelete,
{
    let (rows_value, count, active) = match value {
        Value::Array(rows) => (Value::Array(rows), None, None),
        Value::Object(map) => {
            let rows = map
                .get("rows")
                .or_else(|| map.get("items"))
                .or_else(|| map.get("data"))
                .cloned()
                .ok_or(NormalizeError::Shape("object without rows/items/data"))?;
            if !rows.is_array() {
                return Err(NormalizeError::Shape("wrapped rows are not an array"));
            }
            let count = map
                .get("count")
                .or_else(|| map.get("total"))
                .and_then(Value::as_u64);
            let active = map.get("active").and_then(Value::as_u64);
            (rows, count, active)
        }
        _ => return Err(NormalizeError::Shape("neither array nor object")),
    };

    let rows: Vec<T> = serde_json::from_value(rows_value)?;
    let rows: Vec<T> = rows.into_iter().filter(|row| !row.is_deleted()).collect();
    let total = count.unwrap_or(rows.len() as u64);

    Ok(ListPage {
        rows,
        total,
        active,
    })
}

/// Pagination metadata displayed verbatim from the server totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Current page number (1-based)
    pub page: u32,
    /// Items per page
    pub limit: u32,
    /// Total number of items
    pub total: u64,
}

impl Pagination {
    pub fn new(page: u32, limit: u32, total: u64) -> Self {
        Self { page, limit, total }
    }

    /// Total page count, `ceil(total / limit)`.
    pub fn total_pages(&self) -> u32 {
        if self.limit == 0 {
            0
        } else {
            self.total.div_ceil(self.limit as u64) as u32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: i64,
        #[serde(default, rename = "isDeleted")]
        is_deleted: bool,
    }

    impl SoftDelete for Row {
        fn is_deleted(&self) -> bool {
            self.is_deleted
        }
    }

    #[test]
    fn test_bare_array() {
        let page = normalize_list::<Row>(json!([{"id": 1}, {"id": 2}])).unwrap();
        assert_eq!(page.rows.len(), 2);
        assert_eq!(page.total, 2);
        assert!(page.active.is_none());
    }

    #[test]
    fn test_rows_wrapper_with_count() {
        let page =
            normalize_list::<Row>(json!({"rows": [{"id": 1}], "count": 25, "active": 7})).unwrap();
        assert_eq!(page.rows.len(), 1);
        assert_eq!(page.total, 25);
        assert_eq!(page.active, Some(7));
    }

    #[test]
    fn test_items_wrapper() {
        let page = normalize_list::<Row>(json!({"items": [{"id": 3}]})).unwrap();
        assert_eq!(page.rows, vec![Row { id: 3, is_deleted: false }]);
    }

    #[test]
    fn test_data_wrapper_with_total() {
        let page = normalize_list::<Row>(json!({"data": [{"id": 4}], "total": 9})).unwrap();
        assert_eq!(page.total, 9);
    }

    #[test]
    fn test_rows_takes_priority_over_items_and_data() {
        let page = normalize_list::<Row>(json!({
            "rows": [{"id": 1}],
            "items": [{"id": 2}, {"id": 3}],
            "data": [{"id": 4}]
        }))
        .unwrap();
        assert_eq!(page.rows, vec![Row { id: 1, is_deleted: false }]);
    }

    #[test]
    fn test_soft_deleted_rows_are_dropped() {
        let page = normalize_list::<Row>(json!([
            {"id": 1},
            {"id": 2, "isDeleted": true},
            {"id": 3, "isDeleted": false}
        ]))
        .unwrap();
        assert_eq!(page.rows.iter().map(|r| r.id).collect::<Vec<_>>(), [1, 3]);
        // no server count: total reflects the surviving rows
        assert_eq!(page.total, 2);
    }

    #[test]
    fn test_unknown_shapes_are_rejected() {
        assert!(normalize_list::<Row>(json!("nope")).is_err());
        assert!(normalize_list::<Row>(json!({"weird": []})).is_err());
        assert!(normalize_list::<Row>(json!({"rows": 5})).is_err());
    }

    #[test]
    fn test_malformed_rows_are_rejected() {
        let result = normalize_list::<Row>(json!([{"id": "not-a-number"}]));
        assert!(matches!(result, Err(NormalizeError::Rows(_))));
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(Pagination::new(2, 20, 25).total_pages(), 2);
        assert_eq!(Pagination::new(1, 20, 40).total_pages(), 2);
        assert_eq!(Pagination::new(1, 20, 41).total_pages(), 3);
        assert_eq!(Pagination::new(1, 20, 0).total_pages(), 0);
        assert_eq!(Pagination::new(1, 0, 10).total_pages(), 0);
    }
}
