//! Category Model

use serde::{Deserialize, Serialize};

use super::SoftDelete;

/// Category entity. Categories form a tree via `parent_id`; the slug in
/// `link` is what the storefront routes on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub parent_id: Option<i64>,
    /// Vertical cover, path relative to the asset host
    #[serde(default)]
    pub image_url: Option<String>,
    /// Horizontal cover, path relative to the asset host
    #[serde(default)]
    pub horizontal_image_url: Option<String>,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl SoftDelete for Category {
    fn is_deleted(&self) -> bool {
        self.is_deleted
    }
}

/// Metadata blob for category create/update, JSON-encoded under the
/// multipart `data` field. `parentId` is serialized even when null.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryData {
    pub name: String,
    pub description: String,
    pub link: String,
    pub parent_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_data_keeps_null_parent() {
        let data = CategoryData {
            name: "Новинки".to_string(),
            description: "desc".to_string(),
            link: "novinki".to_string(),
            parent_id: None,
        };
        let encoded = serde_json::to_value(&data).unwrap();
        assert!(encoded.get("parentId").unwrap().is_null());
    }

    #[test]
    fn test_category_tolerates_sparse_rows() {
        let category: Category =
            serde_json::from_value(serde_json::json!({"id": 5, "name": "Диски"})).unwrap();
        assert_eq!(category.id, 5);
        assert!(category.parent_id.is_none());
        assert!(!category.is_deleted);
    }
}
