//! Product Model
//!
//! Products carry eBay listing metadata alongside the catalog fields. A few
//! wire fields are historically inconsistent (`images` entries are either
//! bare URLs or objects, `ebayAlsoFits` may arrive as an array, a
//! JSON-encoded string or a comma-separated string); deserialization
//! accepts every form the API has been seen to produce.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::SoftDelete;

/// One product image reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
}

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub link: String,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Stock count
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_images")]
    pub images: Vec<ProductImage>,
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub ebay_category: Option<String>,
    #[serde(default)]
    pub ebay_model: Option<String>,
    #[serde(default)]
    pub ebay_year: Option<String>,
    #[serde(default)]
    pub ebay_additional_notes: Option<String>,
    #[serde(default, deserialize_with = "deserialize_also_fits")]
    pub ebay_also_fits: Vec<String>,
    /// Free-form listing attributes, passed through verbatim
    #[serde(default)]
    pub additional_fields: Option<Value>,
    #[serde(default)]
    pub is_deleted: bool,
}

impl SoftDelete for Product {
    fn is_deleted(&self) -> bool {
        self.is_deleted
    }
}

impl Product {
    /// First image, used as the card cover.
    pub fn cover(&self) -> Option<&ProductImage> {
        self.images.first()
    }
}

/// Metadata blob for product create/update, JSON-encoded under the
/// multipart `data` field. Optional fields are omitted when empty, matching
/// what the API expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductData {
    pub name: String,
    pub link: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    /// Canonicalized JSON text (see `util::normalize_json_field`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_fields: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ebay_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ebay_model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ebay_year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ebay_additional_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ebay_also_fits: Option<Vec<String>>,
}

fn deserialize_images<'de, D>(deserializer: D) -> Result<Vec<ProductImage>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Entry {
        Url(String),
        Full(ProductImage),
    }

    let entries: Option<Vec<Entry>> = Option::deserialize(deserializer)?;
    Ok(entries
        .unwrap_or_default()
        .into_iter()
        .map(|entry| match entry {
            Entry::Url(image_url) => ProductImage {
                image_url,
                preview_url: None,
            },
            Entry::Full(image) => image,
        })
        .collect())
}

fn deserialize_also_fits<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(entries)) => entries
            .into_iter()
            .filter_map(|entry| match entry {
                Value::String(s) if !s.is_empty() => Some(s),
                _ => None,
            })
            .collect(),
        Some(Value::String(raw)) => parse_also_fits_text(&raw),
        Some(_) => Vec::new(),
    })
}

/// A string-valued `ebayAlsoFits` is either a JSON-encoded array or a
/// comma-separated list.
fn parse_also_fits_text(raw: &str) -> Vec<String> {
    if let Ok(Value::Array(entries)) = serde_json::from_str::<Value>(raw) {
        return entries
            .into_iter()
            .filter_map(|entry| entry.as_str().map(str::to_string))
            .filter(|entry| !entry.is_empty())
            .collect();
    }
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
