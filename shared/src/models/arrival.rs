//! Arrival Model

use serde::{Deserialize, Serialize};

use super::SoftDelete;

/// "Latest arrivals" vehicle entry: one car, one cover image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arrival {
    pub id: i64,
    pub model: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub year: String,
    /// Path relative to the asset host; note the legacy `imageURL` casing
    #[serde(default, rename = "imageURL")]
    pub image_url: Option<String>,
}

impl SoftDelete for Arrival {
    fn is_deleted(&self) -> bool {
        false
    }
}

/// Metadata blob for arrival create/update, JSON-encoded under the
/// multipart `data` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrivalData {
    pub model: String,
    pub body: String,
    pub year: String,
}
