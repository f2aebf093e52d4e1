//! Inbound request models: customer messages and part inquiries.

use serde::{Deserialize, Serialize};

use super::SoftDelete;

/// Free-text customer message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRequest {
    pub id: String,
    #[serde(default)]
    pub is_unread: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub mail: String,
    #[serde(default)]
    pub message: String,
}

impl SoftDelete for ClientRequest {
    fn is_deleted(&self) -> bool {
        false
    }
}

/// Structured auto-part inquiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartRequest {
    pub id: String,
    #[serde(default)]
    pub is_unread: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub make: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub generation: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub part_description: String,
}

impl SoftDelete for PartRequest {
    fn is_deleted(&self) -> bool {
        false
    }
}

/// Mark-as-read payload (`POST /request/read`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkReadRequest {
    pub id: String,
}
