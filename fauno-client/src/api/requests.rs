//! Requests inbox API

use crate::{ClientResult, HttpClient};
use serde_json::Value;
use shared::models::{ClientRequest, MarkReadRequest, PartRequest};

impl HttpClient {
    /// Fetch all inbound customer messages. The endpoint returns a bare
    /// array; anything else counts as an empty inbox.
    pub async fn list_client_requests(&self) -> ClientResult<Vec<ClientRequest>> {
        let value: Value = self.get("request/client/requests").await?;
        Ok(rows_or_empty(value))
    }

    /// Fetch all inbound part inquiries.
    pub async fn list_part_requests(&self) -> ClientResult<Vec<PartRequest>> {
        let value: Value = self.get("request/part/requests").await?;
        Ok(rows_or_empty(value))
    }

    /// Mark one request as read. Works for both collections; the server
    /// keys off the id alone.
    pub async fn mark_request_read(&self, id: &str) -> ClientResult<Value> {
        let request = MarkReadRequest { id: id.to_string() };
        self.post("request/read", &request).await
    }
}

fn rows_or_empty<T: serde::de::DeserializeOwned>(value: Value) -> Vec<T> {
    match value {
        Value::Array(_) => serde_json::from_value(value).unwrap_or_default(),
        _ => Vec::new(),
    }
}
