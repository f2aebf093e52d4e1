//! Arrival API

use crate::{ClientResult, HttpClient, ImageFile};
use reqwest::multipart::Form;
use serde_json::Value;
use shared::models::{Arrival, ArrivalData};
use shared::normalize_list;

impl HttpClient {
    /// Fetch all arrivals (bare array).
    pub async fn list_arrivals(&self) -> ClientResult<Vec<Arrival>> {
        let value: Value = self.get("arrival").await?;
        Ok(normalize_list::<Arrival>(value)?.rows)
    }

    /// Create an arrival: multipart with the cover under `file` and the
    /// metadata blob under `data`.
    pub async fn create_arrival(&self, data: &ArrivalData, cover: ImageFile) -> ClientResult<Value> {
        let form = arrival_form(data, cover)?;
        self.post_multipart("arrival", form).await
    }

    /// Update an arrival, keyed by `id` as a query parameter.
    pub async fn update_arrival(
        &self,
        id: i64,
        data: &ArrivalData,
        cover: ImageFile,
    ) -> ClientResult<Value> {
        let form = arrival_form(data, cover)?;
        self.put_multipart_query("arrival", &[("id", id)], form)
            .await
    }

    /// Delete an arrival. Irreversible once the server confirms.
    pub async fn delete_arrival(&self, id: i64) -> ClientResult<Value> {
        self.delete_query("arrival", &[("id", id)]).await
    }
}

fn arrival_form(data: &ArrivalData, cover: ImageFile) -> ClientResult<Form> {
    Ok(Form::new()
        .part("file", cover.into_part()?)
        .text("data", serde_json::to_string(data)?))
}
