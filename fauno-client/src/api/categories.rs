//! Category API

use crate::{ClientResult, HttpClient, ImageFile};
use reqwest::multipart::Form;
use serde_json::Value;
use shared::models::{Category, CategoryData};
use shared::normalize_list;

impl HttpClient {
    /// Fetch all categories. The endpoint returns a bare array; soft-deleted
    /// records are dropped during normalization.
    pub async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        let value: Value = self.get("category").await?;
        Ok(normalize_list::<Category>(value)?.rows)
    }

    /// Create a category: multipart with the vertical cover under `file`,
    /// the optional horizontal cover under `file2` and the metadata blob
    /// under `data`.
    pub async fn create_category(
        &self,
        data: &CategoryData,
        cover: ImageFile,
        cover_wide: Option<ImageFile>,
    ) -> ClientResult<Value> {
        let form = category_form(data, cover, cover_wide)?;
        self.post_multipart("category", form).await
    }

    /// Update a category, keyed by `id` as a query parameter.
    pub async fn update_category(
        &self,
        id: i64,
        data: &CategoryData,
        cover: ImageFile,
        cover_wide: Option<ImageFile>,
    ) -> ClientResult<Value> {
        let form = category_form(data, cover, cover_wide)?;
        self.put_multipart_query("category", &[("id", id)], form)
            .await
    }

    /// Delete a category. Irreversible once the server confirms.
    pub async fn delete_category(&self, id: i64) -> ClientResult<Value> {
        self.delete_query("category", &[("id", id)]).await
    }
}

fn category_form(
    data: &CategoryData,
    cover: ImageFile,
    cover_wide: Option<ImageFile>,
) -> ClientResult<Form> {
    let mut form = Form::new().part("file", cover.into_part()?);
    if let Some(wide) = cover_wide {
        form = form.part("file2", wide.into_part()?);
    }
    Ok(form.text("data", serde_json::to_string(data)?))
}
