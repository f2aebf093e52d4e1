//! Product API

use crate::{ClientResult, HttpClient, ImageFile};
use reqwest::multipart::Form;
use serde_json::Value;
use shared::models::{Product, ProductData};
use shared::{ListPage, ListQuery, normalize_list};

impl HttpClient {
    /// Fetch one page of products. The endpoint's response shape varies;
    /// normalization settles it and drops soft-deleted rows.
    pub async fn list_products(&self, query: &ListQuery) -> ClientResult<ListPage<Product>> {
        let value: Value = self.get_query("product", query).await?;
        Ok(normalize_list::<Product>(value)?)
    }

    /// Autocomplete source: known vehicle makes.
    pub async fn product_makes(&self) -> ClientResult<Vec<String>> {
        Ok(self
            .get::<Option<Vec<String>>>("product/makes")
            .await?
            .unwrap_or_default())
    }

    /// Autocomplete source: known eBay categories.
    pub async fn product_categories(&self) -> ClientResult<Vec<String>> {
        Ok(self
            .get::<Option<Vec<String>>>("product/categories")
            .await?
            .unwrap_or_default())
    }

    /// Create a product: multipart with every image under a repeated
    /// `files` field and the metadata blob under `data`.
    pub async fn create_product(
        &self,
        data: &ProductData,
        images: Vec<ImageFile>,
    ) -> ClientResult<Value> {
        let form = product_form(data, images)?;
        self.post_multipart("product", form).await
    }

    /// Update a product, keyed by `id` as a query parameter.
    pub async fn update_product(
        &self,
        id: i64,
        data: &ProductData,
        images: Vec<ImageFile>,
    ) -> ClientResult<Value> {
        let form = product_form(data, images)?;
        self.put_multipart_query("product", &[("id", id)], form)
            .await
    }

    /// Delete a product. Irreversible once the server confirms.
    pub async fn delete_product(&self, id: i64) -> ClientResult<Value> {
        self.delete_query("product", &[("id", id)]).await
    }
}

fn product_form(data: &ProductData, images: Vec<ImageFile>) -> ClientResult<Form> {
    let mut form = Form::new();
    for image in images {
        form = form.part("files", image.into_part()?);
    }
    Ok(form.text("data", serde_json::to_string(data)?))
}
