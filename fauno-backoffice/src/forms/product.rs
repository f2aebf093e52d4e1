//! Product form.

use fauno_client::{HttpClient, ImageFile};
use rust_decimal::Decimal;
use shared::models::{Product, ProductData};
use shared::util::normalize_json_field;
use validator::Validate;

use super::SubmitOutcome;
use super::slug_field::SlugField;

/// Create, copy or edit one product. Name, link and price are required;
/// everything else is optional listing metadata. Numeric fields are
/// edited as text, the way the inputs hold them, and parsed at payload
/// time. Images go out as repeated `files` parts.
#[derive(Debug, Clone, Validate)]
pub struct ProductForm {
    /// Edit target; `None` means create (including copies).
    id: Option<i64>,
    #[validate(length(min = 1))]
    name: String,
    #[validate(custom(function = crate::forms::slug_field::validate_required))]
    link: SlugField,
    #[validate(custom(function = crate::forms::validate_required_decimal))]
    pub price: String,
    pub count: String,
    pub make: String,
    pub about: String,
    /// Free-form JSON text, canonicalized at payload time
    pub additional_fields: String,
    pub ebay_category: String,
    pub ebay_model: String,
    pub ebay_year: String,
    pub ebay_additional_notes: String,
    pub ebay_also_fits: Vec<String>,
    pub images: Vec<ImageFile>,
    makes: Vec<String>,
    categories: Vec<String>,
}

impl ProductForm {
    pub fn new() -> Self {
        Self {
            id: None,
            name: String::new(),
            link: SlugField::auto(),
            price: String::new(),
            count: String::new(),
            make: String::new(),
            about: String::new(),
            additional_fields: String::new(),
            ebay_category: String::new(),
            ebay_model: String::new(),
            ebay_year: String::new(),
            ebay_additional_notes: String::new(),
            ebay_also_fits: Vec::new(),
            images: Vec::new(),
            makes: Vec::new(),
            categories: Vec::new(),
        }
    }

    /// Copy mode: fields taken from an existing product, images left for
    /// the admin to upload anew. Submits as a create.
    pub fn copy(product: &Product) -> Self {
        Self::prefilled(product)
    }

    /// Edit mode: same prefill, submits as an update keyed by id.
    pub fn edit(product: &Product) -> Self {
        Self {
            id: Some(product.id),
            ..Self::prefilled(product)
        }
    }

    fn prefilled(product: &Product) -> Self {
        Self {
            id: None,
            name: product.name.clone(),
            link: SlugField::edited(product.link.clone()),
            price: product.price.to_string(),
            count: product.count.map(|c| c.to_string()).unwrap_or_default(),
            make: product.make.clone().unwrap_or_default(),
            about: product.about.clone().unwrap_or_default(),
            additional_fields: product
                .additional_fields
                .as_ref()
                .map(|value| serde_json::to_string_pretty(value).unwrap_or_default())
                .unwrap_or_default(),
            ebay_category: product.ebay_category.clone().unwrap_or_default(),
            ebay_model: product.ebay_model.clone().unwrap_or_default(),
            ebay_year: product.ebay_year.clone().unwrap_or_default(),
            ebay_additional_notes: product.ebay_additional_notes.clone().unwrap_or_default(),
            ebay_also_fits: product.ebay_also_fits.clone(),
            images: Vec::new(),
            makes: Vec::new(),
            categories: Vec::new(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.link.on_name_change(&self.name);
    }

    pub fn link(&self) -> &str {
        self.link.value()
    }

    pub fn set_link(&mut self, link: impl Into<String>) {
        self.link.set_manual(link);
    }

    pub fn makes(&self) -> &[String] {
        &self.makes
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Autocomplete sources for the make and category inputs, fetched
    /// together. Either failing logs and leaves its options empty.
    pub async fn load_options(&mut self, api: &HttpClient) {
        let (makes, categories) = tokio::join!(api.product_makes(), api.product_categories());
        match makes {
            Ok(values) => self.makes = values,
            Err(e) => tracing::error!(error = %e, "failed to fetch product makes"),
        }
        match categories {
            Ok(values) => self.categories = values,
            Err(e) => tracing::error!(error = %e, "failed to fetch product categories"),
        }
    }

    /// Assemble the metadata blob. Blank optional fields are dropped so
    /// the API does not store empty strings.
    fn data(&self) -> Option<ProductData> {
        let price: Decimal = self.price.trim().parse().ok()?;
        Some(ProductData {
            name: self.name.clone(),
            link: self.link.value().to_string(),
            price,
            make: non_empty(&self.make),
            about: non_empty(&self.about),
            additional_fields: normalize_json_field(&self.additional_fields),
            ebay_category: non_empty(&self.ebay_category),
            ebay_model: non_empty(&self.ebay_model),
            ebay_year: non_empty(&self.ebay_year),
            ebay_additional_notes: non_empty(&self.ebay_additional_notes),
            count: self.count.trim().parse().ok(),
            ebay_also_fits: if self.ebay_also_fits.is_empty() {
                None
            } else {
                Some(self.ebay_also_fits.clone())
            },
        })
    }

    /// Validate and submit. Invalid input sends nothing.
    pub async fn submit(&self, api: &HttpClient) -> SubmitOutcome {
        if self.validate().is_err() {
            return SubmitOutcome::Invalid;
        }
        let Some(data) = self.data() else {
            return SubmitOutcome::Invalid;
        };

        let result = match self.id {
            Some(id) => api.update_product(id, &data, self.images.clone()).await,
            None => api.create_product(&data, self.images.clone()).await,
        };
        match result {
            Ok(_) => SubmitOutcome::Saved,
            Err(e) => {
                tracing::error!(error = %e, "failed to save product");
                SubmitOutcome::Failed
            }
        }
    }
}

impl Default for ProductForm {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_mode_slug_follows_name() {
        let mut form = ProductForm::new();
        form.set_name("Тормозные колодки");
        assert_eq!(form.link(), "tormoznye-kolodki");
    }

    #[test]
    fn test_empty_price_is_invalid() {
        let mut form = ProductForm::new();
        form.set_name("X");
        form.set_link("x");
        form.price = String::new();
        assert!(form.validate().is_err());

        form.price = "120".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_copy_prefills_but_keeps_no_id_and_no_images() {
        let product: Product = serde_json::from_value(json!({
            "id": 9,
            "name": "Фара",
            "link": "fara",
            "price": 120.0,
            "images": ["covers/fara.jpg"],
            "ebayAlsoFits": ["E39"]
        }))
        .unwrap();

        let mut form = ProductForm::copy(&product);
        assert!(!form.is_edit());
        assert_eq!(form.name(), "Фара");
        assert_eq!(form.ebay_also_fits, ["E39"]);
        assert!(form.images.is_empty());

        // prefilled slug counts as curated
        form.set_name("Фара левая");
        assert_eq!(form.link(), "fara");
    }

    #[test]
    fn test_data_drops_blank_optionals_and_canonicalizes_json() {
        let mut form = ProductForm::new();
        form.set_name("Фара");
        form.price = "120".to_string();
        form.make = "  ".to_string();
        form.additional_fields = "{\n  \"oem\": \"123\"\n}".to_string();

        let data = form.data().unwrap();
        assert!(data.make.is_none());
        assert_eq!(data.additional_fields.as_deref(), Some("{\"oem\":\"123\"}"));
        assert!(data.count.is_none());
        assert!(data.ebay_also_fits.is_none());
    }
}
