//! Category form.

use fauno_client::{AssetClient, HttpClient, ImageFile};
use shared::models::{Category, CategoryData};
use validator::Validate;

use super::SubmitOutcome;
use super::slug_field::SlugField;

/// Create or edit one category. Requires a name, a description, a link
/// and the vertical cover; the horizontal cover is optional. The payload
/// goes out as multipart: `file`, optional `file2` and the JSON `data`
/// blob.
#[derive(Debug, Clone, Validate)]
pub struct CategoryForm {
    /// Edit target; `None` means create.
    id: Option<i64>,
    #[validate(length(min = 1))]
    name: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(custom(function = crate::forms::slug_field::validate_required))]
    link: SlugField,
    pub parent_id: Option<i64>,
    /// Vertical cover, the `file` part
    #[validate(required)]
    pub cover: Option<ImageFile>,
    /// Horizontal cover, the `file2` part
    pub cover_wide: Option<ImageFile>,
    stored_cover_path: Option<String>,
    stored_cover_wide_path: Option<String>,
    parent_options: Vec<(i64, String)>,
}

impl CategoryForm {
    pub fn new() -> Self {
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            link: SlugField::auto(),
            parent_id: None,
            cover: None,
            cover_wide: None,
            stored_cover_path: None,
            stored_cover_wide_path: None,
            parent_options: Vec::new(),
        }
    }

    /// Edit mode: fields pre-populated, slug treated as curated.
    pub fn edit(category: &Category) -> Self {
        Self {
            id: Some(category.id),
            name: category.name.clone(),
            description: category.description.clone(),
            link: SlugField::edited(category.link.clone()),
            parent_id: category.parent_id,
            cover: None,
            cover_wide: None,
            stored_cover_path: category.image_url.clone(),
            stored_cover_wide_path: category.horizontal_image_url.clone(),
            parent_options: Vec::new(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// A name edit drives the link while it is untouched.
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

    pub fn parent_options(&self) -> &[(i64, String)] {
        &self.parent_options
    }

    /// Option source for the parent select. Failure logs and leaves the
    /// select empty.
    pub async fn load_parent_options(&mut self, api: &HttpClient) {
        match api.list_categories().await {
            Ok(categories) => {
                self.parent_options = categories
                    .into_iter()
                    .filter(|c| Some(c.id) != self.id)
                    .map(|c| (c.id, c.name))
                    .collect();
            }
            Err(e) => tracing::error!(error = %e, "failed to fetch parent category options"),
        }
    }

    /// Edit-mode picker rehydration: pull the stored covers back down so
    /// they re-submit unless replaced. Both fetches run concurrently; a
    /// failed one logs and leaves its slot empty.
    pub async fn hydrate_images(&mut self, assets: &AssetClient) {
        let (vertical, horizontal) = tokio::join!(
            fetch_stored(assets, self.stored_cover_path.as_deref()),
            fetch_stored(assets, self.stored_cover_wide_path.as_deref()),
        );
        if let Some(file) = vertical {
            self.cover = Some(file);
        }
        if let Some(file) = horizontal {
            self.cover_wide = Some(file);
        }
    }

    fn data(&self) -> CategoryData {
        CategoryData {
            name: self.name.clone(),
            description: self.description.clone(),
            link: self.link.value().to_string(),
            parent_id: self.parent_id,
        }
    }

    /// Validate and submit. Invalid input sends nothing.
    pub async fn submit(&self, api: &HttpClient) -> SubmitOutcome {
        if self.validate().is_err() {
            return SubmitOutcome::Invalid;
        }
        let Some(cover) = self.cover.clone() else {
            return SubmitOutcome::Invalid;
        };
        let data = self.data();

        let result = match self.id {
            Some(id) => {
                api.update_category(id, &data, cover, self.cover_wide.clone())
                    .await
            }
            None => {
                api.create_category(&data, cover, self.cover_wide.clone())
                    .await
            }
        };
        match result {
            Ok(_) => SubmitOutcome::Saved,
            Err(e) => {
                tracing::error!(error = %e, "failed to save category");
                SubmitOutcome::Failed
            }
        }
    }
}

impl Default for CategoryForm {
    fn default() -> Self {
        Self::new()
    }
}

async fn fetch_stored(assets: &AssetClient, path: Option<&str>) -> Option<ImageFile> {
    let path = path?;
    match assets.fetch(path).await {
        Ok(file) => file,
        Err(e) => {
            tracing::error!(error = %e, path, "failed to rehydrate stored image");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_mode_slug_follows_name() {
        let mut form = CategoryForm::new();
        form.set_name("Новинки");
        assert_eq!(form.link(), "novinki");

        form.set_name("Тормозные колодки");
        assert_eq!(form.link(), "tormoznye-kolodki");
    }

    #[test]
    fn test_manual_link_survives_name_edits() {
        let mut form = CategoryForm::new();
        form.set_name("Новинки");
        form.set_link("hand-made");
        form.set_name("Другое");
        assert_eq!(form.link(), "hand-made");
    }

    #[test]
    fn test_edit_mode_keeps_curated_slug() {
        let category: Category = serde_json::from_value(serde_json::json!({
            "id": 7,
            "name": "Диски",
            "description": "desc",
            "link": "custom-diski"
        }))
        .unwrap();
        let mut form = CategoryForm::edit(&category);
        form.set_name("Новое имя");
        assert_eq!(form.link(), "custom-diski");
        assert!(form.is_edit());
    }

    #[test]
    fn test_missing_required_fields_invalidate() {
        let mut form = CategoryForm::new();
        form.set_name("Новинки");
        form.description = "desc".to_string();
        // no cover attached
        assert!(form.validate().is_err());

        form.cover = Some(ImageFile::new("a.jpg", "image/jpeg", vec![1]));
        assert!(form.validate().is_ok());
    }
}
