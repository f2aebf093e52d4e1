//! Arrival form.

use fauno_client::{AssetClient, HttpClient, ImageFile};
use shared::models::{Arrival, ArrivalData};
use validator::Validate;

use super::SubmitOutcome;

/// Create or edit one arrival entry: model, body, year and the cover.
#[derive(Debug, Clone, Validate)]
pub struct ArrivalForm {
    /// Edit target; `None` means create.
    id: Option<i64>,
    #[validate(length(min = 1))]
    pub model: String,
    #[validate(length(min = 1))]
    pub body: String,
    #[validate(length(min = 1))]
    pub year: String,
    #[validate(required)]
    pub cover: Option<ImageFile>,
    stored_cover_path: Option<String>,
}

impl ArrivalForm {
    pub fn new() -> Self {
        Self {
            id: None,
            model: String::new(),
            body: String::new(),
            year: String::new(),
            cover: None,
            stored_cover_path: None,
        }
    }

    pub fn edit(arrival: &Arrival) -> Self {
        Self {
            id: Some(arrival.id),
            model: arrival.model.clone(),
            body: arrival.body.clone(),
            year: arrival.year.clone(),
            cover: None,
            stored_cover_path: arrival.image_url.clone(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Pull the stored cover back into the picker so it re-submits unless
    /// replaced. Failure logs and leaves the slot empty.
    pub async fn hydrate_images(&mut self, assets: &AssetClient) {
        let Some(path) = self.stored_cover_path.clone() else {
            return;
        };
        match assets.fetch(&path).await {
            Ok(Some(file)) => self.cover = Some(file),
            Ok(None) => {}
            Err(e) => tracing::error!(error = %e, path, "failed to rehydrate stored image"),
        }
    }

    fn data(&self) -> ArrivalData {
        ArrivalData {
            model: self.model.clone(),
            body: self.body.clone(),
            year: self.year.clone(),
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
            Some(id) => api.update_arrival(id, &data, cover).await,
            None => api.create_arrival(&data, cover).await,
        };
        match result {
            Ok(_) => SubmitOutcome::Saved,
            Err(e) => {
                tracing::error!(error = %e, "failed to save arrival");
                SubmitOutcome::Failed
            }
        }
    }
}

impl Default for ArrivalForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fields_required() {
        let mut form = ArrivalForm::new();
        form.model = "E39".to_string();
        form.body = "sedan".to_string();
        assert!(form.validate().is_err());

        form.year = "1999".to_string();
        assert!(form.validate().is_err());

        form.cover = Some(ImageFile::new("e39.jpg", "image/jpeg", vec![1]));
        assert!(form.validate().is_ok());
    }
}
