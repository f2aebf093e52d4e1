//! Derived slug ("link") field.
//!
//! The link recomputes from the name on every name edit until the user
//! edits it by hand; after that the manual value wins and no name edit
//! re-syncs it. Edit-mode forms start from a stored slug and treat it as
//! already curated.

use shared::util::slugify;
use validator::ValidationError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlugField {
    value: String,
    touched: bool,
}

impl SlugField {
    /// Create-mode field: empty and tracking the name.
    pub fn auto() -> Self {
        Self::default()
    }

    /// Edit-mode field: pre-populated and never recomputed.
    pub fn edited(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            touched: true,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// The name changed; recompute unless the user took over.
    pub fn on_name_change(&mut self, name: &str) {
        if !self.touched {
            self.value = slugify(name);
        }
    }

    /// The user edited the link directly. Last keystroke wins, no re-sync.
    pub fn set_manual(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.touched = true;
    }
}

pub(crate) fn validate_required(slug: &SlugField) -> Result<(), ValidationError> {
    if slug.value.is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_mode_tracks_name() {
        let mut link = SlugField::auto();
        link.on_name_change("Тормозные колодки");
        assert_eq!(link.value(), "tormoznye-kolodki");

        link.on_name_change("Новинки");
        assert_eq!(link.value(), "novinki");
    }

    #[test]
    fn test_manual_edit_stops_recompute() {
        let mut link = SlugField::auto();
        link.on_name_change("Новинки");
        link.set_manual("custom-slug");

        link.on_name_change("Другое название");
        assert_eq!(link.value(), "custom-slug");
    }

    #[test]
    fn test_edit_mode_never_recomputes() {
        let mut link = SlugField::edited("kuraciya-ruchnaya");
        link.on_name_change("Совсем новое имя");
        assert_eq!(link.value(), "kuraciya-ruchnaya");
    }

    #[test]
    fn test_validate_required() {
        assert!(validate_required(&SlugField::auto()).is_err());
        assert!(validate_required(&SlugField::edited("novinki")).is_ok());
    }
}
