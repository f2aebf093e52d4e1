//! Entity form models.
//!
//! Each form collects field edits for one entity, validates the required
//! fields, assembles the JSON or multipart payload and submits create
//! (POST) or update (PUT keyed by `id`). Submit on an invalid form is a
//! no-op: no request is constructed or sent. On failure the form logs and
//! stays unchanged, so the modal remains open with the user's input.

use rust_decimal::Decimal;
use validator::ValidationError;

pub mod arrival;
pub mod category;
pub mod order;
pub mod product;
pub mod slug_field;

pub use arrival::ArrivalForm;
pub use category::CategoryForm;
pub use order::OrderForm;
pub use product::ProductForm;
pub use slug_field::SlugField;

/// What came of a submit attempt. `Saved` is the cue for the owner to
/// refresh its list and close the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The server accepted the payload.
    Saved,
    /// A required field is missing; nothing was sent.
    Invalid,
    /// The request failed; the form stays open and unchanged.
    Failed,
}

impl SubmitOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SubmitOutcome::Saved)
    }
}

/// Money fields are edited as text; they must be non-blank and parse as a
/// decimal before a payload is built from them.
pub(crate) fn validate_required_decimal(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    value
        .trim()
        .parse::<Decimal>()
        .map(|_| ())
        .map_err(|_| ValidationError::new("not_a_number"))
}
