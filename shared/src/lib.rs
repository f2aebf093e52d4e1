//! Shared types for the Fauno back-office
//!
//! Common types used by the API client and the tab controllers: entity
//! models, auth DTOs, list-query parameters, response normalization and
//! small utilities.

pub mod client;
pub mod models;
pub mod request;
pub mod response;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use request::ListQuery;
pub use response::{ListPage, NormalizeError, Pagination, normalize_list};
