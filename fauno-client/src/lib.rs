//! Fauno Client - HTTP client for the admin API
//!
//! Typed network calls for every back-office resource, bearer-token
//! attachment on each request, persisted token storage and asset-host
//! image retrieval.

pub mod api;
pub mod assets;
pub mod config;
pub mod error;
pub mod http;
pub mod token;

pub use assets::{AssetClient, ImageFile};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use token::{SharedToken, TokenStore};

// Re-export shared types for convenience
pub use shared::client::{LoginRequest, TokenResponse};
pub use shared::{ListPage, ListQuery};
