//! Client configuration

use crate::token::SharedToken;

/// Production admin API base URL, used when the environment provides none.
pub const DEFAULT_API_URL: &str = "https://api.carismamp.com/api/admin";

/// Default asset host serving uploaded images.
pub const DEFAULT_ASSET_URL: &str = "https://s3.carismamp.com";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "FAUNO_API_URL";

/// Environment variable overriding the asset host.
pub const ASSET_URL_ENV: &str = "FAUNO_ASSET_URL";

/// Configuration for connecting to the admin API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g. "https://api.carismamp.com/api/admin")
    pub api_url: String,

    /// Asset host base URL for image previews and edit-mode rehydration
    pub asset_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new configuration with the default asset host and timeout.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            asset_url: DEFAULT_ASSET_URL.to_string(),
            timeout: 30,
        }
    }

    /// Read the configuration from the environment (`.env` aware).
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        let api_url =
            std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let asset_url =
            std::env::var(ASSET_URL_ENV).unwrap_or_else(|_| DEFAULT_ASSET_URL.to_string());
        Self::new(api_url).with_asset_url(asset_url)
    }

    /// Set the asset host base URL.
    pub fn with_asset_url(mut self, asset_url: impl Into<String>) -> Self {
        self.asset_url = asset_url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client reading the given token on every request.
    pub fn build_http_client(&self, token: SharedToken) -> super::HttpClient {
        super::HttpClient::new(self, token)
    }

    /// Create an asset client for image retrieval.
    pub fn build_asset_client(&self) -> super::AssetClient {
        super::AssetClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
