//! Asset-host retrieval.
//!
//! Stored entities reference images by path relative to the asset host.
//! For edit-mode forms the original bytes are pulled back down and wrapped
//! as an [`ImageFile`] so the attachment re-submits unless the admin
//! replaces it.

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::Client;
use reqwest::multipart::Part;

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// An in-memory image attachment: what a file picker would hold.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Convert into a multipart part carrying the file name and MIME type.
    pub fn into_part(self) -> ClientResult<Part> {
        let part = Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&self.content_type)?;
        Ok(part)
    }
}

/// Client for the static asset host.
#[derive(Debug, Clone)]
pub struct AssetClient {
    client: Client,
    base_url: String,
}

impl AssetClient {
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.asset_url.trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL for a stored asset path; empty input stays empty.
    pub fn resolve(&self, path: &str) -> String {
        if path.is_empty() {
            return String::new();
        }
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Download a stored asset and rebuild the picker file: name taken from
    /// the stored path, MIME type from the response. An empty path yields
    /// `None` (nothing was ever uploaded).
    pub async fn fetch(&self, path: &str) -> ClientResult<Option<ImageFile>> {
        if path.is_empty() {
            return Ok(None);
        }

        let url = self.resolve(path);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::NotFound(url));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or(FALLBACK_CONTENT_TYPE)
            .to_string();
        let file_name = file_name_from_path(path);
        let bytes = response.bytes().await?.to_vec();

        Ok(Some(ImageFile::new(file_name, content_type, bytes)))
    }
}

/// Stored paths look like `covers/1699-a.jpg`; the segment after the first
/// slash is the original upload name.
fn file_name_from_path(path: &str) -> String {
    path.split('/').nth(1).unwrap_or(path).to_string()
}
