//! Auth API

use crate::{ClientResult, HttpClient};
use shared::client::{LoginRequest, TokenResponse};

impl HttpClient {
    /// Session probe. A 401 maps to `ClientError::Unauthorized`.
    pub async fn auth_probe(&self) -> ClientResult<TokenResponse> {
        self.get("user/auth").await
    }

    /// Login with mail and password, returning a fresh token. The caller
    /// decides where the token is stored.
    pub async fn login(&self, mail: &str, password: &str) -> ClientResult<TokenResponse> {
        let request = LoginRequest {
            mail: mail.to_string(),
            password: password.to_string(),
        };
        self.post("user/login", &request).await
    }
}
