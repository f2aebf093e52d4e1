//! Auth API DTOs shared between the client and the admin API.

use serde::{Deserialize, Serialize};

/// Login request (`POST /user/login`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub mail: String,
    pub password: String,
}

/// Token payload returned by both the session probe (`GET /user/auth`)
/// and a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}
