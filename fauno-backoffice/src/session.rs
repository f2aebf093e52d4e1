//! Admin session.
//!
//! An explicit session object passed into whatever owns the tab
//! controllers; nothing reads auth state ambiently. The bearer token lives
//! in the client's [`SharedToken`] (read on every outbound request) and is
//! persisted through [`TokenStore`] so a restart resumes the session.

use fauno_client::{ClientError, HttpClient, TokenStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Probe not finished yet; the shell shows a loader.
    Unknown,
    Authenticated,
    /// Probe failed or the token was rejected; the shell shows the login
    /// screen.
    Unauthenticated,
}

pub struct Session {
    api: HttpClient,
    store: TokenStore,
    state: SessionState,
}

impl Session {
    /// Build a session over the given client, seeding the shared token
    /// from persisted storage.
    pub fn new(api: HttpClient, store: TokenStore) -> Self {
        api.token().set(store.load());
        Self {
            api,
            store,
            state: SessionState::Unknown,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state == SessionState::Authenticated
    }

    /// Probe `GET /user/auth`. Success stores the refreshed token; a 401
    /// or transport failure flips to unauthenticated.
    pub async fn probe(&mut self) -> SessionState {
        match self.api.auth_probe().await {
            Ok(response) => {
                if let Err(e) = self.store.save(&response.token) {
                    tracing::warn!(error = %e, "failed to persist session token");
                }
                self.api.token().set(Some(response.token));
                self.state = SessionState::Authenticated;
            }
            Err(ClientError::Unauthorized) => {
                self.state = SessionState::Unauthenticated;
            }
            Err(e) => {
                tracing::error!(error = %e, "session probe failed");
                self.state = SessionState::Unauthenticated;
            }
        }
        self.state
    }

    /// Login with mail and password. Blank input is a no-op; a successful
    /// login persists the token and re-probes, matching the boot path.
    pub async fn login(&mut self, mail: &str, password: &str) -> bool {
        if mail.is_empty() || password.is_empty() {
            return false;
        }
        match self.api.login(mail, password).await {
            Ok(response) => {
                if let Err(e) = self.store.save(&response.token) {
                    tracing::warn!(error = %e, "failed to persist session token");
                }
                self.api.token().set(Some(response.token));
                self.probe().await == SessionState::Authenticated
            }
            Err(e) => {
                tracing::error!(error = %e, "login failed");
                false
            }
        }
    }

    /// Drop the token from memory and storage.
    pub fn logout(&mut self) {
        self.api.token().set(None);
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "failed to clear persisted token");
        }
        self.state = SessionState::Unauthenticated;
    }
}
