//! Bearer-token storage.
//!
//! The admin session is one opaque token string. [`TokenStore`] persists it
//! on disk between runs; [`SharedToken`] is the in-process handle the HTTP
//! client reads on every outbound request, so a login mid-session is picked
//! up by the next call without rebuilding anything.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Process-wide bearer token, read per request and written on
/// login/logout.
#[derive(Debug, Clone, Default)]
pub struct SharedToken(Arc<RwLock<Option<String>>>);

impl SharedToken {
    pub fn new(initial: Option<String>) -> Self {
        Self(Arc::new(RwLock::new(initial)))
    }

    /// Current token, if any.
    pub fn get(&self) -> Option<String> {
        self.0
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Replace the token (`None` clears it).
    pub fn set(&self, token: Option<String>) {
        *self
            .0
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = token;
    }

    pub fn is_present(&self) -> bool {
        self.get().is_some()
    }
}

/// Persisted token storage: one token string in a file under the
/// application data directory.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Create a token store rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        let path = base_dir.into().join("token");
        Self { path }
    }

    /// Load the persisted token, if present and non-empty.
    pub fn load(&self) -> Option<String> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let token = raw.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    /// Persist the token, creating the parent directory if needed.
    pub fn save(&self, token: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)?;
        tracing::debug!(path = %self.path.display(), "session token persisted");
        Ok(())
    }

    /// Remove the persisted token.
    pub fn clear(&self) -> std::io::Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            tracing::debug!(path = %self.path.display(), "session token removed");
        }
        Ok(())
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_token_store_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = TokenStore::new(dir.path().join("auth"));

        assert!(store.load().is_none());
        store.save("secret-token").unwrap();
        assert!(store.exists());
        assert_eq!(store.load().as_deref(), Some("secret-token"));

        store.clear().unwrap();
        assert!(!store.exists());
        assert!(store.load().is_none());
    }

    #[test]
    fn test_blank_file_counts_as_no_token() {
        let dir = TempDir::new().unwrap();
        let store = TokenStore::new(dir.path());
        store.save("  \n").unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_shared_token_set_get() {
        let token = SharedToken::default();
        assert!(!token.is_present());

        token.set(Some("abc".to_string()));
        assert_eq!(token.get().as_deref(), Some("abc"));

        let alias = token.clone();
        alias.set(None);
        assert!(!token.is_present());
    }
}
