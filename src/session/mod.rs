//! Bearer token persistence and the session context passed to API calls.
//!
//! The token is an opaque string stored exactly as the server issued it.
//! There is no expiry tracking: a stored token counts as a session until the
//! server rejects it.

use parking_lot::RwLock;
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use crate::client::ClientError;

/// Fixed storage key (and file name) for the bearer token.
pub const TOKEN_KEY: &str = "authToken";

/// Storage backend for the bearer token.
pub trait TokenStore: Send + Sync {
    fn get(&self) -> Result<Option<String>, ClientError>;
    fn set(&self, token: &str) -> Result<(), ClientError>;
    /// Remove the token. Clearing an absent token succeeds.
    fn clear(&self) -> Result<(), ClientError>;
}

/// Token persisted as a single file named [`TOKEN_KEY`] inside a data
/// directory. Every process pointed at the same directory shares it.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(TOKEN_KEY),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Result<Option<String>, ClientError> {
        match std::fs::read_to_string(&self.path) {
            // Editors and `echo` leave a line ending behind.
            Ok(token) => {
                let token = token.trim_end_matches(['\r', '\n']);
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token.to_string()))
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, token: &str) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))?;
        }

        debug!(path = %self.path.display(), "Stored auth token");
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "Removed auth token");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process token store. Used for one-shot tokens and in tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Result<Option<String>, ClientError> {
        Ok(self.token.read().clone())
    }

    fn set(&self, token: &str) -> Result<(), ClientError> {
        *self.token.write() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        *self.token.write() = None;
        Ok(())
    }
}

/// Session context shared by the gateway and the auth helper.
///
/// Cloning is cheap; all clones see the same store.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// Session backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryTokenStore::new()))
    }

    pub fn token(&self) -> Result<Option<String>, ClientError> {
        self.store.get()
    }

    pub fn set_token(&self, token: &str) -> Result<(), ClientError> {
        self.store.set(token)
    }

    pub fn clear(&self) -> Result<(), ClientError> {
        self.store.clear()
    }

    /// Presence check only. A stale token still reports `true`.
    pub fn is_authenticated(&self) -> bool {
        matches!(self.store.get(), Ok(Some(_)))
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.get().unwrap(), None);

        store.set("abc.def.ghi").unwrap();
        assert_eq!(store.get().unwrap().as_deref(), Some("abc.def.ghi"));

        store.clear().unwrap();
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let first = FileTokenStore::new(dir.path());
        first.set("token-123").unwrap();

        let second = FileTokenStore::new(dir.path());
        assert_eq!(second.get().unwrap().as_deref(), Some("token-123"));
        assert_eq!(second.path(), dir.path().join("authToken"));
    }

    #[test]
    fn test_file_store_ignores_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path());

        std::fs::write(store.path(), "tok-abc\n").unwrap();
        assert_eq!(store.get().unwrap().as_deref(), Some("tok-abc"));

        std::fs::write(store.path(), "tok-abc\r\n").unwrap();
        assert_eq!(store.get().unwrap().as_deref(), Some("tok-abc"));

        std::fs::write(store.path(), "\n").unwrap();
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn test_file_store_creates_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested").join("data");
        let store = FileTokenStore::new(&nested);

        store.set("t").unwrap();
        assert!(nested.join(TOKEN_KEY).exists());
    }

    #[test]
    fn test_file_store_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path());

        store.clear().unwrap();
        store.set("t").unwrap();
        store.clear().unwrap();
        store.clear().unwrap();
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn test_session_is_authenticated_is_presence_check() {
        let session = Session::new(Arc::new(MemoryTokenStore::with_token("expired")));
        assert!(session.is_authenticated());

        session.clear().unwrap();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_session_clones_share_store() {
        let session = Session::in_memory();
        let other = session.clone();
        session.set_token("shared").unwrap();
        assert_eq!(other.token().unwrap().as_deref(), Some("shared"));
    }
}
