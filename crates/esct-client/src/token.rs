// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! [`AuthTokenStore`] implementations.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use esct_core::{AuthTokenStore, EsctError};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

/// In-process token store. Nothing survives the process.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<SecretString>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with a token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(SecretString::from(token.into()))),
        }
    }
}

impl std::fmt::Debug for MemoryTokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryTokenStore")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl AuthTokenStore for MemoryTokenStore {
    fn get(&self) -> Result<Option<SecretString>, EsctError> {
        let guard = self.token.read().map_err(|_| poisoned())?;
        Ok(guard
            .as_ref()
            .map(|t| SecretString::from(t.expose_secret().to_string())))
    }

    fn set(&self, token: SecretString) -> Result<(), EsctError> {
        *self.token.write().map_err(|_| poisoned())? = Some(token);
        Ok(())
    }

    fn clear(&self) -> Result<(), EsctError> {
        *self.token.write().map_err(|_| poisoned())? = None;
        Ok(())
    }
}

fn poisoned() -> EsctError {
    EsctError::TokenStore {
        message: "token lock poisoned".into(),
        source: None,
    }
}

/// Token persisted to a single file, readable only by the owner on unix.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, action: &str, e: std::io::Error) -> EsctError {
        EsctError::TokenStore {
            message: format!("failed to {action} {}: {e}", self.path.display()),
            source: Some(Box::new(e)),
        }
    }
}

impl AuthTokenStore for FileTokenStore {
    fn get(&self) -> Result<Option<SecretString>, EsctError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => {
                let token = content.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(SecretString::from(token.to_string())))
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.io_error("read", e)),
        }
    }

    fn set(&self, token: SecretString) -> Result<(), EsctError> {
        use std::io::Write;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error("create directory for", e))?;
        }

        let mut options = std::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options
            .open(&self.path)
            .map_err(|e| self.io_error("open", e))?;
        // `mode` only applies on creation; tighten a pre-existing file too.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(std::fs::Permissions::from_mode(0o600))
                .map_err(|e| self.io_error("restrict permissions on", e))?;
        }
        file.write_all(token.expose_secret().as_bytes())
            .map_err(|e| self.io_error("write", e))?;
        debug!(path = %self.path.display(), "token saved");
        Ok(())
    }

    fn clear(&self) -> Result<(), EsctError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "token removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error("remove", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exposed(store: &dyn AuthTokenStore) -> Option<String> {
        store
            .get()
            .unwrap()
            .map(|t| t.expose_secret().to_string())
    }

    #[test]
    fn memory_store_set_get_clear() {
        let store = MemoryTokenStore::new();
        assert_eq!(exposed(&store), None);
        store.set(SecretString::from("abc".to_string())).unwrap();
        assert_eq!(exposed(&store), Some("abc".into()));
        store.clear().unwrap();
        assert_eq!(exposed(&store), None);
        store.clear().unwrap();
    }

    #[test]
    fn memory_store_debug_redacts() {
        let store = MemoryTokenStore::with_token("super-secret");
        assert!(!format!("{store:?}").contains("super-secret"));
    }

    #[test]
    fn file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("token");

        let store = FileTokenStore::new(&path);
        assert_eq!(exposed(&store), None);
        store.set(SecretString::from("tok-1".to_string())).unwrap();

        let reopened = FileTokenStore::new(&path);
        assert_eq!(exposed(&reopened), Some("tok-1".into()));

        reopened.clear().unwrap();
        assert_eq!(exposed(&store), None);
        store.clear().unwrap();
    }

    #[test]
    fn file_store_treats_blank_file_as_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        std::fs::write(&path, "  \n").unwrap();
        assert_eq!(exposed(&FileTokenStore::new(path)), None);
    }

    #[cfg(unix)]
    #[test]
    fn file_store_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        FileTokenStore::new(&path)
            .set(SecretString::from("t".to_string()))
            .unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[cfg(unix)]
    #[test]
    fn file_store_tightens_existing_world_readable_file() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        std::fs::write(&path, "old").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

        let store = FileTokenStore::new(&path);
        store.set(SecretString::from("new".to_string())).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(exposed(&store).as_deref(), Some("new"));
    }
}
