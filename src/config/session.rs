//! Persisted sign-in session.
//!
//! The backend hands the client an opaque bearer token at login; this
//! module keeps it across restarts in a file under the user config
//! directory. A missing or unreadable file simply means "not signed in" —
//! startup never fails because of session state.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::api::BearerToken;

/// Errors that can occur when persisting the session.
///
/// Only writes report errors; reads degrade to a signed-out session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to write session file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove session file '{path}': {source}")]
    RemoveError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// File-backed session token store.
pub struct Session {
    path: PathBuf,
}

impl Session {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default location, next to the config file.
    pub fn default_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("taskdeck").join("session")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored token, if any.
    ///
    /// An absent file, an unreadable file, or an empty file all mean no
    /// session.
    pub fn load(&self) -> Option<BearerToken> {
        let content = fs::read_to_string(&self.path).ok()?;
        let token = content.trim();
        if token.is_empty() {
            return None;
        }
        Some(BearerToken::new(token.to_string()))
    }

    /// Persist a token, creating parent directories as needed.
    pub fn save(&self, token: &BearerToken) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SessionError::WriteError {
                path: self.path.clone(),
                source: e,
            })?;
        }
        fs::write(&self.path, token.expose()).map_err(|e| SessionError::WriteError {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Remove the stored token. Removing an absent file is not an error.
    pub fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::RemoveError {
                path: self.path.clone(),
                source: e,
            }),
        }
    }
}
