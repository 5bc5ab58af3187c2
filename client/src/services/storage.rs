//! # Session Storage
//!
//! JSON file-backed key/value store for the session (token, refresh token,
//! cached user) and UI preferences (theme, language). Each value lives under
//! its own key so partial updates never clobber unrelated entries.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::UserInfo;

use crate::core::error::AppError;

pub const KEY_TOKEN: &str = "dunab_token";
pub const KEY_REFRESH_TOKEN: &str = "dunab_refresh_token";
pub const KEY_USER: &str = "dunab_user";
pub const KEY_THEME: &str = "dunab_theme";
pub const KEY_LANGUAGE: &str = "dunab_language";

/// Default store file path
pub fn default_store_path() -> PathBuf {
    PathBuf::from("./dunab-session.json")
}

/// The authenticated session as persisted between runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: String,
    pub refresh_token: Option<String>,
    pub user: UserInfo,
}

/// File-backed key/value store.
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    entries: BTreeMap<String, Value>,
}

impl SessionStore {
    /// Open the store at the default path, loading existing entries.
    pub fn open() -> Self {
        Self::open_at(default_store_path())
    }

    /// Open the store at a specific path. A missing file is an empty store;
    /// a corrupt file is logged and treated as empty rather than erroring.
    pub fn open_at(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match Self::read_entries(&path) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Failed to load session store from {:?}: {}. Starting empty.", path, e);
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    fn read_entries(path: &Path) -> Result<BTreeMap<String, Value>, AppError> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Storage(e.to_string()))?;
        let entries = serde_json::from_str(&content)
            .map_err(|e| AppError::Storage(e.to_string()))?;
        Ok(entries)
    }

    fn write_entries(&self) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AppError::Storage(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| AppError::Storage(e.to_string()))?;
        std::fs::write(&self.path, content).map_err(|e| AppError::Storage(e.to_string()))?;
        Ok(())
    }

    /// Read a typed value. Missing or mistyped entries come back as `None`.
    pub fn get<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.entries
            .get(key)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    /// Write a value under a key and persist the whole store.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), AppError> {
        let value = serde_json::to_value(value).map_err(|e| AppError::Storage(e.to_string()))?;
        self.entries.insert(key.to_string(), value);
        self.write_entries()
    }

    /// Remove a key and persist. Removing an absent key is a no-op.
    pub fn remove(&mut self, key: &str) -> Result<(), AppError> {
        if self.entries.remove(key).is_some() {
            self.write_entries()?;
        }
        Ok(())
    }

    /// Persist the full session after login or token refresh.
    pub fn save_session(&mut self, session: &StoredSession) -> Result<(), AppError> {
        self.set(KEY_TOKEN, &session.token)?;
        match &session.refresh_token {
            Some(refresh) => self.set(KEY_REFRESH_TOKEN, refresh)?,
            None => self.remove(KEY_REFRESH_TOKEN)?,
        }
        self.set(KEY_USER, &session.user)?;
        tracing::info!("Session persisted to {:?}", self.path);
        Ok(())
    }

    /// Restore a previously saved session, if the token and user both exist.
    pub fn load_session(&self) -> Option<StoredSession> {
        let token: String = self.get(KEY_TOKEN)?;
        let user: UserInfo = self.get(KEY_USER)?;
        let refresh_token: Option<String> = self.get(KEY_REFRESH_TOKEN);
        Some(StoredSession {
            token,
            refresh_token,
            user,
        })
    }

    /// Drop all session keys (logout). Preferences survive.
    pub fn clear_session(&mut self) -> Result<(), AppError> {
        self.entries.remove(KEY_TOKEN);
        self.entries.remove(KEY_REFRESH_TOKEN);
        self.entries.remove(KEY_USER);
        self.write_entries()
    }

    pub fn theme(&self) -> Option<String> {
        self.get(KEY_THEME)
    }

    pub fn set_theme(&mut self, theme: &str) -> Result<(), AppError> {
        self.set(KEY_THEME, &theme)
    }

    pub fn language(&self) -> Option<String> {
        self.get(KEY_LANGUAGE)
    }

    pub fn set_language(&mut self, language: &str) -> Result<(), AppError> {
        self.set(KEY_LANGUAGE, &language)
    }
}
