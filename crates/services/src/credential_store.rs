//! Persisted Gemini API key.
//!
//! The key lives in the app's `settings.json` next to the model settings.
//! Readers observe it through a watch channel; blank values read as absent.

use anyhow::{Context, Result};
use parking_lot::Mutex;
use shared::settings::AppSettings;
use std::fs;
use std::path::{Path, PathBuf};
use tokio::sync::watch;
use tracing::{info, warn};

/// Environment variable consulted when no key has been saved
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("could not determine a configuration directory for this platform")]
    NoConfigDir,
}

/// Default location of `settings.json` for this platform.
pub fn default_settings_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "AI Tools", "AITools")
        .map(|proj| proj.config_dir().join("settings.json"))
}

fn read_settings(path: &Path) -> Option<AppSettings> {
    let bytes = fs::read(path).ok()?;
    match serde_json::from_slice::<AppSettings>(&bytes) {
        Ok(settings) => Some(settings),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring unreadable settings file");
            None
        }
    }
}

fn write_settings(path: &Path, settings: &AppSettings) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Single process-wide holder of the user's API key.
pub struct CredentialStore {
    path: PathBuf,
    settings: Mutex<AppSettings>,
    tx: watch::Sender<Option<String>>,
}

impl CredentialStore {
    /// Open the store at the platform default location.
    pub fn open_default() -> Result<Self, CredentialError> {
        let path = default_settings_path().ok_or(CredentialError::NoConfigDir)?;
        Ok(Self::open(path))
    }

    /// Open the store at `path`, falling back to `GEMINI_API_KEY` when
    /// nothing has been saved.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::open_with_fallback(path, std::env::var(API_KEY_ENV).ok())
    }

    /// Open the store at `path` with an explicit fallback key.
    pub fn open_with_fallback(path: impl Into<PathBuf>, fallback: Option<String>) -> Self {
        let path = path.into();
        let settings = read_settings(&path).unwrap_or_default();
        let initial = non_blank(settings.credential()).or_else(|| non_blank(fallback.as_deref()));
        let (tx, _) = watch::channel(initial);
        Self {
            path,
            settings: Mutex::new(settings),
            tx,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshot of the full settings, including model configuration.
    pub fn settings(&self) -> AppSettings {
        self.settings.lock().clone()
    }

    /// The current key, if any.
    pub fn current(&self) -> Option<String> {
        self.tx.borrow().clone()
    }

    /// Observe the key. The receiver sees the current value immediately and
    /// every later save.
    pub fn observe(&self) -> watch::Receiver<Option<String>> {
        self.tx.subscribe()
    }

    /// Persist a new key. Blank values are ignored and write failures are
    /// logged; observers are still updated for the running process.
    pub fn save(&self, value: &str) {
        let Some(key) = non_blank(Some(value)) else {
            return;
        };

        {
            let mut settings = self.settings.lock();
            settings.gemini_api_key = Some(key.clone());
            if let Err(e) = write_settings(&self.path, &settings) {
                warn!(error = %e, "failed to persist api key");
            } else {
                info!(path = %self.path.display(), "saved api key");
            }
        }

        self.tx.send_replace(Some(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_store_has_no_credential() {
        let dir = TempDir::new().unwrap();
        let store = CredentialStore::open_with_fallback(dir.path().join("settings.json"), None);
        assert_eq!(store.current(), None);
        assert_eq!(*store.observe().borrow(), None);
    }

    #[test]
    fn test_save_persists_and_notifies() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let store = CredentialStore::open_with_fallback(&path, None);
        let mut rx = store.observe();

        store.save("  secret-key  ");

        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().as_deref(), Some("secret-key"));
        assert_eq!(store.current().as_deref(), Some("secret-key"));

        let reopened = CredentialStore::open_with_fallback(&path, None);
        assert_eq!(reopened.current().as_deref(), Some("secret-key"));
    }

    #[test]
    fn test_blank_save_is_ignored() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        let store = CredentialStore::open_with_fallback(&path, None);
        store.save("first");
        let rx = store.observe();

        store.save("   ");

        assert!(!rx.has_changed().unwrap());
        assert_eq!(store.current().as_deref(), Some("first"));
    }

    #[test]
    fn test_fallback_used_only_when_nothing_saved() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");

        let store = CredentialStore::open_with_fallback(&path, Some("from-env".into()));
        assert_eq!(store.current().as_deref(), Some("from-env"));

        store.save("saved");
        let reopened = CredentialStore::open_with_fallback(&path, Some("from-env".into()));
        assert_eq!(reopened.current().as_deref(), Some("saved"));
    }

    #[test]
    fn test_corrupt_settings_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json").unwrap();

        let store = CredentialStore::open_with_fallback(&path, None);
        assert_eq!(store.current(), None);
        assert_eq!(store.settings(), AppSettings::default());
    }
}
