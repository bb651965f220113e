use serde::{Deserialize, Serialize};

#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

pub const DEFAULT_API_URL: &str = "http://localhost:3333";
#[cfg(not(target_arch = "wasm32"))]
const API_URL_ENV: &str = "PODCASTR_API_URL";

#[cfg(target_arch = "wasm32")]
const SETTINGS_KEY: &str = "podcastr.app_settings";

/// Error type for settings persistence
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[cfg(not(target_arch = "wasm32"))]
    #[error("settings file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(target_arch = "wasm32")]
    #[error("local storage failed: {0}")]
    Storage(String),
}

/// App settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
        }
    }
}

impl AppSettings {
    fn with_overrides(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|url| !url.trim().is_empty()) {
            self.api_url = url.trim().to_string();
        }
        self
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn env_api_url() -> Option<String> {
    std::env::var(API_URL_ENV).ok()
}

// The browser has no process environment; take the value baked in at build time.
#[cfg(target_arch = "wasm32")]
fn env_api_url() -> Option<String> {
    option_env!("PODCASTR_API_URL").map(str::to_string)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("podcastr").join("settings.json"))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_settings_from(path: &Path) -> Result<Option<AppSettings>, SettingsError> {
    match std::fs::read_to_string(path) {
        Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_settings_to(path: &Path, settings: &AppSettings) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(settings)?)?;
    Ok(())
}

/// Load settings from the config directory, writing defaults on first run.
/// Failures fall back to defaults; the environment override always wins.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_settings() -> AppSettings {
    let stored = match settings_path() {
        Some(path) => match load_settings_from(&path) {
            Ok(Some(settings)) => settings,
            Ok(None) => {
                let defaults = AppSettings::default();
                if let Err(err) = save_settings_to(&path, &defaults) {
                    tracing::warn!(path = %path.display(), "could not write default settings: {err}");
                }
                defaults
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), "ignoring unreadable settings: {err}");
                AppSettings::default()
            }
        },
        None => AppSettings::default(),
    };
    stored.with_overrides(env_api_url())
}

#[cfg(target_arch = "wasm32")]
pub fn load_settings() -> AppSettings {
    let stored = match LocalStorage::get::<AppSettings>(SETTINGS_KEY) {
        Ok(settings) => settings,
        Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => {
            let defaults = AppSettings::default();
            if let Err(err) = save_settings(&defaults) {
                tracing::warn!("could not store default settings: {err}");
            }
            defaults
        }
        Err(err) => {
            tracing::warn!("ignoring unreadable settings: {err}");
            AppSettings::default()
        }
    };
    stored.with_overrides(env_api_url())
}

#[cfg(target_arch = "wasm32")]
pub fn save_settings(settings: &AppSettings) -> Result<(), SettingsError> {
    LocalStorage::set(SETTINGS_KEY, settings).map_err(|e| SettingsError::Storage(e.to_string()))
}
