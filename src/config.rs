use crate::store::FilePreferenceStore;
use crate::toggler::FALLBACK_HOST;
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Preference storage
    pub storage_path: PathBuf,

    // Host shown when no navigation context is available
    pub fallback_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Preference storage - defaults to the platform data directory
            storage_path: match std::env::var("LANG_TOGGLE_STORAGE_PATH") {
                Ok(path) => PathBuf::from(path),
                Err(_) => FilePreferenceStore::default_path()
                    .context("no user data directory; set LANG_TOGGLE_STORAGE_PATH")?,
            },

            // Fallback host
            fallback_host: std::env::var("LANG_TOGGLE_FALLBACK_HOST")
                .unwrap_or_else(|_| FALLBACK_HOST.to_string()),
        })
    }
}
