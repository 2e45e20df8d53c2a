//! Preference persistence: one durable key holding the language code.
//!
//! The store is injectable so the component can be exercised in tests
//! without touching the filesystem. Failures are typed but never cross the
//! component boundary; the toggler degrades to the default (read) or the
//! last-known-in-memory value (write).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

/// Directory name under the user data directory holding the preference file.
const APP_DIR: &str = "lang-toggle";

/// File name of the single preference key.
const PREFERENCE_FILE: &str = "language";

/// Errors a preference store can report.
///
/// Callers inside the component log these and degrade; they are public so
/// store implementations outside the crate can produce them too.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing storage cannot be used at all.
    #[error("preference storage unavailable: {0}")]
    Unavailable(String),

    /// Reading the persisted value failed.
    #[error("failed to read preference")]
    Read(#[source] io::Error),

    /// Writing the value failed.
    #[error("failed to write preference")]
    Write(#[source] io::Error),
}

/// Durable key-value access to the single persisted language preference.
///
/// `get` returns `Ok(None)` when no preference has ever been stored; the
/// value is an opaque code string with no versioning, and writes are
/// last-write-wins.
pub trait PreferenceStore {
    /// Read the persisted language code, if any.
    fn get(&self) -> Result<Option<String>, StoreError>;

    /// Persist a language code, replacing any previous value.
    fn set(&self, code: &str) -> Result<(), StoreError>;
}

/// File-backed preference store: one small file holding the code string.
///
/// The default location is `lang-toggle/language` under the platform's
/// local data directory. No expiry and no migration; the value space never
/// changes shape.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The platform-default preference file location, if one exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|dir| dir.join(APP_DIR).join(PREFERENCE_FILE))
    }

    /// Create a store at the platform-default location.
    ///
    /// # Returns
    /// * `Err(StoreError::Unavailable)` when the platform reports no data
    ///   directory.
    pub fn at_default_path() -> Result<Self, StoreError> {
        Self::default_path()
            .map(Self::new)
            .ok_or_else(|| StoreError::Unavailable("no user data directory".to_string()))
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let code = raw.trim();
                if code.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(code.to_string()))
                }
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::Read(err)),
        }
    }

    fn set(&self, code: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(StoreError::Write)?;
        }
        fs::write(&self.path, code).map_err(StoreError::Write)
    }
}

/// In-memory preference store for tests and previews.
///
/// Nothing is persisted. The `failing` constructor yields a store whose
/// every call errors, for exercising the degradation paths.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    value: Mutex<Option<String>>,
    fail: bool,
}

impl MemoryPreferenceStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with a persisted code.
    pub fn with_value(code: impl Into<String>) -> Self {
        Self {
            value: Mutex::new(Some(code.into())),
            fail: false,
        }
    }

    /// Create a store that fails every read and write.
    pub fn failing() -> Self {
        Self {
            value: Mutex::new(None),
            fail: true,
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self) -> Result<Option<String>, StoreError> {
        if self.fail {
            return Err(StoreError::Unavailable("simulated failure".to_string()));
        }
        Ok(self.value.lock().expect("store lock poisoned").clone())
    }

    fn set(&self, code: &str) -> Result<(), StoreError> {
        if self.fail {
            return Err(StoreError::Unavailable("simulated failure".to_string()));
        }
        *self.value.lock().expect("store lock poisoned") = Some(code.to_string());
        Ok(())
    }
}
