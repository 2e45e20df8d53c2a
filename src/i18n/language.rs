//! Language type: the closed two-value language selection.
//!
//! This module provides the `Language` type used throughout the switcher.
//! The value space is fixed by design: Korean (`ko`, the canonical default)
//! and English (`en`). Any code that is not `ko` collapses to English, so
//! there is no runtime validation error for unrecognized codes.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use std::fmt;

/// A display language.
///
/// The switcher is a binary choice: Korean or English. `Ko` is the default
/// shown before any preference has been persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// Korean (canonical, shown when no preference is stored)
    #[default]
    Ko,
    /// English
    En,
}

impl Language {
    /// Resolve a language code without validation.
    ///
    /// This is total and infallible: `"ko"` resolves to Korean and every
    /// other value (including unknown or malformed codes) resolves to
    /// English. Persisted values and control-declared codes go through this
    /// path, so unrecognized codes silently collapse rather than error.
    ///
    /// # Example
    /// ```
    /// use lang_toggle::Language;
    ///
    /// assert_eq!(Language::resolve("ko"), Language::Ko);
    /// assert_eq!(Language::resolve("en"), Language::En);
    /// assert_eq!(Language::resolve("fr"), Language::En);
    /// ```
    pub fn resolve(code: &str) -> Language {
        if code == "ko" {
            Language::Ko
        } else {
            Language::En
        }
    }

    /// Create a Language from a language code string, strictly.
    ///
    /// Unlike [`Language::resolve`], this validates the code against the
    /// registry and is meant for authoring and tooling surfaces where an
    /// unknown code is a mistake worth reporting.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "ko", "en")
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is valid and the language is enabled
    /// * `Err` if the code is not found or the language is disabled
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language::resolve(config.code)),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Get the canonical (default) language.
    ///
    /// This is the language shown before the user has expressed a
    /// preference.
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language::resolve(config.code)
    }

    /// Get the ISO 639-1 language code.
    ///
    /// # Returns
    /// The language code as a static string ("ko" or "en").
    pub fn code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the language code is not found in the registry. This should
    /// never happen since both variants are seeded there.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code())
            .expect("Language code should always be valid")
    }

    /// Get the English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language (e.g., "한국어").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Check if this is the canonical language.
    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
