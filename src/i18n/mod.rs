//! Internationalization (i18n) module for the bilingual switcher.
//!
//! This module contains all language-related logic: the supported-language
//! registry, the two-value `Language` type, coverage validation for page
//! snapshots, and the switcher's metrics.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the supported languages and their metadata
//! - `language`: The closed two-value Language type (Korean-first)
//! - `validator`: Bilingual payload coverage validation for page authors
//! - `metrics`: Switcher observability and counters
//!
//! # Example
//!
//! ```rust,ignore
//! use lang_toggle::i18n::{Language, LanguageRegistry};
//!
//! // The canonical language (Korean)
//! let canonical = Language::canonical();
//!
//! // Total resolution: unknown codes collapse to English
//! let lang = Language::resolve("en");
//!
//! // List all enabled languages
//! let languages = LanguageRegistry::get().list_enabled();
//! ```

mod language;
mod metrics;
mod registry;
mod validator;

pub use language::Language;
pub use metrics::{MetricsReport, ToggleMetrics};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use validator::{CoverageValidator, ValidationReport};
