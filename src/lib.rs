//! Bilingual Korean/English display switcher with persisted preference.
//!
//! The switcher operates on an in-memory page snapshot ([`Document`]) whose
//! elements carry a small attribute contract: `data-ko`/`data-en` payload
//! pairs on translatable nodes, `data-lang` on `lang-btn` toggle controls,
//! `data-ko-display`/`data-en-display` on conditionally visible blocks, and
//! `data-domain` on host-name placeholders.
//!
//! [`LanguageToggler`] drives the page lifecycle: it stamps the host name,
//! resolves the persisted preference (Korean by default, degrading silently
//! on storage failure), applies the language, and binds the toggle
//! controls. The substitution algorithm itself is a pure planner in
//! [`render`], so it can be tested without storage or a live page.
//!
//! ```
//! use lang_toggle::{
//!     Document, Element, Language, LanguageToggler, MemoryPreferenceStore, NavigationContext,
//! };
//!
//! let mut doc = Document::new();
//! let greeting = doc.push(
//!     Element::new("h1")
//!         .with_attr("data-ko", "안녕하세요")
//!         .with_attr("data-en", "Hello")
//!         .with_content("안녕하세요"),
//! );
//!
//! let mut toggler = LanguageToggler::new(MemoryPreferenceStore::new());
//! toggler.page_ready(&mut doc, &NavigationContext::detached());
//!
//! assert_eq!(toggler.current(), Language::Ko);
//! assert_eq!(doc.get(greeting).unwrap().content, "안녕하세요");
//! ```

pub mod config;
pub mod dom;
pub mod i18n;
pub mod render;
pub mod store;
pub mod toggler;

pub use config::Config;
pub use dom::{Document, Element, NodeId};
pub use i18n::Language;
pub use store::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, StoreError};
pub use toggler::{LanguageChanged, LanguageToggler, NavigationContext};
