//! In-memory page snapshot: the document model the switcher operates on.
//!
//! A [`Document`] is a flat arena of [`Element`]s addressed by [`NodeId`].
//! Elements carry the attribute contract the switcher consumes:
//!
//! - `data-ko` / `data-en`: parallel language payloads (raw markup
//!   fragments; substitution writes them verbatim)
//! - `data-lang` on a `lang-btn`-classed element: a toggle control
//! - `data-ko-display` / `data-en-display`: conditionally visible blocks
//! - `data-domain`: placeholders for the resolved host name
//!
//! Attribute presence is structural: an attribute set to the empty string is
//! present. Snapshots are serde-derived so page fixtures can be loaded from
//! JSON.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Attribute carrying the Korean payload.
pub const ATTR_KO: &str = "data-ko";
/// Attribute carrying the English payload.
pub const ATTR_EN: &str = "data-en";
/// Attribute declaring a toggle control's target language.
pub const ATTR_LANG: &str = "data-lang";
/// Attribute marking a host-name placeholder.
pub const ATTR_DOMAIN: &str = "data-domain";
/// Attribute marking a Korean-only block.
pub const ATTR_KO_DISPLAY: &str = "data-ko-display";
/// Attribute marking an English-only block.
pub const ATTR_EN_DISPLAY: &str = "data-en-display";
/// Class marking a toggle control.
pub const TOGGLE_CLASS: &str = "lang-btn";
/// Class applied to the toggle control matching the current language.
pub const ACTIVE_CLASS: &str = "active";

/// Stable handle to an element within one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// A single element of a page snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Tag name (e.g., "p", "a", "button")
    pub tag: String,

    /// Attribute map; an entry with an empty value is still present
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,

    /// Class list
    #[serde(default)]
    pub classes: Vec<String>,

    /// Rendered content, a raw markup fragment
    #[serde(default)]
    pub content: String,

    /// Inline display override; `None` means the stylesheet default applies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

impl Element {
    /// Create an element with the given tag and no attributes or content.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Set an attribute (builder style).
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Add a class (builder style).
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Set the rendered content (builder style).
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Look up an attribute value.
    ///
    /// Presence is structural: an attribute set to the empty string returns
    /// `Some("")`, not `None`.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Check whether an attribute is present (empty values count).
    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Check whether a class is present.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add or remove a class so that its presence matches `on`.
    ///
    /// Idempotent: the class never appears more than once.
    pub fn set_class(&mut self, class: &str, on: bool) {
        if on {
            if !self.has_class(class) {
                self.classes.push(class.to_string());
            }
        } else {
            self.classes.retain(|c| c != class);
        }
    }

    /// Whether the element declares a language payload (either side).
    pub fn is_translatable(&self) -> bool {
        self.has_attr(ATTR_KO) || self.has_attr(ATTR_EN)
    }

    /// Whether the element is an anchor whose target uses the `mailto:`
    /// scheme. Such elements are never content-rewritten, so raw email
    /// addresses display unmodified regardless of language.
    pub fn is_mailto_link(&self) -> bool {
        self.tag.eq_ignore_ascii_case("a")
            && self
                .attr("href")
                .map(|href| href.starts_with("mailto:"))
                .unwrap_or(false)
    }

    /// Whether the element is a hyperlink (an anchor with an `href`).
    pub fn is_hyperlink(&self) -> bool {
        self.tag.eq_ignore_ascii_case("a") && self.has_attr("href")
    }

    /// The language code a toggle control activates, if this element is one.
    ///
    /// A toggle control carries the `lang-btn` class and must declare its
    /// target via `data-lang`; an element with the class but no declared
    /// code is not bindable.
    pub fn toggle_code(&self) -> Option<&str> {
        if self.has_class(TOGGLE_CLASS) {
            self.attr(ATTR_LANG)
        } else {
            None
        }
    }

    /// Whether the element is currently visible.
    ///
    /// Only the inline override is modeled; anything other than
    /// `display: none` counts as visible.
    pub fn is_visible(&self) -> bool {
        self.display.as_deref() != Some("none")
    }
}

/// A page snapshot: the root language attribute plus all elements the
/// switcher can see.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// The document root's language attribute
    #[serde(default)]
    pub lang: String,

    #[serde(default)]
    elements: Vec<Element>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element and return its handle.
    pub fn push(&mut self, element: Element) -> NodeId {
        self.elements.push(element);
        NodeId(self.elements.len() - 1)
    }

    /// Number of elements in the document.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the document has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Look up an element.
    pub fn get(&self, id: NodeId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    /// Look up an element mutably.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        self.elements.get_mut(id.0)
    }

    /// Iterate over all elements with their handles.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Element)> {
        self.elements
            .iter()
            .enumerate()
            .map(|(i, el)| (NodeId(i), el))
    }

    /// All elements carrying the named attribute (empty values count).
    pub fn with_attribute(&self, name: &str) -> Vec<NodeId> {
        self.nodes()
            .filter(|(_, el)| el.has_attr(name))
            .map(|(id, _)| id)
            .collect()
    }

    /// All elements carrying the named class.
    pub fn with_class(&self, class: &str) -> Vec<NodeId> {
        self.nodes()
            .filter(|(_, el)| el.has_class(class))
            .map(|(id, _)| id)
            .collect()
    }

    /// Load a snapshot from JSON.
    pub fn from_json(json: &str) -> anyhow::Result<Document> {
        serde_json::from_str(json).map_err(|e| anyhow::anyhow!("invalid document snapshot: {e}"))
    }

    /// Serialize the snapshot to pretty-printed JSON.
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).map_err(Into::into)
    }
}
