//! Pure render planner: computes the mutations a language implies.
//!
//! The substitution algorithm is kept separate from both the preference
//! store and the live document: [`plan_language`] and [`plan_domain`] read a
//! snapshot and return [`Mutation`]s, and [`apply`] executes them. Planning
//! the same language twice yields the same document state as planning it
//! once.

use crate::dom::{
    Document, Element, NodeId, ACTIVE_CLASS, ATTR_DOMAIN, ATTR_EN, ATTR_EN_DISPLAY, ATTR_KO,
    ATTR_KO_DISPLAY,
};
use crate::i18n::{Language, ToggleMetrics};
use tracing::debug;

/// A single planned document change.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    /// Set the document root's language attribute.
    SetDocumentLang { lang: Language },

    /// Replace an element's rendered content with a raw markup fragment.
    SetContent { node: NodeId, markup: String },

    /// Replace an element's rendered content with plain text.
    SetText { node: NodeId, text: String },

    /// Add or remove the active class on a toggle control.
    SetActive { node: NodeId, active: bool },

    /// Show or hide a conditional block via its display override.
    SetDisplay { node: NodeId, visible: bool },
}

/// Compute the mutations that make a document display `lang`.
///
/// Total over both languages and idempotent. For every translatable node
/// the payload matching `lang` is selected; a present payload (including
/// the empty string) is substituted, an absent one leaves the node's
/// current content untouched. Mailto links are skipped entirely. Toggle
/// controls are marked active iff their declared code resolves to `lang`,
/// and conditional blocks get their visibility recomputed.
pub fn plan_language(doc: &Document, lang: Language) -> Vec<Mutation> {
    let mut mutations = vec![Mutation::SetDocumentLang { lang }];

    for (id, el) in doc.nodes() {
        if el.is_translatable() {
            plan_substitution(&mut mutations, id, el, lang);
        }

        if let Some(code) = el.toggle_code() {
            mutations.push(Mutation::SetActive {
                node: id,
                active: Language::resolve(code) == lang,
            });
        }

        if el.has_attr(ATTR_KO_DISPLAY) {
            mutations.push(Mutation::SetDisplay {
                node: id,
                visible: lang == Language::Ko,
            });
        }
        if el.has_attr(ATTR_EN_DISPLAY) {
            mutations.push(Mutation::SetDisplay {
                node: id,
                visible: lang == Language::En,
            });
        }
    }

    mutations
}

/// Plan the payload substitution for one translatable node.
fn plan_substitution(mutations: &mut Vec<Mutation>, id: NodeId, el: &Element, lang: Language) {
    if el.is_mailto_link() {
        // Email addresses must display unmodified regardless of language.
        ToggleMetrics::global().record_mailto_skip();
        return;
    }

    let attr = match lang {
        Language::Ko => ATTR_KO,
        Language::En => ATTR_EN,
    };

    match el.attr(attr) {
        Some(markup) => mutations.push(Mutation::SetContent {
            node: id,
            markup: markup.to_string(),
        }),
        None => {
            // Silent no-op by contract: prior content stays in place.
            debug!(
                node = id.0,
                lang = %lang,
                "translatable node has no payload for the active language"
            );
            ToggleMetrics::global().record_missing_payload();
        }
    }
}

/// Compute the mutations that stamp the resolved host name into every
/// domain placeholder. Language-independent; runs once per page load.
pub fn plan_domain(doc: &Document, host: &str) -> Vec<Mutation> {
    doc.with_attribute(ATTR_DOMAIN)
        .into_iter()
        .map(|node| Mutation::SetText {
            node,
            text: host.to_string(),
        })
        .collect()
}

/// Apply planned mutations to a document.
///
/// Mutations referring to nodes that no longer exist are ignored. Making a
/// block visible clears its display override (back to the stylesheet
/// default) rather than recording an explicit value, so hiding stays
/// reversible.
pub fn apply(doc: &mut Document, mutations: &[Mutation]) {
    for mutation in mutations {
        match mutation {
            Mutation::SetDocumentLang { lang } => {
                doc.lang = lang.code().to_string();
            }
            Mutation::SetContent { node, markup } => {
                if let Some(el) = doc.get_mut(*node) {
                    el.content = markup.clone();
                }
            }
            Mutation::SetText { node, text } => {
                if let Some(el) = doc.get_mut(*node) {
                    el.content = text.clone();
                }
            }
            Mutation::SetActive { node, active } => {
                if let Some(el) = doc.get_mut(*node) {
                    el.set_class(ACTIVE_CLASS, *active);
                }
            }
            Mutation::SetDisplay { node, visible } => {
                if let Some(el) = doc.get_mut(*node) {
                    el.display = if *visible {
                        None
                    } else {
                        Some("none".to_string())
                    };
                }
            }
        }
    }
}
