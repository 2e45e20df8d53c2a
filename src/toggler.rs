//! The language toggler component.
//!
//! Wires the preference store, the render planner, and a page snapshot
//! together. The page-ready pass runs in a fixed order: domain placeholders
//! are stamped, the persisted preference is resolved (defaulting to Korean,
//! never failing), the resolved language is applied, and only then are the
//! toggle controls bound. Controls activated afterwards emit
//! [`LanguageChanged`] events; the single handler persists the new
//! preference and re-applies the language.

use crate::dom::{Document, NodeId};
use crate::i18n::{Language, ToggleMetrics};
use crate::render::{self, Mutation};
use crate::store::PreferenceStore;
use tracing::{debug, info, warn};

/// Host string substituted when the navigation context has no hostname.
pub const FALLBACK_HOST: &str = "cheng80.myqnapcloud.com";

/// The browser-side navigation context the component reads its host from.
#[derive(Debug, Clone, Default)]
pub struct NavigationContext {
    /// The viewing host name, when the context provides one.
    pub hostname: Option<String>,
}

impl NavigationContext {
    /// A context with a known hostname.
    pub fn with_hostname(hostname: impl Into<String>) -> Self {
        Self {
            hostname: Some(hostname.into()),
        }
    }

    /// A context with no hostname available (e.g., a detached viewer).
    pub fn detached() -> Self {
        Self { hostname: None }
    }

    /// The host string to display: the hostname, or `fallback` when the
    /// context has none (or an empty one).
    pub fn resolve_host(&self, fallback: &str) -> String {
        match self.hostname.as_deref() {
            Some(host) if !host.is_empty() => host.to_string(),
            _ => fallback.to_string(),
        }
    }
}

/// Event emitted when a toggle control is activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageChanged {
    /// The newly selected language.
    pub language: Language,
}

/// Stateful bilingual display switcher with persisted preference.
///
/// Generic over its [`PreferenceStore`] so tests can inject an in-memory or
/// failing store. All operations are synchronous and none of them fail:
/// storage errors degrade silently per the component contract.
pub struct LanguageToggler<S> {
    store: S,
    current: Language,
    fallback_host: String,
    controls: Vec<(NodeId, Language)>,
    ready: bool,
}

impl<S: PreferenceStore> LanguageToggler<S> {
    /// Create a toggler over the given preference store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            current: Language::default(),
            fallback_host: FALLBACK_HOST.to_string(),
            controls: Vec::new(),
            ready: false,
        }
    }

    /// Override the host string used when the navigation context has none.
    pub fn with_fallback_host(mut self, host: impl Into<String>) -> Self {
        self.fallback_host = host.into();
        self
    }

    /// The currently applied language.
    pub fn current(&self) -> Language {
        self.current
    }

    /// Run the page-ready sequence against a freshly loaded snapshot.
    ///
    /// In order: stamp the resolved host into every domain placeholder
    /// (language-independent, exactly once per load), resolve the persisted
    /// preference, apply the resolved language to the whole document, and
    /// bind every toggle control. Activation is only possible once this has
    /// run, which guarantees the initial full-document application completes
    /// before any control handler can fire.
    pub fn page_ready(&mut self, doc: &mut Document, nav: &NavigationContext) {
        let host = nav.resolve_host(&self.fallback_host);
        let domain_plan = render::plan_domain(doc, &host);
        render::apply(doc, &domain_plan);
        debug!(host = %host, placeholders = domain_plan.len(), "stamped domain placeholders");

        self.current = self.resolve_preference();
        self.apply_language(doc, self.current);

        self.controls = doc
            .nodes()
            .filter_map(|(id, el)| {
                el.toggle_code()
                    .map(|code| (id, Language::resolve(code)))
            })
            .collect();
        self.ready = true;

        info!(
            lang = %self.current,
            controls = self.controls.len(),
            "page ready"
        );
    }

    /// Activate a toggle control.
    ///
    /// Persists the control's language as the new preference and re-applies
    /// it to the document. Returns `true` when default navigation was
    /// suppressed, which is the case whenever the control is a hyperlink.
    /// Activating an unbound node, or activating before [`Self::page_ready`]
    /// has run, is a no-op returning `false`.
    pub fn activate(&mut self, doc: &mut Document, control: NodeId) -> bool {
        if !self.ready {
            debug!(node = control.0, "activation before page ready ignored");
            return false;
        }
        let Some(&(_, language)) = self.controls.iter().find(|(id, _)| *id == control) else {
            debug!(node = control.0, "activation of unbound node ignored");
            return false;
        };

        let default_prevented = doc
            .get(control)
            .map(|el| el.is_hyperlink())
            .unwrap_or(false);

        self.handle(doc, LanguageChanged { language });
        default_prevented
    }

    /// Handle a language change: persist the preference, then re-render.
    ///
    /// A write failure keeps the in-memory value for this page view; the
    /// document still switches.
    pub fn handle(&mut self, doc: &mut Document, event: LanguageChanged) {
        if let Err(err) = self.store.set(event.language.code()) {
            warn!(error = %err, "failed to persist language preference; keeping in-memory value");
            ToggleMetrics::global().record_write_failure();
        }
        self.current = event.language;
        self.apply_language(doc, event.language);
    }

    /// Resolve the preference to apply: the persisted value, or Korean when
    /// nothing is stored or the store fails. This never errors.
    fn resolve_preference(&self) -> Language {
        match self.store.get() {
            Ok(Some(code)) => Language::resolve(&code),
            Ok(None) => Language::default(),
            Err(err) => {
                warn!(error = %err, "failed to read language preference; using default");
                ToggleMetrics::global().record_read_failure();
                Language::default()
            }
        }
    }

    fn apply_language(&self, doc: &mut Document, lang: Language) {
        let plan = render::plan_language(doc, lang);
        let rewritten = plan
            .iter()
            .filter(|m| matches!(m, Mutation::SetContent { .. }))
            .count();
        render::apply(doc, &plan);

        let metrics = ToggleMetrics::global();
        metrics.record_apply();
        metrics.record_rewritten(rewritten);
        debug!(lang = %lang, rewritten, "applied language");
    }
}
