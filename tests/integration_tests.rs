//! Integration tests for the bilingual display switcher
//!
//! These tests exercise the full component path: page-ready sequence,
//! toggle activation, persistence across simulated page loads, and the
//! degradation behavior when the preference store fails. The pure planner
//! properties (idempotence, round-trip stability) are checked with proptest.

use lang_toggle::i18n::{CoverageValidator, ToggleMetrics};
use lang_toggle::{
    Document, Element, FilePreferenceStore, Language, LanguageToggler, MemoryPreferenceStore,
    NavigationContext, NodeId,
};
use proptest::prelude::*;
use serial_test::serial;
use tempfile::TempDir;

// ==================== Test Helpers ====================

/// Handles into the sample page built by `sample_page`.
struct SamplePage {
    doc: Document,
    greeting: NodeId,
    contact: NodeId,
    partial: NodeId,
    ko_btn: NodeId,
    en_btn: NodeId,
    ko_block: NodeId,
    en_block: NodeId,
    domain: NodeId,
}

/// Build a page snapshot covering the whole attribute contract: a fully
/// bilingual greeting, a mailto contact link, a node with only an English
/// payload, both toggle controls, both conditional blocks, and a domain
/// placeholder.
fn sample_page() -> SamplePage {
    let mut doc = Document::new();

    let greeting = doc.push(
        Element::new("h1")
            .with_attr("data-ko", "안녕하세요")
            .with_attr("data-en", "Hello")
            .with_content("안녕하세요"),
    );
    let contact = doc.push(
        Element::new("a")
            .with_attr("href", "mailto:a@b.com")
            .with_attr("data-ko", "연락처")
            .with_attr("data-en", "Contact")
            .with_content("a@b.com"),
    );
    let partial = doc.push(
        Element::new("p")
            .with_attr("data-en", "Hello")
            .with_content("original static markup"),
    );
    let ko_btn = doc.push(
        Element::new("a")
            .with_attr("href", "#")
            .with_class("lang-btn")
            .with_attr("data-lang", "ko")
            .with_content("한국어"),
    );
    let en_btn = doc.push(
        Element::new("a")
            .with_attr("href", "#")
            .with_class("lang-btn")
            .with_attr("data-lang", "en")
            .with_content("English"),
    );
    let ko_block = doc.push(
        Element::new("div")
            .with_attr("data-ko-display", "")
            .with_content("한국어 전용 안내"),
    );
    let en_block = doc.push(
        Element::new("div")
            .with_attr("data-en-display", "")
            .with_content("English-only notes"),
    );
    let domain = doc.push(Element::new("code").with_attr("data-domain", ""));

    SamplePage {
        doc,
        greeting,
        contact,
        partial,
        ko_btn,
        en_btn,
        ko_block,
        en_block,
        domain,
    }
}

fn content(doc: &Document, id: NodeId) -> &str {
    &doc.get(id).unwrap().content
}

fn is_active(doc: &Document, id: NodeId) -> bool {
    doc.get(id).unwrap().has_class("active")
}

fn is_visible(doc: &Document, id: NodeId) -> bool {
    doc.get(id).unwrap().is_visible()
}

// ==================== Default Behavior Tests ====================

#[test]
fn test_first_load_renders_korean_and_marks_ko_control_active() {
    let mut page = sample_page();
    let mut toggler = LanguageToggler::new(MemoryPreferenceStore::new());

    toggler.page_ready(&mut page.doc, &NavigationContext::detached());

    assert_eq!(page.doc.lang, "ko");
    assert_eq!(content(&page.doc, page.greeting), "안녕하세요");
    assert!(is_active(&page.doc, page.ko_btn));
    assert!(!is_active(&page.doc, page.en_btn));
    assert!(is_visible(&page.doc, page.ko_block));
    assert!(!is_visible(&page.doc, page.en_block));
}

#[test]
fn test_domain_placeholder_uses_hostname() {
    let mut page = sample_page();
    let mut toggler = LanguageToggler::new(MemoryPreferenceStore::new());

    toggler.page_ready(
        &mut page.doc,
        &NavigationContext::with_hostname("docs.example.com"),
    );
    assert_eq!(content(&page.doc, page.domain), "docs.example.com");
}

#[test]
fn test_domain_placeholder_falls_back_without_hostname() {
    let mut page = sample_page();
    let mut toggler =
        LanguageToggler::new(MemoryPreferenceStore::new()).with_fallback_host("fallback.host");

    toggler.page_ready(&mut page.doc, &NavigationContext::detached());
    assert_eq!(content(&page.doc, page.domain), "fallback.host");
}

// ==================== Toggle and Round-Trip Tests ====================

#[test]
fn test_toggle_to_english_and_back() {
    let mut page = sample_page();
    let mut toggler = LanguageToggler::new(MemoryPreferenceStore::new());

    toggler.page_ready(&mut page.doc, &NavigationContext::detached());

    let prevented = toggler.activate(&mut page.doc, page.en_btn);
    assert!(prevented); // anchor control suppresses navigation
    assert_eq!(page.doc.lang, "en");
    assert_eq!(content(&page.doc, page.greeting), "Hello");
    assert!(is_active(&page.doc, page.en_btn));
    assert!(!is_active(&page.doc, page.ko_btn));
    assert!(is_visible(&page.doc, page.en_block));
    assert!(!is_visible(&page.doc, page.ko_block));

    toggler.activate(&mut page.doc, page.ko_btn);
    assert_eq!(page.doc.lang, "ko");
    assert_eq!(content(&page.doc, page.greeting), "안녕하세요");
    assert!(is_active(&page.doc, page.ko_btn));
    assert!(is_visible(&page.doc, page.ko_block));
    assert!(!is_visible(&page.doc, page.en_block));
}

#[test]
fn test_mailto_contact_never_changes() {
    let mut page = sample_page();
    let mut toggler = LanguageToggler::new(MemoryPreferenceStore::new());

    toggler.page_ready(&mut page.doc, &NavigationContext::detached());
    assert_eq!(content(&page.doc, page.contact), "a@b.com");

    toggler.activate(&mut page.doc, page.en_btn);
    assert_eq!(content(&page.doc, page.contact), "a@b.com");

    toggler.activate(&mut page.doc, page.ko_btn);
    assert_eq!(content(&page.doc, page.contact), "a@b.com");
}

#[test]
fn test_partial_payload_keeps_prior_content_under_korean() {
    let mut page = sample_page();
    let mut toggler = LanguageToggler::new(MemoryPreferenceStore::new());

    toggler.page_ready(&mut page.doc, &NavigationContext::detached());
    // No data-ko payload: the original static markup stays
    assert_eq!(content(&page.doc, page.partial), "original static markup");

    toggler.activate(&mut page.doc, page.en_btn);
    assert_eq!(content(&page.doc, page.partial), "Hello");
}

#[test]
fn test_empty_payload_is_substituted() {
    let mut doc = Document::new();
    let node = doc.push(
        Element::new("span")
            .with_attr("data-ko", "값")
            .with_attr("data-en", "")
            .with_content("값"),
    );
    let mut toggler = LanguageToggler::new(MemoryPreferenceStore::with_value("en"));

    toggler.page_ready(&mut doc, &NavigationContext::detached());
    // Presence is structural: the empty English payload clears the content
    assert_eq!(content(&doc, node), "");
}

// ==================== Persistence Tests ====================

#[test]
fn test_preference_survives_page_loads() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("language");

    // First load: default Korean, user switches to English
    let mut page = sample_page();
    let mut toggler = LanguageToggler::new(FilePreferenceStore::new(&path));
    toggler.page_ready(&mut page.doc, &NavigationContext::detached());
    assert_eq!(toggler.current(), Language::Ko);
    toggler.activate(&mut page.doc, page.en_btn);

    // Fresh load over the same store: English without further user action
    let mut page = sample_page();
    let mut toggler = LanguageToggler::new(FilePreferenceStore::new(&path));
    toggler.page_ready(&mut page.doc, &NavigationContext::detached());

    assert_eq!(toggler.current(), Language::En);
    assert_eq!(content(&page.doc, page.greeting), "Hello");
    assert!(is_active(&page.doc, page.en_btn));
}

#[test]
fn test_unknown_persisted_code_collapses_to_english() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("language");
    std::fs::write(&path, "zz").expect("seed");

    let mut page = sample_page();
    let mut toggler = LanguageToggler::new(FilePreferenceStore::new(&path));
    toggler.page_ready(&mut page.doc, &NavigationContext::detached());

    assert_eq!(toggler.current(), Language::En);
    assert_eq!(content(&page.doc, page.greeting), "Hello");
}

// ==================== Degradation Tests ====================

#[test]
#[serial]
fn test_failing_store_degrades_to_default_without_panicking() {
    let metrics = ToggleMetrics::global();
    let read_failures = metrics.store_read_failures();
    let write_failures = metrics.store_write_failures();

    let mut page = sample_page();
    let mut toggler = LanguageToggler::new(MemoryPreferenceStore::failing());

    toggler.page_ready(&mut page.doc, &NavigationContext::detached());
    assert_eq!(toggler.current(), Language::Ko);
    assert_eq!(content(&page.doc, page.greeting), "안녕하세요");

    // Switching still works for this page view; only persistence is lost
    toggler.activate(&mut page.doc, page.en_btn);
    assert_eq!(toggler.current(), Language::En);
    assert_eq!(content(&page.doc, page.greeting), "Hello");

    assert!(metrics.store_read_failures() > read_failures);
    assert!(metrics.store_write_failures() > write_failures);
}

// ==================== Snapshot Fixture Tests ====================

#[test]
fn test_json_snapshot_end_to_end() {
    let json = r##"{
        "lang": "",
        "elements": [
            {
                "tag": "h1",
                "attributes": {"data-ko": "안녕하세요", "data-en": "Hello"},
                "content": "안녕하세요"
            },
            {
                "tag": "a",
                "attributes": {"href": "#", "data-lang": "en"},
                "classes": ["lang-btn"],
                "content": "English"
            }
        ]
    }"##;

    let mut doc = Document::from_json(json).expect("parse snapshot");
    let mut toggler = LanguageToggler::new(MemoryPreferenceStore::new());

    toggler.page_ready(&mut doc, &NavigationContext::detached());
    assert_eq!(doc.lang, "ko");

    toggler.activate(&mut doc, NodeId(1));
    assert_eq!(doc.lang, "en");
    assert_eq!(doc.get(NodeId(0)).unwrap().content, "Hello");
}

#[test]
fn test_validator_flags_partial_page() {
    let page = sample_page();
    let report = CoverageValidator::validate(&page.doc);

    // The partial node is an error; the bilingual mailto link is a warning
    assert!(report.has_errors());
    assert!(report.errors.iter().any(|e| e.contains("data-ko")));
    assert!(report.has_warnings());
    assert!(report.warnings.iter().any(|w| w.contains("mailto")));
}

// ==================== Planner Properties ====================

/// Elements exercising every branch of the planner: payloads may be
/// one-sided, controls may declare unknown codes, anchors may be mailto.
fn arb_element() -> impl Strategy<Value = Element> {
    (
        prop::sample::select(vec!["p", "a", "div", "button"]),
        prop::option::of("[a-z가-힣 ]{0,12}"),
        prop::option::of("[a-z ]{0,12}"),
        prop::option::of(prop::sample::select(vec!["ko", "en", "fr"])),
        prop::bool::ANY,
        prop::bool::ANY,
        prop::bool::ANY,
        "[a-z ]{0,12}",
    )
        .prop_map(
            |(tag, ko, en, control, mailto, ko_display, en_display, text)| {
                let mut el = Element::new(tag).with_content(text);
                if let Some(ko) = ko {
                    el = el.with_attr("data-ko", ko);
                }
                if let Some(en) = en {
                    el = el.with_attr("data-en", en);
                }
                if let Some(code) = control {
                    el = el.with_class("lang-btn").with_attr("data-lang", code);
                }
                if mailto {
                    el = el.with_attr("href", "mailto:a@b.com");
                }
                if ko_display {
                    el = el.with_attr("data-ko-display", "");
                }
                if en_display {
                    el = el.with_attr("data-en-display", "");
                }
                el
            },
        )
}

/// Elements with full bilingual coverage, for the round-trip property.
fn arb_covered_element() -> impl Strategy<Value = Element> {
    ("[a-z가-힣 ]{1,12}", "[a-z ]{1,12}", prop::bool::ANY).prop_map(|(ko, en, mailto)| {
        let mut el = Element::new("p")
            .with_attr("data-ko", ko.clone())
            .with_attr("data-en", en)
            .with_content(ko);
        if mailto {
            el.tag = "a".to_string();
            el = el.with_attr("href", "mailto:a@b.com");
        }
        el
    })
}

proptest! {
    #[test]
    fn prop_applying_a_language_twice_is_idempotent(
        elements in prop::collection::vec(arb_element(), 0..12),
        english in prop::bool::ANY,
    ) {
        let mut doc = Document::new();
        for el in elements {
            doc.push(el);
        }
        let lang = if english { Language::En } else { Language::Ko };

        let plan = lang_toggle::render::plan_language(&doc, lang);
        lang_toggle::render::apply(&mut doc, &plan);
        let once = doc.clone();

        let plan = lang_toggle::render::plan_language(&doc, lang);
        lang_toggle::render::apply(&mut doc, &plan);
        prop_assert_eq!(doc, once);
    }

    #[test]
    fn prop_round_trip_restores_fully_covered_documents(
        elements in prop::collection::vec(arb_covered_element(), 1..10),
    ) {
        let mut doc = Document::new();
        for el in elements {
            doc.push(el);
        }

        let plan = lang_toggle::render::plan_language(&doc, Language::Ko);
        lang_toggle::render::apply(&mut doc, &plan);
        let korean_state = doc.clone();

        let plan = lang_toggle::render::plan_language(&doc, Language::En);
        lang_toggle::render::apply(&mut doc, &plan);

        let plan = lang_toggle::render::plan_language(&doc, Language::Ko);
        lang_toggle::render::apply(&mut doc, &plan);
        prop_assert_eq!(doc, korean_state);
    }
}
