//! Preview binary - renders a page snapshot in both languages without
//! touching the real preference file
//!
//! Usage:
//!   cargo run --bin preview                    # Render the built-in sample page
//!   cargo run --bin preview -- page.json       # Render a snapshot from a JSON file
//!
//! Optional environment variables:
//! - LANG_TOGGLE_FALLBACK_HOST (host shown when no navigation context exists)
//! - RUST_LOG (tracing filter, e.g. lang_toggle=debug)
//!
//! The preview uses an in-memory preference store, so nothing is persisted.

use anyhow::{Context, Result};
use lang_toggle::i18n::{CoverageValidator, ToggleMetrics};
use lang_toggle::{
    Config, Document, Element, LanguageToggler, MemoryPreferenceStore, NavigationContext,
};
use std::fs;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lang_toggle=info".parse()?),
        )
        .init();

    let mut doc = match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading snapshot from {}", path);
            let json = fs::read_to_string(&path)
                .with_context(|| format!("failed to read snapshot file {path}"))?;
            Document::from_json(&json)?
        }
        None => sample_page(),
    };

    let report = CoverageValidator::validate(&doc);
    for error in &report.errors {
        println!("coverage error: {error}");
    }
    for warning in &report.warnings {
        println!("coverage warning: {warning}");
    }

    // The preference file path from the config is deliberately unused here:
    // previews run against an in-memory store.
    let config = Config::from_env()?;
    let mut toggler = LanguageToggler::new(MemoryPreferenceStore::new())
        .with_fallback_host(config.fallback_host);

    toggler.page_ready(&mut doc, &NavigationContext::detached());
    println!("\n=== Initial load ({}) ===", toggler.current());
    print_document(&doc);

    // Activate the first control that would switch away from the current
    // language, as a user clicking the other toggle would.
    let other = doc
        .nodes()
        .find(|(_, el)| {
            el.toggle_code()
                .map(|code| lang_toggle::Language::resolve(code) != toggler.current())
                .unwrap_or(false)
        })
        .map(|(id, _)| id);

    if let Some(control) = other {
        toggler.activate(&mut doc, control);
        println!("\n=== After toggle ({}) ===", toggler.current());
        print_document(&doc);
    } else {
        println!("\nNo toggle control for the other language; nothing to switch.");
    }

    let metrics = serde_json::to_string_pretty(&ToggleMetrics::global().report())?;
    println!("\n=== Metrics ===\n{metrics}");

    Ok(())
}

/// Print a rough rendering of the snapshot: one line per visible element.
fn print_document(doc: &Document) {
    println!("[lang={}]", doc.lang);
    for (_, el) in doc.nodes() {
        if !el.is_visible() {
            continue;
        }
        let classes = if el.classes.is_empty() {
            String::new()
        } else {
            format!(" class=\"{}\"", el.classes.join(" "))
        };
        println!("  <{}{}> {}", el.tag, classes, el.content);
    }
}

/// The built-in sample page: a greeting, a mailto contact line, a pair of
/// toggle controls, language-only blocks, and a domain placeholder.
fn sample_page() -> Document {
    let mut doc = Document::new();
    doc.push(
        Element::new("h1")
            .with_attr("data-ko", "안녕하세요")
            .with_attr("data-en", "Hello")
            .with_content("안녕하세요"),
    );
    doc.push(
        Element::new("p")
            .with_attr("data-ko", r#"<strong>태그</strong>로 할 일을 정리하세요"#)
            .with_attr("data-en", r#"Organize your tasks with <strong>tags</strong>"#)
            .with_content("<strong>태그</strong>로 할 일을 정리하세요"),
    );
    doc.push(
        Element::new("a")
            .with_attr("href", "mailto:support@example.com")
            .with_attr("data-ko", "연락처")
            .with_attr("data-en", "Contact")
            .with_content("support@example.com"),
    );
    doc.push(
        Element::new("a")
            .with_attr("href", "#")
            .with_class("lang-btn")
            .with_attr("data-lang", "ko")
            .with_content("한국어"),
    );
    doc.push(
        Element::new("a")
            .with_attr("href", "#")
            .with_class("lang-btn")
            .with_attr("data-lang", "en")
            .with_content("English"),
    );
    doc.push(
        Element::new("div")
            .with_attr("data-ko-display", "")
            .with_content("한국어 사용자 안내"),
    );
    doc.push(
        Element::new("div")
            .with_attr("data-en-display", "")
            .with_content("Notes for English readers"),
    );
    doc.push(
        Element::new("code")
            .with_attr("data-domain", "")
            .with_content(""),
    );
    doc
}
