//! Bilingual coverage validation module.
//!
//! This module provides authoring-time validation for page snapshots: every
//! translatable node is expected to declare both language payloads, and a
//! payload pair is expected to embed the same markup elements (the same
//! links in both languages, for example). The switcher itself never fails on
//! these issues at runtime; this is a lint for page authors.

use crate::dom::{Document, ATTR_EN, ATTR_KO};
use regex::Regex;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Coverage violations that leave a node untranslated in one language
    pub errors: Vec<String>,

    /// Non-critical issues about payload pairs
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for bilingual payload coverage.
pub struct CoverageValidator;

// Regex patterns for extraction (cached for performance)
static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
static HREF_REGEX: OnceLock<Regex> = OnceLock::new();

impl CoverageValidator {
    /// Validate a snapshot's translatable nodes.
    ///
    /// This function checks that:
    /// - every translatable node declares both `data-ko` and `data-en`
    ///   (a one-sided node silently keeps stale content in one language)
    /// - payload pairs embed the same markup elements (tag names)
    /// - payload pairs link to the same targets (`href` values)
    /// - mailto links do not declare payloads (they are never substituted)
    ///
    /// # Arguments
    /// * `doc` - The page snapshot to validate
    ///
    /// # Returns
    /// A `ValidationReport` containing any errors or warnings found.
    pub fn validate(doc: &Document) -> ValidationReport {
        let mut report = ValidationReport::new();

        for (id, el) in doc.nodes() {
            if !el.is_translatable() {
                continue;
            }

            if el.is_mailto_link() {
                report.warnings.push(format!(
                    "node {} <{}>: mailto link declares language payloads that are never substituted",
                    id.0, el.tag
                ));
                continue;
            }

            let ko = el.attr(ATTR_KO);
            let en = el.attr(ATTR_EN);

            let (ko, en) = match (ko, en) {
                (Some(ko), Some(en)) => (ko, en),
                (Some(_), None) => {
                    report.errors.push(format!(
                        "node {} <{}>: declares {} but not {}",
                        id.0, el.tag, ATTR_KO, ATTR_EN
                    ));
                    continue;
                }
                (None, Some(_)) => {
                    report.errors.push(format!(
                        "node {} <{}>: declares {} but not {}",
                        id.0, el.tag, ATTR_EN, ATTR_KO
                    ));
                    continue;
                }
                (None, None) => continue,
            };

            // Check embedded markup elements
            let ko_tags = Self::extract_tags(ko);
            let en_tags = Self::extract_tags(en);
            if ko_tags != en_tags {
                report.warnings.push(format!(
                    "node {} <{}>: payload markup mismatch: ko has {:?}, en has {:?}",
                    id.0, el.tag, ko_tags, en_tags
                ));
            }

            // Check embedded link targets
            let ko_hrefs = Self::extract_hrefs(ko);
            let en_hrefs = Self::extract_hrefs(en);
            if ko_hrefs != en_hrefs {
                report.warnings.push(format!(
                    "node {} <{}>: payload link mismatch: ko has {:?}, en has {:?}",
                    id.0, el.tag, ko_hrefs, en_hrefs
                ));
            }
        }

        report
    }

    /// Extract all opening tag names from a markup fragment, lowercased
    fn extract_tags(fragment: &str) -> Vec<String> {
        let regex = TAG_REGEX.get_or_init(|| Regex::new(r"<([a-zA-Z][a-zA-Z0-9]*)").unwrap());

        regex
            .captures_iter(fragment)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_lowercase()))
            .collect()
    }

    /// Extract all href targets from a markup fragment
    fn extract_hrefs(fragment: &str) -> Vec<String> {
        let regex = HREF_REGEX.get_or_init(|| Regex::new(r#"href="([^"]*)""#).unwrap());

        regex
            .captures_iter(fragment)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}
