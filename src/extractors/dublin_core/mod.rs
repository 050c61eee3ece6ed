//! Dublin Core metadata extractor.
//!
//! Reads `<meta name>` tags whose name starts with `DC.`, `dc:`,
//! `DCTERMS.` or `dcterms:` (case-insensitive) and emits the lowercased
//! suffix as the key.

use scraper::Html;

use crate::errors::Result;
use crate::extractors::common::html_utils;
use crate::types::dublin_core::DublinCore;


/// Extract Dublin Core metadata from HTML.
///
/// # Arguments
/// * `html` - The HTML content
/// * `_base_url` - Accepted for API symmetry; Dublin Core values are not URLs
pub fn extract(html: &str, _base_url: Option<&str>) -> Result<DublinCore> {
    let document = html_utils::parse_document(html);
    Ok(from_document(&document))
}

/// Extract Dublin Core metadata from an already-parsed document.
pub(crate) fn from_document(document: &Html) -> DublinCore {
    let mut dc = DublinCore::default();

    let Ok(selector) = html_utils::selector("meta[name][content]") else {
        return dc;
    };

    for element in document.select(&selector) {
        let Some(name) = html_utils::get_attr(&element, "name") else {
            continue;
        };
        let Some(content) = html_utils::get_attr_nonempty(&element, "content") else {
            continue;
        };

        let Some(suffix) = strip_dc_prefix(&name) else {
            continue;
        };
        if suffix.is_empty() {
            continue;
        }

        match suffix.as_str() {
            // Elements that accumulate every occurrence
            "creator" => dc.creator.push(content),
            "contributor" => dc.contributor.push(content),
            "subject" => dc.subject.push(content),
            "language" => dc.language.push(content),
            "rights" => dc.rights.push(content),
            // Scalar elements keep the first occurrence
            "title" => set(&mut dc.title, content),
            "description" => set(&mut dc.description, content),
            "publisher" => set(&mut dc.publisher, content),
            "date" => set(&mut dc.date, content),
            "type" => set(&mut dc.resource_type, content),
            "format" => set(&mut dc.format, content),
            "identifier" => set(&mut dc.identifier, content),
            "source" => set(&mut dc.source, content),
            "relation" => set(&mut dc.relation, content),
            "coverage" => set(&mut dc.coverage, content),
            other => {
                dc.extra.entry(other.to_string()).or_insert(content);
            }
        }
    }

    dc
}

/// Strip a Dublin Core prefix, returning the lowercased element name.
fn strip_dc_prefix(name: &str) -> Option<String> {
    let lower = name.to_lowercase();
    for prefix in ["dcterms.", "dcterms:", "dc.", "dc:"] {
        if let Some(stripped) = lower.strip_prefix(prefix) {
            return Some(stripped.to_string());
        }
    }
    None
}

fn set(slot: &mut Option<String>, content: String) {
    if slot.is_none() {
        *slot = Some(content);
    }
}
