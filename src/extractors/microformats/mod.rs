//! Microformats v2 extraction.
//!
//! The class-based structured data convention: `h-*` roots carry
//! `(p|u|dt|e)-*` properties, compose values from `value`/`value-title`
//! fragments, imply missing name/photo/url, and nest arbitrarily. The
//! aggregate parse also reports `rels` and `rel-urls` for the whole
//! document.

mod implied;
mod properties;
mod rels;
mod walker;


use scraper::Html;
use url::Url;

use crate::errors::Result;
use crate::extractors::common::{html_utils, url_utils};
use crate::types::microformats::{MicroformatItem, MicroformatsDocument};

/// Parse all microformats in a document: items plus rels and rel-urls.
///
/// # Arguments
/// * `html` - The HTML content
/// * `base_url` - Optional base URL for resolving relative URLs
pub fn extract(html: &str, base_url: Option<&str>) -> Result<MicroformatsDocument> {
    let document = html_utils::parse_document(html);
    let base = url_utils::parse_base(base_url);
    Ok(from_document(&document, base.as_ref()))
}

/// Parse microformats from an already-parsed document.
pub(crate) fn from_document(document: &Html, base: Option<&Url>) -> MicroformatsDocument {
    let items = walker::walk(document, base);
    let (rels, rel_urls) = rels::collect(document, base);
    MicroformatsDocument {
        items,
        rels,
        rel_urls,
    }
}

/// Parse the document and keep items of one vocabulary (`h-card`,
/// `h-entry`, ...), nested items included, in document order.
pub(crate) fn items_of_type(
    document: &Html,
    base: Option<&Url>,
    vocabulary: &str,
) -> Vec<MicroformatItem> {
    let items = walker::walk(document, base);
    let mut matching = Vec::new();

    // Pre-order over the item tree; every nested root appears in its
    // parent's children, so this visits each item exactly once.
    let mut stack: Vec<&MicroformatItem> = items.iter().rev().collect();
    while let Some(item) = stack.pop() {
        if item.item_type.iter().any(|t| t == vocabulary) {
            matching.push(item.clone());
        }
        if let Some(children) = &item.children {
            stack.extend(children.iter().rev());
        }
    }

    matching
}

/// Convenience wrapper for the per-vocabulary operations in the crate root.
pub(crate) fn extract_vocabulary(
    html: &str,
    base_url: Option<&str>,
    vocabulary: &str,
) -> Result<Vec<MicroformatItem>> {
    let document = html_utils::parse_document(html);
    let base = url_utils::parse_base(base_url);
    Ok(items_of_type(&document, base.as_ref(), vocabulary))
}
