//! rel-* link relationships extractor.
//!
//! Groups every `<link rel>` and `<a rel>` by rel token (lowercased),
//! carrying the attributes a consumer needs to pick among candidates:
//! hreflang, type, title, media and sizes.

use scraper::Html;
use url::Url;

use crate::errors::Result;
use crate::extractors::common::{html_utils, url_utils};
use crate::types::rel_links::{RelLink, RelLinks};

/// Extract rel-* link relationships from HTML.
///
/// # Arguments
/// * `html` - HTML content to extract from
/// * `base_url` - Optional base URL for resolving relative URLs
pub fn extract(html: &str, base_url: Option<&str>) -> Result<RelLinks> {
    let document = html_utils::parse_document(html);
    let base = url_utils::parse_base(base_url);
    Ok(from_document(&document, base.as_ref()))
}

/// Extract rel-* link relationships from an already-parsed document.
pub(crate) fn from_document(document: &Html, base: Option<&Url>) -> RelLinks {
    let mut rel_links = RelLinks::default();

    let Ok(selector) = html_utils::selector("link[rel][href], a[rel][href]") else {
        return rel_links;
    };

    for element in document.select(&selector) {
        let Some(rel) = html_utils::get_attr(&element, "rel") else {
            continue;
        };
        let Some(href) = html_utils::get_attr_nonempty(&element, "href") else {
            continue;
        };

        let link = RelLink {
            href: url_utils::resolve(base, &href),
            hreflang: html_utils::get_attr_nonempty(&element, "hreflang"),
            link_type: html_utils::get_attr_nonempty(&element, "type"),
            title: html_utils::get_attr_nonempty(&element, "title"),
            media: html_utils::get_attr_nonempty(&element, "media"),
            sizes: html_utils::get_attr_nonempty(&element, "sizes"),
        };

        for token in rel.split_whitespace() {
            rel_links
                .entry(token.to_lowercase())
                .or_default()
                .push(link.clone());
        }
    }

    rel_links
}
