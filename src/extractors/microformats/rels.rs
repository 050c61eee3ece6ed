//! The `rels` and `rel-urls` side of a microformats parse.

use indexmap::IndexMap;
use scraper::Html;
use url::Url;

use crate::extractors::common::{html_utils, url_utils};
use crate::types::microformats::RelUrl;

/// Collect rel relations from every `<a rel>` and `<link rel>`.
///
/// `rels` maps each lowercased token to the hrefs it annotates (deduped,
/// source order); `rel-urls` inverts that, keyed by resolved href.
pub(super) fn collect(
    document: &Html,
    base: Option<&Url>,
) -> (IndexMap<String, Vec<String>>, IndexMap<String, RelUrl>) {
    let mut rels: IndexMap<String, Vec<String>> = IndexMap::new();
    let mut rel_urls: IndexMap<String, RelUrl> = IndexMap::new();

    let Ok(selector) = html_utils::selector("a[rel][href], link[rel][href]") else {
        return (rels, rel_urls);
    };

    for element in document.select(&selector) {
        let Some(rel) = html_utils::get_attr(&element, "rel") else {
            continue;
        };
        let Some(href) = html_utils::get_attr_nonempty(&element, "href") else {
            continue;
        };
        let resolved = url_utils::resolve(base, &href);

        let entry = rel_urls.entry(resolved.clone()).or_default();
        if entry.text.is_none() {
            entry.text = html_utils::extract_text(&element);
        }
        if entry.hreflang.is_none() {
            entry.hreflang = html_utils::get_attr_nonempty(&element, "hreflang");
        }
        if entry.media.is_none() {
            entry.media = html_utils::get_attr_nonempty(&element, "media");
        }
        if entry.link_type.is_none() {
            entry.link_type = html_utils::get_attr_nonempty(&element, "type");
        }
        if entry.title.is_none() {
            entry.title = html_utils::get_attr_nonempty(&element, "title");
        }
        if entry.lang.is_none() {
            entry.lang = html_utils::get_attr_nonempty(&element, "lang");
        }

        for token in rel.split_whitespace() {
            let token = token.to_lowercase();
            let hrefs = rels.entry(token.clone()).or_default();
            if !hrefs.contains(&resolved) {
                hrefs.push(resolved.clone());
            }
            if !entry.rels.contains(&token) {
                entry.rels.push(token);
            }
        }
    }

    (rels, rel_urls)
}
