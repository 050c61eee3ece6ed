//! oEmbed endpoint discovery.
//!
//! Surfaces the JSON and XML discovery links
//! (`<link rel="alternate" type="application/json+oembed">` and the XML
//! variant). Endpoints are discovered only, never fetched.

use scraper::Html;
use url::Url;

use crate::errors::Result;
use crate::extractors::common::{html_utils, url_utils};
use crate::types::oembed::{OEmbedDiscovery, OEmbedEndpoint};

#[cfg(test)]
mod tests;

/// Discover oEmbed endpoints from HTML.
///
/// # Arguments
/// * `html` - The HTML content
/// * `base_url` - Optional base URL for resolving relative URLs
pub fn extract(html: &str, base_url: Option<&str>) -> Result<OEmbedDiscovery> {
    let document = html_utils::parse_document(html);
    let base = url_utils::parse_base(base_url);
    Ok(from_document(&document, base.as_ref()))
}

/// Discover oEmbed endpoints from an already-parsed document.
pub(crate) fn from_document(document: &Html, base: Option<&Url>) -> OEmbedDiscovery {
    let mut discovery = OEmbedDiscovery::default();

    let Ok(selector) = html_utils::selector("link[rel~=\"alternate\"][type][href]") else {
        return discovery;
    };

    for element in document.select(&selector) {
        let Some(link_type) = html_utils::get_attr(&element, "type") else {
            continue;
        };
        let Some(href) = html_utils::get_attr_nonempty(&element, "href") else {
            continue;
        };

        let link_type = link_type.trim().to_lowercase();
        if !link_type.ends_with("+oembed") {
            continue;
        }

        let endpoint = OEmbedEndpoint {
            href: url_utils::resolve(base, &href),
            title: html_utils::get_attr_nonempty(&element, "title"),
        };

        if link_type.contains("json") {
            if discovery.json.is_none() {
                discovery.json = Some(endpoint);
            }
        } else if discovery.xml.is_none() {
            discovery.xml = Some(endpoint);
        }
    }

    discovery
}
