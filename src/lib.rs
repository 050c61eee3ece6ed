//! Structured metadata extraction from HTML.
//!
//! One permissive HTML parse feeds a family of independent, read-only
//! extractors covering the formats the web uses in practice:
//!
//! - Standard meta tags: title, description, keywords, canonical, robots,
//!   icons, feeds, hreflang alternates, verification tokens
//! - Open Graph (`og:*` and its type namespaces)
//! - Twitter Cards (`twitter:*`), with optional Open Graph fallback
//! - Dublin Core (`DC.*` / `dcterms:*`)
//! - oEmbed endpoint discovery
//! - rel-* link relationships
//! - JSON-LD (`<script type="application/ld+json">`)
//! - HTML5 Microdata (`itemscope`/`itemprop`/`itemtype`)
//! - Microformats v2 (h-card, h-entry, h-event, h-review, h-recipe,
//!   h-product, h-feed, h-adr, h-geo)
//!
//! Input is already-decoded UTF-8 text; malformed markup, broken JSON-LD
//! blocks and unparseable base URLs are all recovered locally and never
//! abort an extraction. [`extract_all`] runs everything over a single
//! parse and always returns the full nine-slot result document.
//!
//! ```
//! let html = r#"
//!     <title>Example</title>
//!     <meta property="og:title" content="Example Page">
//!     <a class="h-card" href="/about">Jane Doe</a>
//! "#;
//! let result = metaglean::extract_all(html, Some("https://example.com")).unwrap();
//! assert_eq!(result.meta.title.as_deref(), Some("Example"));
//! assert_eq!(result.opengraph.title.as_deref(), Some("Example Page"));
//! assert_eq!(result.microformats.items.len(), 1);
//! ```

mod errors;
mod extractors;
mod types;

pub use errors::{ExtractError, Result};
pub use types::dublin_core::DublinCore;
pub use types::meta::{FeedLink, HreflangLink, IconLink, MetaTags};
pub use types::microdata::{MicrodataItem, MicrodataValue};
pub use types::microformats::{MicroformatItem, MicroformatsDocument, PropertyValue, RelUrl};
pub use types::oembed::{OEmbedDiscovery, OEmbedEndpoint};
pub use types::rel_links::{RelLink, RelLinks};
pub use types::result::ExtractionResult;
pub use types::social::{
    OgActor, OgArticle, OgBook, OgMedia, OgMusic, OgMusicRef, OgProfile, OgVideoInfo, OpenGraph,
    TwitterApp, TwitterCard, TwitterPlayer,
};

use extractors::common::{html_utils, url_utils};

/// Extract standard HTML meta tags.
///
/// # Arguments
/// * `html` - HTML content to extract from
/// * `base_url` - Optional base URL for resolving relative URLs
///
/// # Examples
/// ```
/// let meta = metaglean::extract_meta(
///     r#"<title>Hello</title><meta name="description" content="A page">"#,
///     None,
/// ).unwrap();
/// assert_eq!(meta.title.as_deref(), Some("Hello"));
/// assert_eq!(meta.description.as_deref(), Some("A page"));
/// ```
pub fn extract_meta(html: &str, base_url: Option<&str>) -> Result<MetaTags> {
    extractors::meta::extract(html, base_url)
}

/// Extract Open Graph metadata.
///
/// # Arguments
/// * `html` - HTML content to extract from
/// * `base_url` - Optional base URL for resolving relative URLs
pub fn extract_opengraph(html: &str, base_url: Option<&str>) -> Result<OpenGraph> {
    extractors::social::extract_opengraph(html, base_url)
}

/// Extract Twitter Card metadata.
///
/// # Arguments
/// * `html` - HTML content to extract from
/// * `base_url` - Optional base URL for resolving relative URLs
pub fn extract_twitter(html: &str, base_url: Option<&str>) -> Result<TwitterCard> {
    extractors::social::extract_twitter(html, base_url)
}

/// Extract Twitter Card metadata, filling absent `title`, `description`,
/// `image` and `url` from Open Graph. Scalar fallbacks only.
pub fn extract_twitter_with_fallback(html: &str, base_url: Option<&str>) -> Result<TwitterCard> {
    extractors::social::extract_twitter_with_fallback(html, base_url)
}

/// Extract Dublin Core metadata (`DC.` / `dc:` / `DCTERMS.` meta names).
pub fn extract_dublin_core(html: &str, base_url: Option<&str>) -> Result<DublinCore> {
    extractors::dublin_core::extract(html, base_url)
}

/// Discover oEmbed endpoints from `<link rel="alternate">` tags. The
/// endpoints are surfaced, never fetched.
pub fn extract_oembed(html: &str, base_url: Option<&str>) -> Result<OEmbedDiscovery> {
    extractors::oembed::extract(html, base_url)
}

/// Extract rel-* link relationships from `<link>` and `<a>` tags, grouped
/// by lowercased rel token.
pub fn extract_rel_links(html: &str, base_url: Option<&str>) -> Result<RelLinks> {
    extractors::rel_links::extract(html, base_url)
}

/// Extract JSON-LD objects in source order. `@graph` containers and
/// top-level arrays flatten; malformed blocks are dropped silently.
pub fn extract_jsonld(html: &str, base_url: Option<&str>) -> Result<Vec<serde_json::Value>> {
    extractors::jsonld::extract(html, base_url)
}

/// Extract top-level HTML5 Microdata items.
///
/// # Arguments
/// * `html` - HTML content to extract from
/// * `base_url` - Optional base URL for resolving relative URLs
pub fn extract_microdata(html: &str, base_url: Option<&str>) -> Result<Vec<MicrodataItem>> {
    extractors::microdata::extract(html, base_url)
}

/// Parse all microformats v2 data: `items`, `rels` and `rel-urls`.
///
/// # Arguments
/// * `html` - HTML content to extract from
/// * `base_url` - Optional base URL for resolving relative URLs
pub fn extract_microformats(html: &str, base_url: Option<&str>) -> Result<MicroformatsDocument> {
    extractors::microformats::extract(html, base_url)
}

/// Extract h-card items (people and organizations).
pub fn extract_hcard(html: &str, base_url: Option<&str>) -> Result<Vec<MicroformatItem>> {
    extractors::microformats::extract_vocabulary(html, base_url, "h-card")
}

/// Extract h-entry items (posts and articles).
pub fn extract_hentry(html: &str, base_url: Option<&str>) -> Result<Vec<MicroformatItem>> {
    extractors::microformats::extract_vocabulary(html, base_url, "h-entry")
}

/// Extract h-event items.
pub fn extract_hevent(html: &str, base_url: Option<&str>) -> Result<Vec<MicroformatItem>> {
    extractors::microformats::extract_vocabulary(html, base_url, "h-event")
}

/// Extract h-review items.
pub fn extract_hreview(html: &str, base_url: Option<&str>) -> Result<Vec<MicroformatItem>> {
    extractors::microformats::extract_vocabulary(html, base_url, "h-review")
}

/// Extract h-recipe items.
pub fn extract_hrecipe(html: &str, base_url: Option<&str>) -> Result<Vec<MicroformatItem>> {
    extractors::microformats::extract_vocabulary(html, base_url, "h-recipe")
}

/// Extract h-product items.
pub fn extract_hproduct(html: &str, base_url: Option<&str>) -> Result<Vec<MicroformatItem>> {
    extractors::microformats::extract_vocabulary(html, base_url, "h-product")
}

/// Extract h-feed items.
pub fn extract_hfeed(html: &str, base_url: Option<&str>) -> Result<Vec<MicroformatItem>> {
    extractors::microformats::extract_vocabulary(html, base_url, "h-feed")
}

/// Extract h-adr items (physical addresses).
pub fn extract_hadr(html: &str, base_url: Option<&str>) -> Result<Vec<MicroformatItem>> {
    extractors::microformats::extract_vocabulary(html, base_url, "h-adr")
}

/// Extract h-geo items (geographic coordinates).
pub fn extract_hgeo(html: &str, base_url: Option<&str>) -> Result<Vec<MicroformatItem>> {
    extractors::microformats::extract_vocabulary(html, base_url, "h-geo")
}

/// Extract every supported format over a single parse.
///
/// The nine result slots are always present; an extractor that found
/// nothing (or failed internally) leaves its slot empty without affecting
/// the others. The Twitter slot has the Open Graph fallback applied.
///
/// # Arguments
/// * `html` - HTML content to extract from
/// * `base_url` - Optional base URL for resolving relative URLs
pub fn extract_all(html: &str, base_url: Option<&str>) -> Result<ExtractionResult> {
    let document = html_utils::parse_document(html);
    let base = url_utils::parse_base(base_url);
    let base = base.as_ref();

    let opengraph = extractors::social::opengraph::from_document(&document, base);
    let twitter = extractors::social::twitter::apply_opengraph_fallback(
        extractors::social::twitter::from_document(&document, base),
        &opengraph,
    );

    Ok(ExtractionResult {
        meta: extractors::meta::from_document(&document, base),
        opengraph,
        twitter,
        jsonld: extractors::jsonld::from_document(&document),
        microdata: extractors::microdata::from_document(&document, base),
        microformats: extractors::microformats::from_document(&document, base),
        dublin_core: extractors::dublin_core::from_document(&document),
        oembed: extractors::oembed::from_document(&document, base),
        rel_links: extractors::rel_links::from_document(&document, base),
    })
}
