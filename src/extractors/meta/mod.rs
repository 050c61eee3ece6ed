//! Standard HTML meta tags.
//!
//! Extracts the basic metadata virtually all websites carry: title,
//! description, keywords, canonical URL, robots directives, icons, feeds,
//! language alternates and site-verification tokens.

use scraper::Html;
use url::Url;

use crate::errors::Result;
use crate::extractors::common::{html_utils, url_utils};
use crate::types::meta::{FeedLink, HreflangLink, IconLink, MetaTags};


/// Extract all standard meta tags from HTML.
///
/// # Arguments
/// * `html` - The HTML content
/// * `base_url` - Optional base URL for resolving relative URLs
pub fn extract(html: &str, base_url: Option<&str>) -> Result<MetaTags> {
    let document = html_utils::parse_document(html);
    let base = url_utils::parse_base(base_url);
    Ok(from_document(&document, base.as_ref()))
}

/// Extract meta tags from an already-parsed document.
pub(crate) fn from_document(document: &Html, base: Option<&Url>) -> MetaTags {
    let mut meta = MetaTags::default();

    // Title: first non-empty text content wins
    if let Ok(selector) = html_utils::selector("title") {
        meta.title = document
            .select(&selector)
            .find_map(|e| html_utils::extract_text(&e));
    }

    // Charset from <meta charset>
    if let Ok(selector) = html_utils::selector("meta[charset]") {
        meta.charset = document
            .select(&selector)
            .next()
            .and_then(|e| html_utils::get_attr_nonempty(&e, "charset"));
    }

    // http-equiv tags: content-type charset fallback and refresh
    if let Ok(selector) = html_utils::selector("meta[http-equiv][content]") {
        for element in document.select(&selector) {
            let Some(equiv) = html_utils::get_attr(&element, "http-equiv") else {
                continue;
            };
            let Some(content) = html_utils::get_attr_nonempty(&element, "content") else {
                continue;
            };
            if equiv.eq_ignore_ascii_case("content-type") && meta.charset.is_none() {
                meta.charset = content
                    .split("charset=")
                    .nth(1)
                    .map(|s| s.split(';').next().unwrap_or(s).trim().to_string())
                    .filter(|s| !s.is_empty());
            } else if equiv.eq_ignore_ascii_case("refresh") && meta.refresh.is_none() {
                meta.refresh = Some(content);
            }
        }
    }

    // Document language from the html element
    if let Ok(selector) = html_utils::selector("html[lang]") {
        meta.language = document
            .select(&selector)
            .next()
            .and_then(|e| html_utils::get_attr_nonempty(&e, "lang"));
    }

    // Named meta tags
    if let Ok(selector) = html_utils::selector("meta[name][content]") {
        for element in document.select(&selector) {
            let Some(name) = html_utils::get_attr(&element, "name") else {
                continue;
            };
            let Some(content) = html_utils::get_attr_nonempty(&element, "content") else {
                continue;
            };
            apply_named_tag(&mut meta, &name.to_lowercase(), content);
        }
    }

    // Link tags
    if let Ok(selector) = html_utils::selector("link[rel][href]") {
        for element in document.select(&selector) {
            apply_link_tag(&mut meta, &element, base);
        }
    }

    meta
}

/// Route one `<meta name content>` pair into the record. Scalar keys keep
/// the first occurrence; `keywords` appends.
fn apply_named_tag(meta: &mut MetaTags, name: &str, content: String) {
    fn set(slot: &mut Option<String>, content: String) {
        if slot.is_none() {
            *slot = Some(content);
        }
    }

    match name {
        "description" => set(&mut meta.description, content),
        "keywords" => meta.keywords.extend(
            content
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from),
        ),
        "author" => set(&mut meta.author, content),
        "generator" => set(&mut meta.generator, content),
        "viewport" => set(&mut meta.viewport, content),
        "robots" => set(&mut meta.robots, content),
        "theme-color" => set(&mut meta.theme_color, content),
        "application-name" => set(&mut meta.application_name, content),
        "referrer" => set(&mut meta.referrer, content),
        // Site verification tokens, normalized to snake_case keys
        "google-site-verification" => set(&mut meta.google_site_verification, content),
        "facebook-domain-verification" => set(&mut meta.facebook_domain_verification, content),
        "yandex-verification" => set(&mut meta.yandex_verification, content),
        "p:domain_verify" => set(&mut meta.p_domain_verify, content),
        "msvalidate.01" => set(&mut meta.msvalidate_01, content),
        _ => {
            // Namespaced names (twitter:*, DC.*, og via property=) belong to
            // other extractors; everything else passes through literally.
            if !name.contains(':') && !name.contains('.') {
                meta.extra.entry(name.to_string()).or_insert(content);
            }
        }
    }
}

/// Route one `<link rel href>` element into the record.
fn apply_link_tag(meta: &mut MetaTags, element: &scraper::ElementRef, base: Option<&Url>) {
    let Some(rel) = html_utils::get_attr(element, "rel") else {
        return;
    };
    let Some(href) = html_utils::get_attr_nonempty(element, "href") else {
        return;
    };

    let rel_lower = rel.to_lowercase();
    let tokens: Vec<&str> = rel_lower.split_whitespace().collect();
    if tokens.is_empty() {
        return;
    }
    let resolved = url_utils::resolve(base, &href);

    if tokens.contains(&"canonical") && meta.canonical.is_none() {
        meta.canonical = Some(resolved.clone());
    }
    if tokens.contains(&"shortlink") && meta.shortlink.is_none() {
        meta.shortlink = Some(resolved.clone());
    }
    if tokens.contains(&"prev") && meta.prev.is_none() {
        meta.prev = Some(resolved.clone());
    }
    if tokens.contains(&"next") && meta.next.is_none() {
        meta.next = Some(resolved.clone());
    }

    if tokens
        .iter()
        .any(|t| matches!(*t, "icon" | "apple-touch-icon" | "mask-icon"))
    {
        meta.icons.push(IconLink {
            rel: tokens.join(" "),
            href: resolved.clone(),
            sizes: html_utils::get_attr_nonempty(element, "sizes"),
            icon_type: html_utils::get_attr_nonempty(element, "type"),
        });
    }

    if tokens.contains(&"alternate") {
        let link_type = html_utils::get_attr_nonempty(element, "type");
        let is_feed = link_type.as_deref().is_some_and(|t| {
            let t = t.to_lowercase();
            t.contains("rss") || t.contains("atom")
        });

        if is_feed {
            meta.feeds.push(FeedLink {
                feed_type: link_type.unwrap_or_default(),
                href: resolved,
                title: html_utils::get_attr_nonempty(element, "title"),
            });
        } else if let Some(hreflang) = html_utils::get_attr_nonempty(element, "hreflang") {
            meta.hreflang.push(HreflangLink {
                hreflang,
                href: resolved,
            });
        }
    }
}
