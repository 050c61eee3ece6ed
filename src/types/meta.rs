//! Types for standard HTML meta tags.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An icon link (`rel="icon"`, `rel="apple-touch-icon"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconLink {
    /// The link's `rel` value, lowercased.
    pub rel: String,
    /// Icon URL, resolved against the base URL when one is available.
    pub href: String,
    /// The `sizes` attribute, e.g. `32x32`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizes: Option<String>,
    /// MIME type of the icon.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub icon_type: Option<String>,
}

/// A language-alternate link (`rel="alternate" hreflang=...`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HreflangLink {
    /// Target language tag.
    pub hreflang: String,
    /// Alternate document URL.
    pub href: String,
}

/// A syndication feed link (`rel="alternate" type="application/rss+xml"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedLink {
    /// Feed MIME type.
    #[serde(rename = "type")]
    pub feed_type: String,
    /// Feed URL.
    pub href: String,
    /// Human-readable feed title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Standard HTML meta tags.
///
/// Scalar keys keep the first non-empty occurrence; list keys append in
/// document order. Unknown un-namespaced `<meta name>` keys pass through
/// into `extra` with their literal key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetaTags {
    /// `<title>` text, first non-empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// `<meta name="description">`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `<meta name="keywords">`, comma-split and trimmed.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub keywords: Vec<String>,
    /// `<meta name="author">`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// `<meta name="generator">`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generator: Option<String>,
    /// `<meta name="viewport">`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewport: Option<String>,
    /// `<meta name="robots">`, raw directive string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub robots: Option<String>,
    /// `<meta name="theme-color">`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<String>,
    /// `<meta name="application-name">`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_name: Option<String>,
    /// `<meta name="referrer">`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
    /// Character set from `<meta charset>` or an http-equiv content type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charset: Option<String>,
    /// `<meta http-equiv="refresh">` content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh: Option<String>,
    /// `<html lang>` value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// `<link rel="canonical">`, resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    /// `<link rel="shortlink">`, resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortlink: Option<String>,
    /// `<link rel="prev">`, resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    /// `<link rel="next">`, resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    /// Icon links, document order.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub icons: Vec<IconLink>,
    /// Language alternates, document order.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub hreflang: Vec<HreflangLink>,
    /// Feed links, document order.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub feeds: Vec<FeedLink>,

    /// `<meta name="google-site-verification">`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_site_verification: Option<String>,
    /// `<meta name="facebook-domain-verification">`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook_domain_verification: Option<String>,
    /// `<meta name="yandex-verification">`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yandex_verification: Option<String>,
    /// `<meta name="p:domain_verify">` (Pinterest).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p_domain_verify: Option<String>,
    /// `<meta name="msvalidate.01">` (Bing).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msvalidate_01: Option<String>,

    /// Unknown `<meta name>` keys, passed through first-wins.
    #[serde(flatten, default)]
    pub extra: IndexMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_meta_serializes_to_empty_object() {
        let meta = MetaTags::default();
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn test_extra_keys_flatten() {
        let mut meta = MetaTags::default();
        meta.extra.insert("color-scheme".to_string(), "dark".to_string());
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["color-scheme"], "dark");
    }
}
