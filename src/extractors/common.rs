//! Shared helpers for all extractors.

/// Utility functions for URL resolution.
pub mod url_utils {
    use url::Url;

    /// Parse a caller-supplied base URL.
    ///
    /// An unparseable base is treated as absent: relative references are
    /// then surfaced unresolved instead of failing the extraction.
    pub fn parse_base(base_url: Option<&str>) -> Option<Url> {
        base_url.and_then(|b| Url::parse(b).ok())
    }

    /// Resolve a (possibly relative) reference against a base URL.
    ///
    /// Pure function of `(base, reference)`: when no base is available or
    /// the join fails, the reference is returned unchanged.
    pub fn resolve(base: Option<&Url>, reference: &str) -> String {
        match base {
            Some(b) => b
                .join(reference)
                .map(String::from)
                .unwrap_or_else(|_| reference.to_string()),
            None => reference.to_string(),
        }
    }
}

/// Utility functions for HTML parsing.
pub mod html_utils {
    use crate::errors::{ExtractError, Result};
    use scraper::{ElementRef, Html, Selector};

    /// Parse HTML into a document tree.
    ///
    /// The parse is permissive: unclosed tags, mismatched quotes, stray
    /// angle brackets and unknown elements all produce a usable tree.
    pub fn parse_document(html: &str) -> Html {
        Html::parse_document(html)
    }

    /// Compile a CSS selector, reporting an error if invalid.
    pub fn selector(selector: &str) -> Result<Selector> {
        Selector::parse(selector).map_err(|e| {
            ExtractError::Parse(format!("Invalid selector '{}': {:?}", selector, e))
        })
    }

    /// Get an attribute value from an element.
    pub fn get_attr(element: &ElementRef, attr: &str) -> Option<String> {
        element.value().attr(attr).map(String::from)
    }

    /// Get an attribute value, trimmed, dropping empty results.
    pub fn get_attr_nonempty(element: &ElementRef, attr: &str) -> Option<String> {
        element
            .value()
            .attr(attr)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(String::from)
    }

    /// Extract trimmed text content from an element's subtree, dropping
    /// empty results.
    pub fn extract_text(element: &ElementRef) -> Option<String> {
        let text = element.text().collect::<String>();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Text content of an element's subtree with whitespace runs collapsed
    /// to single spaces and the ends trimmed.
    pub fn collapsed_text(element: &ElementRef) -> String {
        let text = element.text().collect::<String>();
        collapse_whitespace(&text)
    }

    /// Collapse internal whitespace runs to single spaces and trim.
    pub fn collapse_whitespace(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn base(s: &str) -> Option<Url> {
        Url::parse(s).ok()
    }

    #[test]
    fn test_resolve_relative() {
        let b = base("https://example.com/page");
        assert_eq!(
            url_utils::resolve(b.as_ref(), "../other"),
            "https://example.com/other"
        );
    }

    #[test]
    fn test_resolve_absolute_reference() {
        let b = base("https://example.com/");
        assert_eq!(
            url_utils::resolve(b.as_ref(), "https://other.com/"),
            "https://other.com/"
        );
    }

    #[test]
    fn test_resolve_no_base_passes_through() {
        assert_eq!(url_utils::resolve(None, "/relative/path"), "/relative/path");
    }

    #[test]
    fn test_resolve_encodes_spaces() {
        let b = base("https://example.com");
        let resolved = url_utils::resolve(b.as_ref(), "/path with space");
        assert!(!resolved.contains(' '));
        assert!(resolved.contains("%20"));
    }

    #[test]
    fn test_resolve_with_fragment() {
        let b = base("https://example.com");
        assert_eq!(
            url_utils::resolve(b.as_ref(), "/page#section"),
            "https://example.com/page#section"
        );
    }

    #[test]
    fn test_parse_base_invalid_is_absent() {
        assert!(url_utils::parse_base(Some("not-a-url")).is_none());
        assert!(url_utils::parse_base(Some("")).is_none());
        assert!(url_utils::parse_base(None).is_none());
        assert!(url_utils::parse_base(Some("https://example.com")).is_some());
    }

    #[test]
    fn test_extract_text_with_whitespace() {
        let doc = html_utils::parse_document("<p>  Hello World  </p>");
        let sel = html_utils::selector("p").unwrap();
        let element = doc.select(&sel).next().unwrap();
        assert_eq!(
            html_utils::extract_text(&element),
            Some("Hello World".to_string())
        );
    }

    #[test]
    fn test_extract_text_empty() {
        let doc = html_utils::parse_document("<p>   </p>");
        let sel = html_utils::selector("p").unwrap();
        let element = doc.select(&sel).next().unwrap();
        assert_eq!(html_utils::extract_text(&element), None);
    }

    #[test]
    fn test_collapsed_text() {
        let doc = html_utils::parse_document("<p>a\n  b\t\tc </p>");
        let sel = html_utils::selector("p").unwrap();
        let element = doc.select(&sel).next().unwrap();
        assert_eq!(html_utils::collapsed_text(&element), "a b c");
    }

    #[test]
    fn test_get_attr() {
        let doc = html_utils::parse_document(r#"<a href="https://example.com">Link</a>"#);
        let sel = html_utils::selector("a").unwrap();
        let element = doc.select(&sel).next().unwrap();
        assert_eq!(
            html_utils::get_attr(&element, "href"),
            Some("https://example.com".to_string())
        );
        assert_eq!(html_utils::get_attr(&element, "src"), None);
    }

    #[test]
    fn test_get_attr_nonempty() {
        let doc = html_utils::parse_document(r#"<img alt="  " src="x.png">"#);
        let sel = html_utils::selector("img").unwrap();
        let element = doc.select(&sel).next().unwrap();
        assert_eq!(html_utils::get_attr_nonempty(&element, "alt"), None);
        assert_eq!(
            html_utils::get_attr_nonempty(&element, "src"),
            Some("x.png".to_string())
        );
    }

    #[test]
    fn test_selector_invalid_syntax() {
        assert!(html_utils::selector("div[[[invalid").is_err());
        assert!(html_utils::selector("").is_err());
    }
}
