//! JSON-LD extraction.
//!
//! Collects every `<script type="application/ld+json">` block, parses it,
//! and flattens `@graph` containers and top-level arrays into a flat list
//! of objects in source order. Malformed blocks are dropped silently; one
//! bad block never affects the others.

use scraper::Html;
use serde_json::Value;

use crate::errors::Result;
use crate::extractors::common::html_utils;


/// Extract all JSON-LD objects from HTML.
///
/// # Arguments
/// * `html` - The HTML content
/// * `_base_url` - Accepted for API symmetry; JSON-LD is kept literal
pub fn extract(html: &str, _base_url: Option<&str>) -> Result<Vec<Value>> {
    let document = html_utils::parse_document(html);
    Ok(from_document(&document))
}

/// Extract JSON-LD objects from an already-parsed document.
pub(crate) fn from_document(document: &Html) -> Vec<Value> {
    let mut objects = Vec::new();

    let Ok(selector) = html_utils::selector("script[type]") else {
        return objects;
    };

    for script in document.select(&selector) {
        let Some(script_type) = html_utils::get_attr(&script, "type") else {
            continue;
        };
        if !is_jsonld_type(&script_type) {
            continue;
        }

        let text: String = script.text().collect();
        let json_text = strip_cdata(text.trim());
        if json_text.is_empty() {
            continue;
        }

        // A block that fails to parse is dropped; the others still count.
        let Ok(value) = serde_json::from_str::<Value>(json_text) else {
            continue;
        };
        flatten_into(&mut objects, value);
    }

    objects
}

/// Match `application/ld+json` case-insensitively, ignoring parameters
/// such as `; charset=utf-8`.
fn is_jsonld_type(script_type: &str) -> bool {
    script_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .eq_ignore_ascii_case("application/ld+json")
}

/// Strip an optional `<![CDATA[ ... ]]>` wrapper left in the raw text.
fn strip_cdata(text: &str) -> &str {
    let Some(inner) = text.strip_prefix("<![CDATA[") else {
        return text;
    };
    inner.strip_suffix("]]>").unwrap_or(inner).trim()
}

/// Top-level dispatch: `@graph` containers and arrays flatten into
/// independent objects; anything else is emitted as-is. Nested values are
/// never flattened.
fn flatten_into(objects: &mut Vec<Value>, value: Value) {
    match value {
        Value::Object(mut map) => {
            if matches!(map.get("@graph"), Some(Value::Array(_))) {
                if let Some(Value::Array(graph)) = map.remove("@graph") {
                    objects.extend(graph);
                }
            } else {
                objects.push(Value::Object(map));
            }
        }
        Value::Array(items) => objects.extend(items),
        other => objects.push(other),
    }
}
