//! Types for microformats v2 items and the aggregate document.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A parsed microformats v2 item (an `h-*` root and its properties).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MicroformatItem {
    /// Root class names (`h-card`, `h-entry`, ...), document order.
    #[serde(rename = "type")]
    pub item_type: Vec<String>,

    /// Properties keyed by prefix-stripped name, document order.
    /// Values are always lists, even for a single occurrence.
    pub properties: IndexMap<String, Vec<PropertyValue>>,

    /// Nested microformat roots found inside this one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<MicroformatItem>>,

    /// Scalar rendering of this item when it stands as a property value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Root element's `lang` attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    /// Root element's `id` attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Root element's `shape` attribute (`<area>` roots).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
}

impl MicroformatItem {
    /// Append a value under a property name, creating the list on first use.
    pub fn add_property(&mut self, name: &str, value: PropertyValue) {
        self.properties
            .entry(name.to_string())
            .or_default()
            .push(value);
    }

    /// Whether any value exists for a property name.
    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Append a nested item to `children`.
    pub fn add_child(&mut self, child: MicroformatItem) {
        self.children.get_or_insert_with(Vec::new).push(child);
    }
}

/// Value of a microformat property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Embedded markup from an `e-*` property.
    Embedded {
        /// Plain text content, trimmed.
        value: String,
        /// Serialized inner HTML, untrimmed.
        html: String,
    },
    /// Nested microformat item.
    Item(Box<MicroformatItem>),
    /// Plain text, URL, or composed datetime.
    Text(String),
}

/// Metadata attached to one href in the `rel-urls` map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelUrl {
    /// All rel tokens pointing at this URL, deduplicated.
    pub rels: Vec<String>,
    /// Anchor text, when the link had any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// `hreflang` attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hreflang: Option<String>,
    /// `media` attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
    /// `type` attribute.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
    /// `title` attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// `lang` attribute of the linking element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

/// The aggregate microformats parse of a document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MicroformatsDocument {
    /// Top-level items, document order.
    pub items: Vec<MicroformatItem>,
    /// rel token → resolved hrefs, duplicates removed in order.
    pub rels: IndexMap<String, Vec<String>>,
    /// Resolved href → link metadata.
    #[serde(rename = "rel-urls")]
    pub rel_urls: IndexMap<String, RelUrl>,
}
