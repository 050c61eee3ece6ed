//! Types for HTML5 Microdata.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A microdata item: an element carrying `itemscope`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MicrodataItem {
    /// Vocabulary types from `itemtype`, whitespace-split.
    #[serde(rename = "type", skip_serializing_if = "Vec::is_empty", default)]
    pub item_type: Vec<String>,

    /// Global identifier from `itemid`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Properties collected from `itemprop` descendants, document order.
    pub properties: IndexMap<String, Vec<MicrodataValue>>,
}

/// Value of a microdata property: a scalar or a nested item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MicrodataValue {
    /// Text content, attribute value, or resolved URL.
    Text(String),
    /// Nested item (`itemprop` element that also carries `itemscope`).
    Item(Box<MicrodataItem>),
}

impl MicrodataItem {
    /// Append a scalar value under a property name.
    pub fn add_text(&mut self, name: &str, value: String) {
        self.properties
            .entry(name.to_string())
            .or_default()
            .push(MicrodataValue::Text(value));
    }

    /// Append a nested item under a property name.
    pub fn add_item(&mut self, name: &str, item: MicrodataItem) {
        self.properties
            .entry(name.to_string())
            .or_default()
            .push(MicrodataValue::Item(Box::new(item)));
    }
}
