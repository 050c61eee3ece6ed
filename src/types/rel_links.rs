//! Types for rel-* link relationships.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One link grouped under a rel token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelLink {
    /// Link target, resolved.
    pub href: String,
    /// `hreflang` attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hreflang: Option<String>,
    /// `type` attribute.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
    /// `title` attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// `media` attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
    /// `sizes` attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizes: Option<String>,
}

/// Links grouped by lowercased rel token, in document order.
pub type RelLinks = IndexMap<String, Vec<RelLink>>;
