//! Types for Dublin Core metadata.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Dublin Core metadata from `DC.` / `dc:` / `DCTERMS.` meta names.
///
/// `contributor`, `creator`, `subject`, `language` and `rights` collect
/// every occurrence; all other elements keep the first non-empty value.
/// Unrecognized suffixes pass through `extra` with their lowercased key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DublinCore {
    /// `DC.title`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// `DC.description`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `DC.publisher`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    /// `DC.date`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// `DC.type`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    /// `DC.format`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// `DC.identifier`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// `DC.source`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// `DC.relation`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relation: Option<String>,
    /// `DC.coverage`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage: Option<String>,

    /// `DC.creator`, one entry per occurrence.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub creator: Vec<String>,
    /// `DC.contributor`, one entry per occurrence.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub contributor: Vec<String>,
    /// `DC.subject`, one entry per occurrence.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub subject: Vec<String>,
    /// `DC.language`, one entry per occurrence.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub language: Vec<String>,
    /// `DC.rights`, one entry per occurrence.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub rights: Vec<String>,

    /// Unrecognized Dublin Core suffixes, first-wins.
    #[serde(flatten, default)]
    pub extra: IndexMap<String, String>,
}
