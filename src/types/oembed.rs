//! Types for oEmbed endpoint discovery.

use serde::{Deserialize, Serialize};

/// One discovered oEmbed endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OEmbedEndpoint {
    /// Endpoint URL, resolved.
    pub href: String,
    /// The link's `title` attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// oEmbed discovery links found on a page.
///
/// One endpoint per flavor; the first matching link of each wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OEmbedDiscovery {
    /// `<link rel="alternate" type="application/json+oembed">`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json: Option<OEmbedEndpoint>,
    /// `<link rel="alternate" type="text/xml+oembed">`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xml: Option<OEmbedEndpoint>,
}

impl OEmbedDiscovery {
    /// Whether any endpoint was discovered.
    pub fn has_endpoints(&self) -> bool {
        self.json.is_some() || self.xml.is_some()
    }
}
