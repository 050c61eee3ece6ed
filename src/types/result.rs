//! The aggregate result document returned by `extract_all`.

use serde::{Deserialize, Serialize};

use super::dublin_core::DublinCore;
use super::meta::MetaTags;
use super::microdata::MicrodataItem;
use super::microformats::MicroformatsDocument;
use super::oembed::OEmbedDiscovery;
use super::rel_links::RelLinks;
use super::social::{OpenGraph, TwitterCard};

/// Everything extracted from one document.
///
/// All nine slots are always present in serialized output; extractors that
/// found nothing leave their slot empty rather than absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Standard meta tags.
    pub meta: MetaTags,
    /// Open Graph metadata.
    pub opengraph: OpenGraph,
    /// Twitter Card metadata, with Open Graph fallback applied.
    pub twitter: TwitterCard,
    /// JSON-LD objects, source order.
    pub jsonld: Vec<serde_json::Value>,
    /// Top-level microdata items.
    pub microdata: Vec<MicrodataItem>,
    /// Microformats v2 aggregate.
    pub microformats: MicroformatsDocument,
    /// Dublin Core metadata.
    pub dublin_core: DublinCore,
    /// oEmbed discovery links.
    pub oembed: OEmbedDiscovery,
    /// Links grouped by rel token.
    pub rel_links: RelLinks,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_nine_keys_always_serialized() {
        let result = ExtractionResult::default();
        let json = serde_json::to_value(&result).unwrap();
        let map = json.as_object().unwrap();
        for key in [
            "meta",
            "opengraph",
            "twitter",
            "jsonld",
            "microdata",
            "microformats",
            "dublin_core",
            "oembed",
            "rel_links",
        ] {
            assert!(map.contains_key(key), "missing slot: {key}");
        }
        assert_eq!(map.len(), 9);
    }
}
