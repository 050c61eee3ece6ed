//! Extractors for the structured data formats found in HTML documents.

pub mod common;

// Standard meta tags: title, description, canonical, icons, feeds, ...
pub mod meta;

// Social media: Open Graph and Twitter Cards
pub mod social;

// JSON-LD script blocks
pub mod jsonld;

// HTML5 Microdata (itemscope/itemprop/itemtype)
pub mod microdata;

// oEmbed endpoint discovery
pub mod oembed;

// Microformats v2 (h-card family)
pub mod microformats;

// Dublin Core meta names
pub mod dublin_core;

// rel-* link relationships
pub mod rel_links;
