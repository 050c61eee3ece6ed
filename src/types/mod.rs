//! Type definitions for metadata extraction.

pub mod dublin_core;
pub mod meta;
pub mod microdata;
pub mod microformats;
pub mod oembed;
pub mod rel_links;
pub mod result;
pub mod social;
