//! Social media metadata: Open Graph and Twitter Cards.
//!
//! These namespaces control how links unfurl when shared on social
//! platforms and are the second-most common structured data after plain
//! meta tags.

pub mod opengraph;
pub mod twitter;

#[cfg(test)]
mod twitter_tests;

pub use opengraph::extract as extract_opengraph;
pub use twitter::{
    extract as extract_twitter, extract_with_fallback as extract_twitter_with_fallback,
};
