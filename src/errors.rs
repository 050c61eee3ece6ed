use thiserror::Error;

/// Errors the extraction machinery can surface.
///
/// Content-level faults (malformed markup, bad JSON-LD blocks, unresolvable
/// URLs, itemref cycles) are recovered in place and never become errors;
/// only failures in the extraction machinery itself are reported.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// A CSS selector used by an extractor failed to compile.
    #[error("Failed to parse HTML: {0}")]
    Parse(String),

    /// A URL string could not be parsed where a parse was required.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ExtractError>;
