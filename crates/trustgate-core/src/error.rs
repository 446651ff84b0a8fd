//! Typed errors for the library surface.
//!
//! The trust predicates themselves never fail; these only cover turning
//! untrusted input (CLI arguments, config) into policy inputs.

use thiserror::Error;

/// Building a [`UrlChain`](crate::origin::UrlChain) from strings failed.
#[derive(Debug, Error)]
pub enum ChainError {
    #[error("invalid URL at position {index} in chain: {url}")]
    InvalidUrl {
        index: usize,
        url: String,
        #[source]
        source: url::ParseError,
    },
}
