pub mod config;
pub mod error;
pub mod logging;

pub mod download;
pub mod extensions;
pub mod origin;

#[cfg(test)]
mod test_support;

pub use error::ChainError;
pub use extensions::{builtin_extension_ids, can_uninstall, display_name, is_builtin_extension};
pub use origin::{is_trusted_download_origin, trust_match, TrustMatch, UrlChain};
