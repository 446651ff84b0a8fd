//! Host download call sites that consult the origin trust policy.
//!
//! - [`insecure`]: insecure-download classification (trusted → safe)
//! - [`protection`]: Safe Browsing URL and client download gating

pub mod insecure;
pub mod protection;
mod record;

pub use insecure::{insecure_download_status, InsecureDownloadClassifier, InsecureDownloadStatus};
pub use protection::DownloadProtectionDelegate;
pub use record::{DownloadInfo, DownloadRecord, Profile};
