//! Safe Browsing download-protection gating.
//!
//! Trusted origins skip both the URL reputation lookup and the client-side
//! binary analysis, whatever the profile's Safe Browsing preference says.
//! Everything else falls back to that preference.

use crate::origin::{self, TrustMatch};

use super::record::DownloadRecord;

/// Desktop download-protection delegate.
#[derive(Debug, Clone, Copy, Default)]
pub struct DownloadProtectionDelegate;

impl DownloadProtectionDelegate {
    pub fn new() -> Self {
        Self
    }

    /// Whether the download URL should be sent for a reputation check.
    pub fn should_check_download_url(&self, item: &dyn DownloadRecord) -> bool {
        if let Some(matched) = origin::trust_match(item.url_chain()) {
            log_bypass(&matched, "url");
            return false;
        }
        safe_browsing_enabled_for_download_profile(item)
    }

    /// Whether the downloaded content should go through client download analysis.
    pub fn should_check_client_download(&self, item: &dyn DownloadRecord) -> bool {
        if let Some(matched) = origin::trust_match(item.url_chain()) {
            log_bypass(&matched, "client_download");
            return false;
        }
        safe_browsing_enabled_for_download_profile(item)
    }
}

fn safe_browsing_enabled_for_download_profile(item: &dyn DownloadRecord) -> bool {
    item.profile().is_some_and(|p| p.safe_browsing_enabled)
}

fn log_bypass(matched: &TrustMatch, check: &'static str) {
    tracing::info!(
        check,
        subject = matched.audit_subject(),
        "skipping safe browsing check for trusted download origin"
    );
}
