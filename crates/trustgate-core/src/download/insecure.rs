//! Insecure-download classification gate.
//!
//! Trusted origins short-circuit the host's mixed-content / file-type
//! classification and are reported as fully safe.

use serde::Serialize;

use crate::origin::{self, TrustMatch};

use super::record::DownloadRecord;

/// Outcome of insecure-download classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsecureDownloadStatus {
    /// Not yet determined.
    Unknown,
    /// Download is fully secure or trusted.
    Safe,
    /// User has validated an insecure download.
    Validated,
    /// Show a warning before keeping the download.
    Warn,
    /// Block the download, user may override.
    Block,
    /// Block without any UI.
    SilentBlock,
}

impl InsecureDownloadStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            InsecureDownloadStatus::Unknown => "unknown",
            InsecureDownloadStatus::Safe => "safe",
            InsecureDownloadStatus::Validated => "validated",
            InsecureDownloadStatus::Warn => "warn",
            InsecureDownloadStatus::Block => "block",
            InsecureDownloadStatus::SilentBlock => "silent_block",
        }
    }
}

/// The host's regular insecure-download classification.
pub trait InsecureDownloadClassifier {
    fn classify(&self, record: &dyn DownloadRecord) -> InsecureDownloadStatus;
}

impl<F> InsecureDownloadClassifier for F
where
    F: Fn(&dyn DownloadRecord) -> InsecureDownloadStatus,
{
    fn classify(&self, record: &dyn DownloadRecord) -> InsecureDownloadStatus {
        self(record)
    }
}

/// Classify `record`, skipping the host classifier entirely for trusted origins.
pub fn insecure_download_status(
    record: &dyn DownloadRecord,
    classifier: &dyn InsecureDownloadClassifier,
) -> InsecureDownloadStatus {
    if let Some(matched) = origin::trust_match(record.url_chain()) {
        log_bypass(&matched);
        return InsecureDownloadStatus::Safe;
    }
    classifier.classify(record)
}

fn log_bypass(matched: &TrustMatch) {
    match matched {
        TrustMatch::Domain { host } => {
            tracing::info!(%host, "skipping insecure download check for trusted domain");
        }
        TrustMatch::Repository { url, .. } => {
            tracing::info!(%url, "skipping insecure download check for trusted repository");
        }
    }
}
