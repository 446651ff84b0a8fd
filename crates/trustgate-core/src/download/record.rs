//! Host-owned download record as seen by the policy.

use url::Url;

use crate::origin::UrlChain;

/// Profile preferences consulted when a download is not trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub safe_browsing_enabled: bool,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            safe_browsing_enabled: true,
        }
    }
}

/// Read-only view of a download the host is deciding about.
pub trait DownloadRecord {
    /// Redirect history; the last entry is the effective download URL.
    fn url_chain(&self) -> &[Url];

    /// Profile the download belongs to. `None` when the profile has gone away.
    fn profile(&self) -> Option<&Profile>;
}

/// Plain owned download record, for callers that have no richer host type.
#[derive(Debug, Clone, Default)]
pub struct DownloadInfo {
    pub chain: UrlChain,
    pub profile: Option<Profile>,
}

impl DownloadInfo {
    pub fn new(chain: UrlChain, profile: Option<Profile>) -> Self {
        Self { chain, profile }
    }
}

impl DownloadRecord for DownloadInfo {
    fn url_chain(&self) -> &[Url] {
        self.chain.as_slice()
    }

    fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }
}
