//! `trustgate check <url>...` – evaluate a download URL chain.

use anyhow::Result;
use serde::Serialize;
use trustgate_core::download::{
    insecure_download_status, DownloadInfo, DownloadProtectionDelegate, DownloadRecord,
    InsecureDownloadStatus, Profile,
};
use trustgate_core::{trust_match, TrustMatch, UrlChain};

/// Everything the host would decide for one download.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub effective_url: Option<String>,
    pub trusted: bool,
    pub matched: Option<TrustMatch>,
    /// `unknown` means the host's own classification would run.
    pub insecure_status: InsecureDownloadStatus,
    pub safe_browsing_enabled: bool,
    pub check_download_url: bool,
    pub check_client_download: bool,
}

impl CheckReport {
    pub fn evaluate(item: &DownloadInfo) -> Self {
        let delegate = DownloadProtectionDelegate::new();
        // The host classifier is out of scope here; untrusted downloads report Unknown.
        let host_classifier = |_: &dyn DownloadRecord| InsecureDownloadStatus::Unknown;
        let matched = trust_match(item.url_chain());

        Self {
            effective_url: item.chain.effective_url().map(|u| u.to_string()),
            trusted: matched.is_some(),
            matched,
            insecure_status: insecure_download_status(item, &host_classifier),
            safe_browsing_enabled: item.profile().is_some_and(|p| p.safe_browsing_enabled),
            check_download_url: delegate.should_check_download_url(item),
            check_client_download: delegate.should_check_client_download(item),
        }
    }
}

fn yes_no(b: bool) -> &'static str {
    if b {
        "yes"
    } else {
        "no"
    }
}

pub fn run_check(urls: &[String], profile: Profile, json: bool) -> Result<()> {
    let chain = UrlChain::parse(urls)?;
    let item = DownloadInfo::new(chain, Some(profile));
    let report = CheckReport::evaluate(&item);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{:<22} {}",
        "effective url:",
        report.effective_url.as_deref().unwrap_or("-")
    );
    let rule = match &report.matched {
        Some(TrustMatch::Domain { host }) => format!("trusted domain ({host})"),
        Some(TrustMatch::Repository { host, .. }) => format!("trusted repository on {host}"),
        None => "-".to_string(),
    };
    println!("{:<22} {}", "trusted:", yes_no(report.trusted));
    println!("{:<22} {}", "matched rule:", rule);
    println!("{:<22} {}", "insecure status:", report.insecure_status.as_str());
    println!(
        "{:<22} {}",
        "safe browsing pref:",
        yes_no(report.safe_browsing_enabled)
    );
    println!(
        "{:<22} {}",
        "check download url:",
        yes_no(report.check_download_url)
    );
    println!(
        "{:<22} {}",
        "check client dl:",
        yes_no(report.check_client_download)
    );
    Ok(())
}
