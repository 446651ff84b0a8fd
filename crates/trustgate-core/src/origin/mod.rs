//! Download-origin trust policy.
//!
//! Decides from a download's URL chain whether it comes from the vendor's own
//! domains or from the vendor repository on a source-hosting site. Only the
//! last URL of the chain (the effective download URL) is considered; an empty
//! chain or a URL without a host is untrusted.
//!
//! Both host consumers (insecure-download classification and Safe Browsing
//! gating) go through [`trust_match`] so they can never disagree.

mod chain;
mod rules;

pub use chain::UrlChain;
pub use rules::{
    TrustedDomainRule, TrustedRepositoryRule, DOMAIN_RULE, REPOSITORY_RULE,
    TRUSTED_REPOSITORY_HOSTS, TRUSTED_REPOSITORY_PATH, TRUSTED_ROOT_DOMAIN,
};

use serde::Serialize;
use url::Url;

/// Which rule made a download trusted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum TrustMatch {
    /// Host is the vendor root domain or one of its subdomains.
    Domain { host: String },
    /// Host is a source-hosting domain and the path is inside the vendor repository.
    Repository { host: String, url: String },
}

impl TrustMatch {
    /// Value to put in bypass audit logs: the host for domain matches, the
    /// full URL for repository matches.
    pub fn audit_subject(&self) -> &str {
        match self {
            TrustMatch::Domain { host } => host,
            TrustMatch::Repository { url, .. } => url,
        }
    }
}

/// Evaluate the trust rules against the effective URL of `chain`.
pub fn trust_match(chain: &[Url]) -> Option<TrustMatch> {
    let download_url = chain.last()?;
    let host = download_url.host_str()?;

    if DOMAIN_RULE.matches(host) {
        return Some(TrustMatch::Domain {
            host: host.to_string(),
        });
    }

    if REPOSITORY_RULE.matches(host, download_url.path()) {
        return Some(TrustMatch::Repository {
            host: host.to_string(),
            url: download_url.to_string(),
        });
    }

    None
}

/// True when security checks may be bypassed for a download with this chain.
pub fn is_trusted_download_origin(chain: &[Url]) -> bool {
    trust_match(chain).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(urls: &[&str]) -> UrlChain {
        UrlChain::parse(urls).unwrap()
    }

    #[test]
    fn empty_chain_is_untrusted() {
        assert!(!is_trusted_download_origin(&[]));
        assert_eq!(trust_match(&[]), None);
    }

    #[test]
    fn root_domain_and_subdomains_are_trusted() {
        for url in [
            "https://browseros.com/installer.exe",
            "http://browseros.com/installer.exe",
            "https://files.browseros.com/BrowserOS.dmg",
            "https://a.b.browseros.com:8443/x",
            "https://BrowserOS.com/upper",
        ] {
            assert!(is_trusted_download_origin(chain(&[url]).as_slice()), "{url}");
        }
    }

    #[test]
    fn lookalike_hosts_are_untrusted() {
        for url in [
            "https://evilbrowseros.com/x.exe",
            "https://notbrowseros.com/x.exe",
            "https://browseros.com.evil.net/x.exe",
            "https://browseros.co/x.exe",
        ] {
            assert!(!is_trusted_download_origin(chain(&[url]).as_slice()), "{url}");
        }
    }

    #[test]
    fn only_last_url_counts() {
        let redirected_away = chain(&["https://browseros.com/x", "https://cdn.example.com/x"]);
        assert!(!is_trusted_download_origin(redirected_away.as_slice()));

        let redirected_in = chain(&["https://cdn.example.com/x", "https://browseros.com/installer.exe"]);
        assert_eq!(
            trust_match(redirected_in.as_slice()),
            Some(TrustMatch::Domain {
                host: "browseros.com".to_string()
            })
        );
    }

    #[test]
    fn repository_paths_are_trusted_on_hosting_domains() {
        let raw = chain(&["https://raw.githubusercontent.com/browseros-ai/BrowserOS/main/tool.sh"]);
        assert_eq!(
            trust_match(raw.as_slice()),
            Some(TrustMatch::Repository {
                host: "raw.githubusercontent.com".to_string(),
                url: "https://raw.githubusercontent.com/browseros-ai/BrowserOS/main/tool.sh"
                    .to_string(),
            })
        );

        let deep = chain(&[
            "https://github.com/browseros-ai/BrowserOS/releases/download/v0.1/BrowserOS.dmg?raw=true",
        ]);
        assert!(is_trusted_download_origin(deep.as_slice()));
    }

    #[test]
    fn other_repositories_are_untrusted() {
        for url in [
            "https://raw.githubusercontent.com/other-org/BrowserOS/main/tool.sh",
            "https://github.com/browseros-ai/other/main/tool.sh",
            "https://gist.github.com/browseros-ai/BrowserOS/main/tool.sh",
            // Fragment only in the query string: path is what is matched.
            "https://github.com/evil/repo/x.sh?from=/browseros-ai/BrowserOS/",
        ] {
            assert!(!is_trusted_download_origin(chain(&[url]).as_slice()), "{url}");
        }
    }

    #[test]
    fn permissive_fragment_match_anywhere_in_path() {
        // Substring containment matches even when the fragment is embedded
        // further down an unrelated path.
        let embedded = chain(&["https://github.com/other/evil/browseros-ai/BrowserOS/payload"]);
        assert!(is_trusted_download_origin(embedded.as_slice()));
    }

    #[test]
    fn hostless_urls_are_untrusted() {
        let data = chain(&["data:text/plain,browseros.com"]);
        assert!(!is_trusted_download_origin(data.as_slice()));
        let file = chain(&["file:///browseros-ai/BrowserOS/x"]);
        assert!(!is_trusted_download_origin(file.as_slice()));
    }

    #[test]
    fn audit_subject_is_host_or_url() {
        let d = TrustMatch::Domain {
            host: "cdn.browseros.com".to_string(),
        };
        assert_eq!(d.audit_subject(), "cdn.browseros.com");
        let r = TrustMatch::Repository {
            host: "github.com".to_string(),
            url: "https://github.com/browseros-ai/BrowserOS/x".to_string(),
        };
        assert_eq!(r.audit_subject(), "https://github.com/browseros-ai/BrowserOS/x");
    }
}
