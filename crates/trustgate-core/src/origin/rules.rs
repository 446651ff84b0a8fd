//! Trusted domain and repository rules.

/// Vendor root domain; the domain itself and every subdomain are trusted.
pub const TRUSTED_ROOT_DOMAIN: &str = "browseros.com";

/// Source-hosting domains that serve the vendor repository.
pub const TRUSTED_REPOSITORY_HOSTS: &[&str] = &["github.com", "raw.githubusercontent.com"];

/// Path fragment identifying the vendor repository on the hosting domains.
pub const TRUSTED_REPOSITORY_PATH: &str = "/browseros-ai/BrowserOS/";

/// The domain rule consulted by the download trust predicate.
pub const DOMAIN_RULE: TrustedDomainRule = TrustedDomainRule {
    root: TRUSTED_ROOT_DOMAIN,
};

/// The repository rule consulted by the download trust predicate.
pub const REPOSITORY_RULE: TrustedRepositoryRule = TrustedRepositoryRule {
    hosts: TRUSTED_REPOSITORY_HOSTS,
    path_fragment: TRUSTED_REPOSITORY_PATH,
};

/// Matches a root domain exactly or any of its subdomains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrustedDomainRule {
    pub root: &'static str,
}

impl TrustedDomainRule {
    /// Exact host equality, or a suffix match on `"." + root`. Both are ASCII
    /// case-insensitive.
    pub fn matches(&self, host: &str) -> bool {
        if host.eq_ignore_ascii_case(self.root) {
            return true;
        }

        let host = host.as_bytes();
        let root = self.root.as_bytes();
        if host.len() <= root.len() {
            return false;
        }
        let boundary = host.len() - root.len() - 1;
        // The byte before the root must be a label separator: "evilbrowseros.com" is not a subdomain.
        host[boundary] == b'.' && host[boundary + 1..].eq_ignore_ascii_case(root)
    }
}

/// Matches a fixed set of hosting domains combined with a path fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrustedRepositoryRule {
    pub hosts: &'static [&'static str],
    pub path_fragment: &'static str,
}

impl TrustedRepositoryRule {
    /// True when `host` is one of the hosting domains and `path` contains the
    /// repository fragment anywhere.
    ///
    /// Containment rather than prefix: any file inside the repository tree
    /// matches, and so does any path that merely embeds the fragment.
    pub fn matches(&self, host: &str, path: &str) -> bool {
        self.hosts.iter().any(|h| *h == host) && path.contains(self.path_fragment)
    }
}
