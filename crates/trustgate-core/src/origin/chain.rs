//! Download URL chain (redirect history).

use url::Url;

use crate::error::ChainError;

/// Ordered redirect history of a download. The last entry is the effective
/// download URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlChain {
    urls: Vec<Url>,
}

impl UrlChain {
    pub fn new(urls: Vec<Url>) -> Self {
        Self { urls }
    }

    /// Parse every entry; the first malformed entry aborts with its position.
    pub fn parse<I, S>(raw: I) -> Result<Self, ChainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let urls = raw
            .into_iter()
            .enumerate()
            .map(|(index, s)| {
                let s = s.as_ref();
                Url::parse(s).map_err(|source| ChainError::InvalidUrl {
                    index,
                    url: s.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { urls })
    }

    pub fn as_slice(&self) -> &[Url] {
        &self.urls
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// The URL the download was actually served from, if any.
    pub fn effective_url(&self) -> Option<&Url> {
        self.urls.last()
    }
}
