//! Outbound search URL construction.
//!
//! The query is attached as one form-encoded query parameter on the
//! configured engine URL. Empty queries never produce a URL.

use reqwest::Url;

pub const DEFAULT_SEARCH_ENGINE_URL: &str = "https://www.google.com/search";
pub const DEFAULT_SEARCH_QUERY_PARAM: &str = "q";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEngine {
    base: Url,
    param: String,
}

impl SearchEngine {
    #[must_use]
    pub fn new(base: Url, param: impl Into<String>) -> Self {
        Self { base, param: param.into() }
    }

    #[must_use]
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Search URL for `query`, or `None` when the query is empty.
    #[must_use]
    pub fn url_for(&self, query: &str) -> Option<Url> {
        if query.is_empty() {
            return None;
        }
        let mut url = self.base.clone();
        url.query_pairs_mut().append_pair(&self.param, query);
        Some(url)
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        let base = Url::parse(DEFAULT_SEARCH_ENGINE_URL).expect("default search engine URL is valid");
        Self::new(base, DEFAULT_SEARCH_QUERY_PARAM)
    }
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
