//! # Provider Module
//!
//! Pluggable search backends behind a single-method trait. Each provider
//! turns a free-text query into one image URL (or a placeholder message in
//! simulate mode); which backend runs is decided once at construction time
//! in `main`, never by a runtime branch inside shared logic.

use thiserror::Error;

use crate::google::SearchError;

mod google;
mod serpapi;

pub use google::GoogleProvider;
pub use serpapi::SerpApiProvider;

/// Failures of a provider-level search.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("no image results for '{query}'")]
    NoResults { query: String },
}

/// A stateless search capability over one backend.
///
/// `search` maps a query to a single result: the URL of the best candidate
/// image, or a descriptive placeholder string when `simulate` is set. In
/// simulate mode no network call is made.
pub trait SearchProvider {
    /// Human-readable backend name for console output.
    fn name(&self) -> &'static str;

    /// Performs a search for the given query.
    fn search(
        &self,
        query: &str,
        simulate: bool,
    ) -> impl Future<Output = Result<String, ProviderError>>;
}
