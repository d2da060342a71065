use crate::{
    config, google,
    providers::{ProviderError, SearchProvider},
};

/// Live backend over the Google Custom Search JSON API.
///
/// Holds only the credentials; every search is an independent request.
pub struct GoogleProvider {
    api_key: String,
    cse_id: String,
}

impl GoogleProvider {
    /// Builds a provider from the configured credentials.
    ///
    /// Panics (via the config accessors) when `GOOGLE_API_KEY` or
    /// `GOOGLE_CSE_ID` is not set.
    pub fn from_config() -> Self {
        Self {
            api_key: config::google_api_key(),
            cse_id: config::google_cse_id(),
        }
    }

    pub fn new(api_key: String, cse_id: String) -> Self {
        Self { api_key, cse_id }
    }
}

impl SearchProvider for GoogleProvider {
    fn name(&self) -> &'static str {
        "Google Custom Search"
    }

    async fn search(&self, query: &str, simulate: bool) -> Result<String, ProviderError> {
        if simulate {
            return Ok(format!(
                "Simulated search for '{query}' via Google Custom Search (no request sent)"
            ));
        }

        let candidates = google::search_album_art(&self.api_key, &self.cse_id, query).await?;

        candidates
            .into_iter()
            .next()
            .map(|candidate| candidate.link)
            .ok_or_else(|| ProviderError::NoResults {
                query: query.to_string(),
            })
    }
}
