use crate::providers::{ProviderError, SearchProvider};

/// SerpAPI image-search backend.
///
/// Placeholder implementation: the live path fabricates a result URL
/// instead of calling the API.
// TODO: wire this to the real SerpAPI Google Images endpoint once an
// account/key is available; until then this only exercises the provider
// selection path.
pub struct SerpApiProvider;

impl SerpApiProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SerpApiProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchProvider for SerpApiProvider {
    fn name(&self) -> &'static str {
        "SerpAPI"
    }

    async fn search(&self, query: &str, simulate: bool) -> Result<String, ProviderError> {
        if simulate {
            return Ok(format!(
                "Simulated search for '{query}' via SerpAPI (no request sent)"
            ));
        }

        Ok(format!(
            "https://serpapi.com/image_for_{}.jpg",
            query.replace(' ', "_")
        ))
    }
}
