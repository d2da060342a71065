use crate::{
    error, info,
    providers::{ProviderError, SearchProvider},
    success,
};

/// Runs one provider search and prints the resulting URL or message.
pub async fn search(provider: impl SearchProvider, query: &str, simulate: bool) {
    if simulate {
        info!("Dry run: would search for images related to '{}'.", query);
    } else {
        info!(
            "Searching for images related to '{}' via {}...",
            query,
            provider.name()
        );
    }

    match provider.search(query, simulate).await {
        Ok(result) => success!("Result: {}", result),
        Err(ProviderError::NoResults { query }) => {
            info!("No image results found for query: {}", query)
        }
        Err(e) => error!("Search failed. Err: {}", e),
    }
}
