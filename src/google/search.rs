use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use crate::{
    config,
    types::{GoogleSearchResponse, ImageCandidate},
};

/// Timeout for one search query.
const SEARCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Number of results requested per query.
const RESULT_COUNT: u32 = 5;

/// Failures that prevented a search from running at all.
///
/// Distinct from a search that ran and found nothing, which is the
/// `Ok(vec![])` outcome of [`search_album_art`].
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("malformed search response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Searches for album art via the Google Custom Search JSON API.
///
/// Issues one GET to the configured endpoint with a fixed parameter set:
/// image search type, at most [`RESULT_COUNT`] results, large image size
/// preference, and JSON response format. The call blocks up to
/// [`SEARCH_TIMEOUT`] and is not retried.
///
/// # Arguments
///
/// * `api_key` - Google API key
/// * `cse_id` - Custom Search Engine ID (CX) scoping the search
/// * `query` - Free-text query, typically "artist album" for cover art
///
/// # Returns
///
/// - `Ok(candidates)` - The search ran; the list may be empty when the API
///   returned no `items`, which is a normal outcome and not an error.
/// - `Err(SearchError)` - The search could not be performed: network error,
///   timeout, non-2xx status, or a response body that is not valid JSON.
///
/// # Example
///
/// ```
/// let candidates = search_album_art(&api_key, &cse_id, "Pink Floyd The Wall").await?;
/// if candidates.is_empty() {
///     println!("no results");
/// }
/// ```
pub async fn search_album_art(
    api_key: &str,
    cse_id: &str,
    query: &str,
) -> Result<Vec<ImageCandidate>, SearchError> {
    search_album_art_at(&config::google_api_url(), api_key, cse_id, query).await
}

/// Same as [`search_album_art`] but against an explicit endpoint URL.
///
/// Split out so tests can point the client at a local mock server.
pub async fn search_album_art_at(
    endpoint: &str,
    api_key: &str,
    cse_id: &str,
    query: &str,
) -> Result<Vec<ImageCandidate>, SearchError> {
    let client = Client::new();
    let num = RESULT_COUNT.to_string();

    let response = client
        .get(endpoint)
        .query(&[
            ("key", api_key),
            ("cx", cse_id),
            ("q", query),
            ("searchType", "image"),
            ("num", num.as_str()),
            ("imgSize", "LARGE"),
            ("alt", "json"),
        ])
        .timeout(SEARCH_TIMEOUT)
        .send()
        .await?
        .error_for_status()?;

    let body = response.text().await?;
    parse_search_response(&body)
}

/// Parses a Custom Search response body into image candidates.
///
/// An absent or empty `items` array yields an empty list; only a body that
/// fails to deserialize is an error.
pub fn parse_search_response(body: &str) -> Result<Vec<ImageCandidate>, SearchError> {
    let response: GoogleSearchResponse = serde_json::from_str(body)?;

    let items = response.items.unwrap_or_default();
    let candidates = items
        .into_iter()
        .map(|item| ImageCandidate {
            link: item.link,
            title: item.title,
            snippet: item.snippet,
        })
        .collect();

    Ok(candidates)
}
