use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// A single search result describing a possibly-downloadable image.
///
/// Produced by the search client from one JSON result item and consumed
/// immediately by the downloader or discarded. Only `link` is guaranteed
/// to be present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageCandidate {
    pub link: String,
    pub title: Option<String>,
    pub snippet: Option<String>,
}

/// Wire format of a Custom Search JSON API response.
///
/// Google omits the `items` field entirely when a query matches nothing,
/// so it is optional here; an absent or empty array both mean zero results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleSearchResponse {
    pub items: Option<Vec<GoogleSearchItem>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleSearchItem {
    pub link: String,
    pub title: Option<String>,
    pub snippet: Option<String>,
}

#[derive(Tabled)]
pub struct AlbumTableRow {
    pub album: String,
    pub artwork: String,
}
