//! # Google Integration Module
//!
//! Client for the Google Custom Search JSON API, restricted to the image
//! search used for album artwork. It issues a single GET per query and
//! normalizes the response into [`crate::types::ImageCandidate`] records.
//!
//! Zero results and a failed search are different outcomes: an absent or
//! empty `items` array is a normal `Ok(vec![])`, while transport errors,
//! non-2xx statuses, and malformed JSON are a [`search::SearchError`]. A
//! caller working through many albums can therefore keep going after a
//! query that found nothing and still notice when the API itself is broken.

pub mod search;

pub use search::{SearchError, search_album_art};
