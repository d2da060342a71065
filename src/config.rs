//! Configuration management for the cover art CLI.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage application
//! configuration including search API credentials and endpoint URLs.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `covercli/.env`. This allows users to store
/// configuration securely without hardcoding sensitive values.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/covercli/.env`
/// - macOS: `~/Library/Application Support/covercli/.env`
/// - Windows: `%LOCALAPPDATA%/covercli/.env`
///
/// A missing `.env` file is not an error; commands that need no credentials
/// (e.g. `scan`) work without one, and variables already present in the
/// process environment always take effect.
///
/// # Returns
///
/// Returns `Ok(())` if the environment is successfully prepared, or an error
/// string if directory creation or file parsing fails.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("covercli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the Google API key for Custom Search requests.
///
/// Retrieves the `GOOGLE_API_KEY` environment variable which contains the
/// API key obtained from the Google Cloud console.
///
/// # Panics
///
/// Panics if the `GOOGLE_API_KEY` environment variable is not set.
pub fn google_api_key() -> String {
    env::var("GOOGLE_API_KEY").expect("GOOGLE_API_KEY must be set")
}

/// Returns the Google Custom Search Engine ID (CX).
///
/// Retrieves the `GOOGLE_CSE_ID` environment variable which identifies the
/// programmable search engine scoped to image results.
///
/// # Panics
///
/// Panics if the `GOOGLE_CSE_ID` environment variable is not set.
pub fn google_cse_id() -> String {
    env::var("GOOGLE_CSE_ID").expect("GOOGLE_CSE_ID must be set")
}

/// Returns the base URL of the Google Custom Search JSON API.
///
/// Retrieves the `GOOGLE_API_URL` environment variable, falling back to the
/// public endpoint when unset. Overriding the endpoint is mainly useful for
/// pointing the client at a local test server.
///
/// # Example
///
/// ```
/// let url = google_api_url(); // "https://www.googleapis.com/customsearch/v1"
/// ```
pub fn google_api_url() -> String {
    env::var("GOOGLE_API_URL")
        .unwrap_or_else(|_| "https://www.googleapis.com/customsearch/v1".to_string())
}

/// Returns the SerpAPI key for the alternative search backend.
///
/// Retrieves the `SERPAPI_API_KEY` environment variable.
///
/// # Panics
///
/// Panics if the `SERPAPI_API_KEY` environment variable is not set.
pub fn serpapi_api_key() -> String {
    env::var("SERPAPI_API_KEY").expect("SERPAPI_API_KEY must be set")
}
