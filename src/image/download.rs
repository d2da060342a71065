use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::{Client, header::CONTENT_TYPE};
use thiserror::Error;
use tokio::{fs, io::AsyncWriteExt};

use crate::{image::extension::resolve_extension, warning};

/// Timeout for the metadata probe that only fetches headers.
const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout for the streaming content download.
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(15);

/// Failures while downloading an image or writing it to disk.
///
/// A single request or write failure is definitive; nothing is retried.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("download request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("failed to write image to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Downloads an image from a URL and saves it next to the album's tracks.
///
/// `save_path_without_extension` is the destination path lacking an
/// extension; the correct one is inferred before the download starts:
///
/// 1. A HEAD request (redirects followed) fetches the `Content-Type` header
///    without pulling the body. If the probe fails for any reason, a warning
///    is logged and the extension is resolved from the URL alone.
/// 2. The resolved extension is appended to the destination path.
/// 3. A GET request streams the body to the destination file, creating the
///    parent directory if needed and overwriting an existing file.
///
/// Any HTTP error, timeout, or filesystem error on the content fetch aborts
/// the download and is returned as a [`FetchError`]; no file is written when
/// the fetch itself fails.
pub async fn download_image(
    image_url: &str,
    save_path_without_extension: &Path,
) -> Result<PathBuf, FetchError> {
    let client = Client::new();

    let content_type = match client
        .head(image_url)
        .timeout(PROBE_TIMEOUT)
        .send()
        .await
        .and_then(|r| r.error_for_status())
    {
        Ok(response) => response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string()),
        Err(e) => {
            warning!(
                "Metadata probe failed for {}: {}. Resolving extension from the URL alone.",
                image_url,
                e
            );
            None
        }
    };

    let extension = resolve_extension(image_url, content_type.as_deref());
    let mut full_path = save_path_without_extension.as_os_str().to_os_string();
    full_path.push(extension);
    let full_path = PathBuf::from(full_path);

    let mut response = client
        .get(image_url)
        .timeout(DOWNLOAD_TIMEOUT)
        .send()
        .await?
        .error_for_status()?;

    if let Some(parent) = full_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| FetchError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }
    }

    let io_err = |source| FetchError::Io {
        path: full_path.clone(),
        source,
    };

    let mut file = fs::File::create(&full_path).await.map_err(io_err)?;
    while let Some(chunk) = response.chunk().await? {
        file.write_all(&chunk).await.map_err(io_err)?;
    }
    file.flush().await.map_err(io_err)?;

    Ok(full_path)
}
