use std::path::Path;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{error, image::download_image, info, library::has_cover_art, success};

/// Downloads one image URL into an album folder as `cover.<ext>`.
///
/// Skips the download (with a notice) when the folder already contains
/// conventional cover art, unless `force` is set.
pub async fn fetch(url: &str, album_dir: &Path, force: bool) {
    if !force && has_cover_art(album_dir) {
        info!(
            "{} already has cover art, skipping (use --force to overwrite)",
            album_dir.display()
        );
        return;
    }

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Downloading {}...", url));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result = download_image(url, &album_dir.join("cover")).await;
    pb.finish_and_clear();

    match result {
        Ok(path) => success!("Artwork saved to {}", path.display()),
        Err(e) => error!("Cannot download artwork. Err: {}", e),
    }
}
