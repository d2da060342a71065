use std::path::Path;

use tabled::Table;

use crate::{
    error,
    library::{album_folders, has_cover_art},
    success,
    types::AlbumTableRow,
};

/// Lists the album folders under `root` and whether each has cover art.
pub fn scan(root: &Path) {
    let folders = match album_folders(root) {
        Ok(folders) => folders,
        Err(e) => error!("Cannot scan library. Err: {}", e),
    };

    let mut rows: Vec<AlbumTableRow> = folders
        .map(|folder| AlbumTableRow {
            album: folder
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| folder.display().to_string()),
            artwork: if has_cover_art(&folder) {
                "present".to_string()
            } else {
                "missing".to_string()
            },
        })
        .collect();

    rows.sort_by(|a, b| a.album.to_lowercase().cmp(&b.album.to_lowercase()));

    let missing = rows.iter().filter(|r| r.artwork == "missing").count();
    let total = rows.len();

    if rows.is_empty() {
        success!("No album folders found under {}", root.display());
        return;
    }

    let table = Table::new(rows);
    println!("{}", table);
    success!("Scanned {} albums, {} missing artwork", total, missing);
}
