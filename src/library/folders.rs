use std::fs;
use std::path::{Path, PathBuf};

use super::LibraryError;

/// Lazy iterator over the album folders directly beneath a library root.
///
/// Yields the full path of each immediate subdirectory; files and anything
/// nested deeper are skipped. The sequence is finite and restartable by
/// calling [`album_folders`] again.
pub struct AlbumFolders {
    entries: fs::ReadDir,
}

impl Iterator for AlbumFolders {
    type Item = PathBuf;

    fn next(&mut self) -> Option<Self::Item> {
        for entry in self.entries.by_ref() {
            let Ok(entry) = entry else {
                continue;
            };
            let path = entry.path();
            if path.is_dir() {
                return Some(path);
            }
        }
        None
    }
}

/// Enumerates the album folders directly beneath `root`.
///
/// Each item is the full path of one immediate subdirectory. A root that
/// does not exist yields [`LibraryError::NotFound`] and a root that is a
/// plain file yields [`LibraryError::NotADirectory`]; both are surfaced to
/// the caller instead of being reported as an empty library.
pub fn album_folders(root: &Path) -> Result<AlbumFolders, LibraryError> {
    if !root.exists() {
        return Err(LibraryError::NotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(LibraryError::NotADirectory(root.to_path_buf()));
    }

    let entries = fs::read_dir(root).map_err(|source| LibraryError::Io {
        path: root.to_path_buf(),
        source,
    })?;

    Ok(AlbumFolders { entries })
}
