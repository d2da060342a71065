//! # Library Module
//!
//! Filesystem-level operations on a local music library: enumerating album
//! folders under a root directory and probing individual folders for
//! existing cover artwork. Nothing here touches the network; all functions
//! operate on one directory level and never recurse.

use std::path::PathBuf;

use thiserror::Error;

pub mod artwork;
pub mod folders;

pub use artwork::has_cover_art;
pub use folders::album_folders;

/// Input errors raised when enumerating a music library root.
///
/// Callers need to distinguish "no albums" from "bad input", so a missing
/// root and a root that is a plain file are separate, hard errors rather
/// than an empty listing.
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("failed to read directory {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
