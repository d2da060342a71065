//! # Image Module
//!
//! Image acquisition for album artwork: resolving the file extension a
//! downloaded image should get and streaming the image bytes to disk.
//! The extension comes from the URL path or the `Content-Type` header of a
//! metadata probe, with a fixed default when neither yields an answer.

pub mod download;
pub mod extension;

pub use download::{FetchError, download_image};
pub use extension::{DEFAULT_EXTENSION, resolve_extension};
