//! # CLI Module
//!
//! User-facing command implementations for covercli. Each command is an
//! independent operation over one concern; no command chains a search into
//! downloads across the whole library.
//!
//! ## Commands
//!
//! - [`search`] - Query a search provider for one cover-art URL, with an
//!   optional simulate (dry-run) mode that performs no network I/O
//! - [`scan`] - List the album folders under a library root and whether
//!   each one already has cover artwork
//! - [`fetch`] - Download one image URL into an album folder as
//!   `cover.<ext>` with the extension inferred from the URL or headers
//!
//! ## Error handling
//!
//! Library input errors (missing root, root is a file) are fatal with a
//! distinguishable message. Network-facing failures are reported per call
//! and never panic; a failed search or download ends the command with a
//! warning-style diagnostic rather than a stack trace.

mod fetch;
mod scan;
mod search;

pub use fetch::fetch;
pub use scan::scan;
pub use search::search;
