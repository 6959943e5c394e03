//! Directory listing and classification.
//!
//! [`fs::Lister`] walks one directory level through an injected [`fs::DirectorySource`],
//! classifies each entry as a plain file, directory, or compressed archive, and returns a
//! [`fs::Listing`] that can be sorted in place.

#![deny(missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod fs;
pub mod log;
pub mod types;

pub type Result<T> = std::result::Result<T, anyhow::Error>;

pub use config::{ListOptions, ListerConfig, SortOptions, SortOrder};
pub use error::ListError;
pub use types::{ArchiveKind, Entry, EntryKind, RawEntry, TypeHint};

/// Returns the version of the core crate for diagnostics.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
