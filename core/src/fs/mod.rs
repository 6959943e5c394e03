//! File system access layer: enumeration backends, classification, and listings.

pub mod archive;
pub mod filter;
pub mod lister;
pub mod listing;
pub mod memory;
pub mod source;
mod util;

pub use archive::{detect_kind, is_compressed};
pub use filter::ExtensionFilter;
pub use lister::{Lister, enumerate};
pub use listing::{Listing, compare_entries, release, sort};
pub use memory::{MemoryDirectory, MemoryEntry};
pub use source::{DirectoryHandle, DirectorySource, StdDirectory};
pub use util::{extension_of, join_entry, lexical_cmp_path, natural_cmp, natural_cmp_path};
