//! Directory enumeration and entry classification.

use std::ffi::OsStr;
use std::path::Path;

use tracing::{debug, trace};

use crate::config::ListOptions;
use crate::error::ListError;
use crate::types::{Entry, EntryKind};

use super::filter::ExtensionFilter;
use super::listing::Listing;
use super::source::{DirectoryHandle, DirectorySource, StdDirectory};
use super::{archive, util};

/// Produces classified listings through an injected [`DirectorySource`].
///
/// The lister keeps no state between calls; every [`Lister::enumerate`] builds a fresh listing.
#[derive(Debug, Clone, Default)]
pub struct Lister<S = StdDirectory> {
    source: S,
}

impl Lister<StdDirectory> {
    pub fn new() -> Self {
        Self { source: StdDirectory }
    }
}

impl<S: DirectorySource> Lister<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// List `dir` in raw enumeration order.
    ///
    /// Fails with [`ListError::Open`] when the directory cannot be opened and with
    /// [`ListError::Allocation`] when the listing cannot grow. The handle is closed on every path.
    pub fn enumerate(&self, dir: &Path, options: &ListOptions) -> Result<Listing, ListError> {
        let policy = Policy {
            filter: options.extensions.as_deref().map(ExtensionFilter::parse),
            include_dirs: options.include_dirs,
            include_compressed: options.include_compressed,
        };

        let mut handle = self.source.open(dir).map_err(|err| ListError::open(dir, err))?;
        let mut listing = Listing::new();
        let mut skipped = 0usize;

        while let Some(raw) = handle.next_entry() {
            if raw.is_dot_entry() {
                continue;
            }

            let path = util::join_entry(dir, &raw.name);
            let is_dir = match raw.hint.is_dir() {
                Some(is_dir) => is_dir,
                None => self.source.is_directory(&path),
            };

            match policy.classify(&raw.name, &path, is_dir) {
                Some(kind) => listing.push(Entry::new(path, kind))?,
                None => {
                    skipped += 1;
                    trace!(target: "fs::lister", path = %path.display(), is_dir, "entry filtered out");
                }
            }
        }

        debug!(
            target: "fs::lister",
            dir = %dir.display(),
            entries = listing.len(),
            skipped,
            "listed directory"
        );
        Ok(listing)
    }
}

#[derive(Debug)]
struct Policy {
    filter: Option<ExtensionFilter>,
    include_dirs: bool,
    include_compressed: bool,
}

impl Policy {
    /// `None` means the entry is left out of the listing.
    ///
    /// A filter match wins over archive detection: an extension the caller asked for is handed
    /// back as a plain file even when it is also a known archive format.
    fn classify(&self, name: &OsStr, path: &Path, is_dir: bool) -> Option<EntryKind> {
        if is_dir {
            return self.include_dirs.then_some(EntryKind::Directory);
        }

        let is_compressed = archive::is_compressed(path);
        let Some(filter) = &self.filter else {
            return Some(if is_compressed {
                EntryKind::CompressedArchive
            } else {
                EntryKind::PlainFile
            });
        };

        if filter.matches(util::extension_of(name)) {
            Some(EntryKind::PlainFile)
        } else if is_compressed && self.include_compressed {
            Some(EntryKind::CompressedArchive)
        } else {
            None
        }
    }
}

/// List `dir` on the local filesystem.
///
/// `extensions` is a `|`-delimited filter (`"sfc|.zip"`); `None` accepts every file.
pub fn enumerate(
    dir: &Path,
    extensions: Option<&str>,
    include_dirs: bool,
    include_compressed: bool,
) -> Result<Listing, ListError> {
    let options = ListOptions {
        extensions: extensions.map(str::to_owned),
        include_dirs,
        include_compressed,
    };
    Lister::new().enumerate(dir, &options)
}
