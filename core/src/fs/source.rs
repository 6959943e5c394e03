//! Directory enumeration capability and the standard-library backend.
//!
//! The lister only talks to [`DirectorySource`]: `open` hands back a scoped
//! [`DirectoryHandle`] that yields raw entries until exhausted and is closed when dropped. Each
//! target supplies one implementation; classification never branches on the platform.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::types::{RawEntry, TypeHint};

/// Platform capability for walking a single directory level.
pub trait DirectorySource {
    type Handle: DirectoryHandle;

    /// Open `path` for enumeration. Fails when it is missing, unreadable, or not a directory.
    fn open(&self, path: &Path) -> io::Result<Self::Handle>;

    /// Stat-style test used when an entry's type hint is ambiguous. Follows symlinks.
    fn is_directory(&self, path: &Path) -> bool;
}

/// Open directory stream. Dropping the handle closes it.
///
/// Backends may or may not yield `.` and `..`.
pub trait DirectoryHandle {
    fn next_entry(&mut self) -> Option<RawEntry>;
}

/// Backend over [`std::fs::read_dir`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StdDirectory;

impl DirectorySource for StdDirectory {
    type Handle = StdHandle;

    fn open(&self, path: &Path) -> io::Result<StdHandle> {
        let inner = fs::read_dir(path)?;
        Ok(StdHandle { dir: path.to_path_buf(), inner })
    }

    fn is_directory(&self, path: &Path) -> bool {
        fs::metadata(path).map(|meta| meta.is_dir()).unwrap_or(false)
    }
}

#[derive(Debug)]
pub struct StdHandle {
    dir: PathBuf,
    inner: fs::ReadDir,
}

impl DirectoryHandle for StdHandle {
    fn next_entry(&mut self) -> Option<RawEntry> {
        loop {
            match self.inner.next()? {
                Ok(entry) => {
                    let hint = entry.file_type().map(hint_from).unwrap_or(TypeHint::Unknown);
                    return Some(RawEntry::new(entry.file_name(), hint));
                }
                Err(err) => {
                    warn!(target: "fs::source", dir = %self.dir.display(), "skipping unreadable entry: {err}");
                }
            }
        }
    }
}

fn hint_from(file_type: fs::FileType) -> TypeHint {
    if file_type.is_dir() {
        TypeHint::Directory
    } else if file_type.is_symlink() {
        TypeHint::Symlink
    } else if file_type.is_file() {
        TypeHint::File
    } else {
        TypeHint::Unknown
    }
}
