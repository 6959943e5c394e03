//! Shared data structures exchanged between the lister, its backends, and front ends.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Classification assigned to a listed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Not yet classified. Never present in a finished [`crate::fs::Listing`].
    #[default]
    Unset,
    PlainFile,
    Directory,
    CompressedArchive,
}

impl EntryKind {
    /// Short label used by text front ends.
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::Unset => "unset",
            EntryKind::PlainFile => "file",
            EntryKind::Directory => "dir",
            EntryKind::CompressedArchive => "archive",
        }
    }
}

/// One filesystem object discovered during enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl Entry {
    pub fn new(path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        Self { path: path.into(), kind }
    }

    /// Final path component, if the joined path has one.
    pub fn name(&self) -> Option<&OsStr> {
        self.path.file_name()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArchiveKind {
    Zip,
    SevenZip,
}

/// What the enumeration backend knows about an entry's type without a stat call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeHint {
    Directory,
    File,
    /// Links are ambiguous until the target is inspected.
    Symlink,
    Unknown,
}

impl TypeHint {
    /// `Some` when the hint settles directory-ness on its own.
    pub fn is_dir(self) -> Option<bool> {
        match self {
            TypeHint::Directory => Some(true),
            TypeHint::File => Some(false),
            TypeHint::Symlink | TypeHint::Unknown => None,
        }
    }
}

/// Raw record yielded by a directory handle before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub name: OsString,
    pub hint: TypeHint,
}

impl RawEntry {
    pub fn new(name: impl Into<OsString>, hint: TypeHint) -> Self {
        Self { name: name.into(), hint }
    }

    /// `.` and `..` are never listed, whatever the backend yields.
    pub fn is_dot_entry(&self) -> bool {
        self.name == "." || self.name == ".."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_is_the_default_kind() {
        assert_eq!(EntryKind::default(), EntryKind::Unset);
    }

    #[test]
    fn only_concrete_hints_settle_directoryness() {
        assert_eq!(TypeHint::Directory.is_dir(), Some(true));
        assert_eq!(TypeHint::File.is_dir(), Some(false));
        assert_eq!(TypeHint::Symlink.is_dir(), None);
        assert_eq!(TypeHint::Unknown.is_dir(), None);
    }

    #[test]
    fn recognises_dot_entries() {
        assert!(RawEntry::new(".", TypeHint::Directory).is_dot_entry());
        assert!(RawEntry::new("..", TypeHint::Unknown).is_dot_entry());
        assert!(!RawEntry::new("...", TypeHint::File).is_dot_entry());
        assert!(!RawEntry::new(".hidden", TypeHint::File).is_dot_entry());
    }

    #[test]
    fn entry_exposes_final_component() {
        let entry = Entry::new("/d/sub", EntryKind::Directory);
        assert_eq!(entry.name(), Some(OsStr::new("sub")));
        assert!(entry.is_dir());
    }
}
