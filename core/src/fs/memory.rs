//! In-memory enumeration backend serving a declared directory tree.
//!
//! Useful for listing virtual trees and for exercising classification paths a real filesystem
//! rarely produces, such as `DT_UNKNOWN` hints or backends that yield `.` and `..`.

use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::types::{RawEntry, TypeHint};

use super::source::{DirectoryHandle, DirectorySource};

/// Child declared inside a [`MemoryDirectory`] tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryEntry {
    name: OsString,
    hint: TypeHint,
    is_dir: bool,
}

impl MemoryEntry {
    pub fn file(name: impl Into<OsString>) -> Self {
        Self { name: name.into(), hint: TypeHint::File, is_dir: false }
    }

    pub fn dir(name: impl Into<OsString>) -> Self {
        Self { name: name.into(), hint: TypeHint::Directory, is_dir: true }
    }

    /// Override the hint reported during enumeration; the real type is kept for stat lookups.
    pub fn with_hint(mut self, hint: TypeHint) -> Self {
        self.hint = hint;
        self
    }
}

#[derive(Debug)]
pub struct MemoryDirectory {
    dirs: BTreeMap<PathBuf, Vec<MemoryEntry>>,
    files: BTreeSet<PathBuf>,
    dot_entries: bool,
    open_handles: Arc<AtomicUsize>,
}

impl Default for MemoryDirectory {
    fn default() -> Self {
        Self {
            dirs: BTreeMap::new(),
            files: BTreeSet::new(),
            dot_entries: true,
            open_handles: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl MemoryDirectory {
    /// Empty tree that yields `.` and `..` first, like a POSIX directory stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `path` as a directory holding `entries`, in enumeration order.
    pub fn with_dir<P, I>(mut self, path: P, entries: I) -> Self
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = MemoryEntry>,
    {
        let key = normalize(path.as_ref());
        let entries: Vec<MemoryEntry> = entries.into_iter().collect();
        for entry in &entries {
            let child = key.join(&entry.name);
            if entry.is_dir {
                self.dirs.entry(child).or_default();
            } else {
                self.files.insert(child);
            }
        }
        self.dirs.insert(key, entries);
        self
    }

    pub fn with_dot_entries(mut self, enabled: bool) -> Self {
        self.dot_entries = enabled;
        self
    }

    /// Handles opened and not yet dropped.
    pub fn open_handles(&self) -> usize {
        self.open_handles.load(Ordering::SeqCst)
    }
}

impl DirectorySource for MemoryDirectory {
    type Handle = MemoryHandle;

    fn open(&self, path: &Path) -> io::Result<MemoryHandle> {
        let key = normalize(path);
        let Some(children) = self.dirs.get(&key) else {
            let kind = if self.files.contains(&key) {
                io::ErrorKind::NotADirectory
            } else {
                io::ErrorKind::NotFound
            };
            return Err(io::Error::new(kind, format!("{} is not a listable directory", key.display())));
        };

        let dots = [".", ".."]
            .into_iter()
            .filter(|_| self.dot_entries)
            .map(|name| RawEntry::new(name, TypeHint::Directory));
        let entries: Vec<RawEntry> = dots
            .chain(children.iter().map(|entry| RawEntry::new(entry.name.clone(), entry.hint)))
            .collect();

        self.open_handles.fetch_add(1, Ordering::SeqCst);
        Ok(MemoryHandle { entries: entries.into_iter(), open_handles: Arc::clone(&self.open_handles) })
    }

    fn is_directory(&self, path: &Path) -> bool {
        self.dirs.contains_key(&normalize(path))
    }
}

#[derive(Debug)]
pub struct MemoryHandle {
    entries: std::vec::IntoIter<RawEntry>,
    open_handles: Arc<AtomicUsize>,
}

impl DirectoryHandle for MemoryHandle {
    fn next_entry(&mut self) -> Option<RawEntry> {
        self.entries.next()
    }
}

impl Drop for MemoryHandle {
    fn drop(&mut self) {
        self.open_handles.fetch_sub(1, Ordering::SeqCst);
    }
}

fn normalize(path: &Path) -> PathBuf {
    path.components().collect()
}
