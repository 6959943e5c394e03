//! Ordered result of one enumeration, plus the sort and release operations on it.

use std::cmp::Ordering;
use std::collections::TryReserveError;

use serde::Serialize;
use tracing::trace;

use crate::config::{SortOptions, SortOrder};
use crate::types::{Entry, EntryKind};

use super::util;

/// Entries in raw enumeration order until [`Listing::sort`] is called.
///
/// Only the lister builds listings, so no entry is ever [`EntryKind::Unset`] and `.`/`..` never
/// appear.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Listing {
    entries: Vec<Entry>,
}

impl Listing {
    pub(crate) fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub(crate) fn push(&mut self, entry: Entry) -> Result<(), TryReserveError> {
        debug_assert_ne!(entry.kind, EntryKind::Unset, "unclassified entry {:?}", entry.path);
        self.entries.try_reserve(1)?;
        self.entries.push(entry);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    /// Sort in place by case-insensitive path. With `directories_first`, entries are grouped by
    /// kind first: directories, then archives, then plain files.
    pub fn sort(&mut self, directories_first: bool) {
        self.sort_with(SortOptions { directories_first, order: SortOrder::Lexical });
    }

    pub fn sort_with(&mut self, options: SortOptions) {
        self.entries.sort_by(|a, b| compare_entries(a, b, options));
    }
}

impl IntoIterator for Listing {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Listing {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Total order used by [`Listing::sort_with`].
pub fn compare_entries(a: &Entry, b: &Entry, options: SortOptions) -> Ordering {
    let partition = if options.directories_first {
        kind_rank(a.kind).cmp(&kind_rank(b.kind))
    } else {
        Ordering::Equal
    };

    partition.then_with(|| match options.order {
        SortOrder::Lexical => util::lexical_cmp_path(&a.path, &b.path),
        SortOrder::Natural => util::natural_cmp_path(&a.path, &b.path),
    })
}

fn kind_rank(kind: EntryKind) -> u8 {
    match kind {
        EntryKind::Directory => 0,
        EntryKind::CompressedArchive => 1,
        EntryKind::PlainFile => 2,
        EntryKind::Unset => 3,
    }
}

/// Sort `listing` in place; see [`Listing::sort`].
pub fn sort(listing: &mut Listing, directories_first: bool) {
    listing.sort(directories_first);
}

/// Release a listing. Passing `None` (the outcome of a failed enumeration) is a no-op.
pub fn release(listing: Option<Listing>) {
    if let Some(listing) = listing {
        trace!(target: "fs::listing", entries = listing.len(), "releasing listing");
        drop(listing);
    }
}
