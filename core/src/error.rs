//! Failures surfaced by directory enumeration.

use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListError {
    /// The directory could not be opened (missing, permission denied, not a directory).
    #[error("failed to open directory {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Growing the listing failed; nothing partial is returned.
    #[error("failed to grow directory listing")]
    Allocation(#[from] TryReserveError),
}

impl ListError {
    pub(crate) fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Open { path: path.into(), source }
    }

    /// I/O error kind for open failures, `None` for allocation failures.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            ListError::Open { source, .. } => Some(source.kind()),
            ListError::Allocation(_) => None,
        }
    }
}
