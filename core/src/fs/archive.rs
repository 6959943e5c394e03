//! Compressed-archive recognition by extension.

use std::path::Path;

use crate::types::ArchiveKind;

use super::util;

impl ArchiveKind {
    /// Lowercase extensions (without the dot) that identify this format.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            ArchiveKind::Zip => &["zip"],
            ArchiveKind::SevenZip => &["7z"],
        }
    }
}

const KNOWN_KINDS: [ArchiveKind; 2] = [ArchiveKind::Zip, ArchiveKind::SevenZip];

/// Archive format implied by a bare extension, compared case-insensitively.
pub fn kind_for_extension(ext: &str) -> Option<ArchiveKind> {
    KNOWN_KINDS
        .into_iter()
        .find(|kind| kind.extensions().iter().any(|known| ext.eq_ignore_ascii_case(known)))
}

/// Archive format of the final path component. A name that is only a dot and an extension,
/// such as `.zip`, still counts.
pub fn detect_kind(path: &Path) -> Option<ArchiveKind> {
    path.file_name().and_then(util::extension_of).and_then(kind_for_extension)
}

pub fn is_compressed(path: &Path) -> bool {
    detect_kind(path).is_some()
}
