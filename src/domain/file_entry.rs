// ============================================================
// Layer 3 — FileEntry Domain Type
// ============================================================
// A single file found while scanning `images/` or `masks/`.
//
// The stem is the pairing key: `scan_001.jpg` in images/ pairs
// with `scan_001.png` in masks/ because both have the stem
// `scan_001`. Only the final extension is removed, so
// `a.b.png` has the stem `a.b`.
//
// Reference: Rust Book §5 (Structs and Methods)
//            std::path::Path documentation

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A discovered file with its stem and location on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// File name with its final extension removed
    pub stem: String,

    /// Full path to the file
    pub path: PathBuf,
}

impl FileEntry {
    /// Create a FileEntry from an explicit stem and path
    pub fn new(stem: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            stem: stem.into(),
            path: path.into(),
        }
    }

    /// Build a FileEntry from a path, deriving the stem from its file name.
    /// Returns None for paths without a UTF-8 file stem.
    pub fn from_path(path: &Path) -> Option<Self> {
        let stem = path.file_stem()?.to_str()?;
        Some(Self::new(stem, path))
    }

    /// Original file name including its extension.
    /// Destination files keep this exact name.
    pub fn file_name(&self) -> &std::ffi::OsStr {
        self.path
            .file_name()
            .unwrap_or_else(|| self.path.as_os_str())
    }
}

/// Stem → file mapping for one source directory.
///
/// A BTreeMap keeps iteration sorted by stem, which the pairing
/// step relies on for a deterministic starting order.
pub type StemMapping = BTreeMap<String, FileEntry>;
