// ============================================================
// Layer 4 — Directory Scanner
// ============================================================
// Reads one flat input directory (`images/` or `masks/`) and
// builds a stem → file mapping.
//
// Which entries count:
//   - regular files only (subdirectories are never descended)
//   - extension in ALLOWED_EXTENSIONS, compared case-insensitively
//   - hidden files (leading '.') are skipped
//
// Everything else is ignored without an error.
//
// Duplicate stems (`x.png` next to `x.jpg`):
//   Entries are visited in sorted file-name order, so with
//   DuplicatePolicy::LastWins the lexicographically last file
//   name deterministically wins and a warning names both files.
//   DuplicatePolicy::Reject turns the collision into a fatal
//   SplitError::DuplicateStem.
//
// Reference: std::fs::read_dir documentation
//            Rust Book §9 (Error Handling)

use std::{fs, path::{Path, PathBuf}};

use crate::domain::error::{Result, SplitError};
use crate::domain::file_entry::{FileEntry, StemMapping};
use crate::domain::traits::StemSource;

/// Raster formats accepted as images or masks (lowercase, no dot)
pub const ALLOWED_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "tif", "tiff", "bmp", "gif"];

/// What to do when two files in one directory share a stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Keep the file whose name sorts last and log a warning
    LastWins,

    /// Fail the run with SplitError::DuplicateStem
    Reject,
}

/// Scans a single flat directory of raster files.
/// Implements the StemSource trait from Layer 3.
pub struct DirScanner {
    dir:        PathBuf,
    duplicates: DuplicatePolicy,
}

impl DirScanner {
    pub fn new(dir: impl Into<PathBuf>, duplicates: DuplicatePolicy) -> Self {
        Self {
            dir: dir.into(),
            duplicates,
        }
    }
}

impl StemSource for DirScanner {
    fn location(&self) -> &Path {
        &self.dir
    }

    fn collect(&self) -> Result<StemMapping> {
        let read_dir = fs::read_dir(&self.dir).map_err(|e| SplitError::io(&self.dir, e))?;

        let mut paths = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| SplitError::io(&self.dir, e))?;
            paths.push(entry.path());
        }

        // read_dir order is platform dependent
        paths.sort();

        let mut mapping = StemMapping::new();
        for path in paths {
            if !is_candidate(&path) {
                tracing::debug!("Ignoring '{}'", path.display());
                continue;
            }

            let Some(entry) = FileEntry::from_path(&path) else {
                tracing::debug!("Ignoring non UTF-8 name '{}'", path.display());
                continue;
            };

            if let Some(previous) = mapping.get(&entry.stem) {
                match self.duplicates {
                    DuplicatePolicy::Reject => {
                        return Err(SplitError::DuplicateStem {
                            stem:   entry.stem.clone(),
                            first:  previous.path.clone(),
                            second: entry.path.clone(),
                        });
                    }
                    DuplicatePolicy::LastWins => {
                        tracing::warn!(
                            "Duplicate stem '{}' in '{}': '{}' replaces '{}'",
                            entry.stem,
                            self.dir.display(),
                            entry.path.display(),
                            previous.path.display()
                        );
                    }
                }
            }

            mapping.insert(entry.stem.clone(), entry);
        }

        tracing::info!(
            "Found {} usable files in '{}'",
            mapping.len(),
            self.dir.display()
        );
        Ok(mapping)
    }
}

/// True for visible regular files with an allowed extension.
fn is_candidate(path: &Path) -> bool {
    let hidden = path
        .file_name()
        .and_then(|n| n.to_str())
        .map_or(true, |n| n.starts_with('.'));

    !hidden && path.is_file() && has_allowed_extension(path)
}

/// Case-insensitive check of the final extension against ALLOWED_EXTENSIONS.
pub fn has_allowed_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .is_some_and(|e| ALLOWED_EXTENSIONS.contains(&e.as_str()))
}
