// ============================================================
// Layer 3 — Split Errors
// ============================================================
// Every failure the pipeline can report. All of them are fatal:
// nothing is retried and the run stops at the first error.
//
//   MissingInputDirectory / NoPairedFiles / InvalidRatio /
//   DuplicateStem are detected before any output directory is
//   touched. Io can happen mid-copy and may leave the output
//   directories partially populated.
//
// Reference: thiserror crate documentation
//            Rust Book §9 (Recoverable Errors with Result)

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::split::Split;

/// Errors produced while pairing, planning or materializing a split.
#[derive(Debug, Error)]
pub enum SplitError {
    /// `images/` or `masks/` is absent or not a directory
    #[error("missing input directory '{}' (expected 'images' and 'masks' under the base directory)", path.display())]
    MissingInputDirectory { path: PathBuf },

    /// The two input directories share no stems
    #[error(
        "no paired image/mask filenames found (matching stems) between '{}' and '{}'",
        images.display(),
        masks.display()
    )]
    NoPairedFiles { images: PathBuf, masks: PathBuf },

    /// Ratios out of [0, 1] or summing past 1
    #[error("invalid split ratios: train={train}, test={test} (each must be in [0, 1] and train + test <= 1)")]
    InvalidRatio { train: f64, test: f64 },

    /// Two files in one directory share a stem (strict mode only)
    #[error(
        "duplicate stem '{stem}': '{}' and '{}'",
        first.display(),
        second.display()
    )]
    DuplicateStem {
        stem:   String,
        first:  PathBuf,
        second: PathBuf,
    },

    /// A stem in the plan has no image or no mask to copy
    #[error("stem '{stem}' is assigned to {split} but has no paired image/mask")]
    UnpairedStem { stem: String, split: Split },

    /// Any filesystem failure while scanning, resetting or copying
    #[error("I/O error at '{}': {source}", path.display())]
    Io {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SplitError {
    /// Attach the offending path to an io::Error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

/// Result type for the split pipeline
pub type Result<T> = std::result::Result<T, SplitError>;
