// ============================================================
// Layer 6 — Output Directory Layout
// ============================================================
// The six destination directories, all siblings of the input
// directories under the base directory:
//
//   dataset/
//     images/          ← input
//     masks/           ← input
//     train_images/    train_masks/
//     test_images/     test_masks/
//     val_images/      val_masks/
//
// reset() deletes each destination if it exists and recreates it
// empty, so a second run never accumulates files from the first.
//
// Reference: std::fs::remove_dir_all / create_dir_all documentation

use std::{fs, path::PathBuf};

use crate::domain::error::{Result, SplitError};
use crate::domain::split::Split;
use crate::domain::traits::PairRole;

/// Locations of the input and output directories under one base directory.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    base: PathBuf,
}

impl OutputLayout {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// `<base>/images`
    pub fn images_input(&self) -> PathBuf {
        self.base.join("images")
    }

    /// `<base>/masks`
    pub fn masks_input(&self) -> PathBuf {
        self.base.join("masks")
    }

    /// Destination for one half of the pairs in one split,
    /// e.g. (Train, Mask) → `<base>/train_masks`
    pub fn dir(&self, split: Split, role: PairRole) -> PathBuf {
        let suffix = match role {
            PairRole::Image => "images",
            PairRole::Mask  => "masks",
        };
        self.base.join(format!("{}_{}", split.name(), suffix))
    }

    /// All six destination directories in split order
    pub fn all_dirs(&self) -> Vec<PathBuf> {
        Split::ALL
            .iter()
            .flat_map(|&split| [self.dir(split, PairRole::Image), self.dir(split, PairRole::Mask)])
            .collect()
    }

    /// Delete every destination directory and recreate it empty.
    pub fn reset(&self) -> Result<()> {
        for dir in self.all_dirs() {
            if dir.exists() {
                tracing::debug!("Removing previous output '{}'", dir.display());
                fs::remove_dir_all(&dir).map_err(|e| SplitError::io(&dir, e))?;
            }
            fs::create_dir_all(&dir).map_err(|e| SplitError::io(&dir, e))?;
        }
        tracing::info!("Prepared output directories under '{}'", self.base.display());
        Ok(())
    }
}
