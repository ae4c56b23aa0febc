// ============================================================
// Layer 4 — Pairing Engine
// ============================================================
// Matches images to masks by stem:
//
//   images/ {a.png, b.jpg, c.png}
//   masks/  {a.png, b.png, d.png}
//                 │
//                 ▼
//   paired stems  [a, b]        (c and d have no partner)
//
// The intersection is returned SORTED. The shuffle that follows
// is seeded, so a fixed starting order is what makes the whole
// split reproducible across machines and filesystems.
//
// Reference: std::collections::BTreeMap documentation
//            Rust Book §8 (Common Collections)

use std::path::Path;

use crate::domain::error::{Result, SplitError};
use crate::domain::file_entry::{FileEntry, StemMapping};
use crate::domain::traits::StemSource;

/// Fail with MissingInputDirectory unless both paths are directories.
/// Runs before any enumeration.
pub fn ensure_input_dirs(images: &Path, masks: &Path) -> Result<()> {
    for dir in [images, masks] {
        if !dir.is_dir() {
            return Err(SplitError::MissingInputDirectory { path: dir.to_path_buf() });
        }
    }
    Ok(())
}

/// Stems present in both mappings, in ascending order.
pub fn pair_stems(images: &StemMapping, masks: &StemMapping) -> Vec<String> {
    // BTreeMap keys iterate sorted, so the filter keeps that order
    images
        .keys()
        .filter(|stem| masks.contains_key(*stem))
        .cloned()
        .collect()
}

/// Both stem mappings plus their sorted intersection.
#[derive(Debug, Clone)]
pub struct PairedFiles {
    pub images: StemMapping,
    pub masks:  StemMapping,
    pub stems:  Vec<String>,
}

impl PairedFiles {
    /// Scan both sources and pair them.
    /// Returns NoPairedFiles when the sources share no stems.
    pub fn collect(images: &impl StemSource, masks: &impl StemSource) -> Result<Self> {
        let image_map = images.collect()?;
        let mask_map  = masks.collect()?;
        let stems     = pair_stems(&image_map, &mask_map);

        let unmatched_images = image_map.len() - stems.len();
        let unmatched_masks  = mask_map.len() - stems.len();
        if unmatched_images > 0 || unmatched_masks > 0 {
            tracing::info!(
                "Skipping {} image(s) without a mask and {} mask(s) without an image",
                unmatched_images,
                unmatched_masks
            );
        }

        if stems.is_empty() {
            return Err(SplitError::NoPairedFiles {
                images: images.location().to_path_buf(),
                masks:  masks.location().to_path_buf(),
            });
        }

        Ok(Self {
            images: image_map,
            masks:  mask_map,
            stems,
        })
    }

    pub fn len(&self) -> usize {
        self.stems.len()
    }

    /// The (image, mask) entries for a paired stem.
    /// None only for stems that are not part of this pairing.
    pub fn get(&self, stem: &str) -> Option<(&FileEntry, &FileEntry)> {
        Some((self.images.get(stem)?, self.masks.get(stem)?))
    }
}
