// ============================================================
// Layer 6 — File Copier / Materializer
// ============================================================
// Copies every paired image and mask into its split directory,
// keeping the original file name (extension included).
//
// A planned stem without both files is a fatal UnpairedStem
// error; the summary only ever counts pairs that were copied.
//
// copy_preserving() behaves like `cp -p`: contents, permission
// bits, and access/modification times are carried over. The
// source file is only read.
//
// Copy failures abort the run immediately. Files already copied
// stay where they are; there is no rollback.
//
// Reference: std::fs::File::set_times documentation
//            Rust Book §12 (I/O and File Handling)

use std::{
    fs::{self, File, FileTimes},
    io,
    path::Path,
};

use crate::data::pairing::PairedFiles;
use crate::domain::error::{Result, SplitError};
use crate::domain::file_entry::FileEntry;
use crate::domain::split::{Split, SplitAssignment, SplitSummary};
use crate::domain::traits::{PairRole, PairSink};
use crate::infra::output_dirs::OutputLayout;

/// Copy `src` to `dst`, preserving permissions and timestamps.
pub fn copy_preserving(src: &Path, dst: &Path) -> Result<()> {
    let meta = fs::metadata(src).map_err(|e| SplitError::io(src, e))?;

    let mut reader = File::open(src).map_err(|e| SplitError::io(src, e))?;
    let mut writer = File::create(dst).map_err(|e| SplitError::io(dst, e))?;
    io::copy(&mut reader, &mut writer).map_err(|e| SplitError::io(dst, e))?;

    let mut times = FileTimes::new();
    if let Ok(modified) = meta.modified() {
        times = times.set_modified(modified);
    }
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    writer.set_times(times).map_err(|e| SplitError::io(dst, e))?;

    // permissions last, a read-only source would otherwise block set_times
    writer
        .set_permissions(meta.permissions())
        .map_err(|e| SplitError::io(dst, e))
}

/// Writes pairs into the six directories of an OutputLayout.
/// Implements the PairSink trait from Layer 3.
pub struct FsCopier {
    layout: OutputLayout,
}

impl FsCopier {
    pub fn new(layout: OutputLayout) -> Self {
        Self { layout }
    }
}

impl PairSink for FsCopier {
    fn put(&mut self, split: Split, role: PairRole, entry: &FileEntry) -> Result<()> {
        let dst = self.layout.dir(split, role).join(entry.file_name());
        copy_preserving(&entry.path, &dst)?;
        tracing::debug!("{} → {}", entry.path.display(), dst.display());
        Ok(())
    }
}

/// Send every assigned pair to `sink`, split by split.
/// Returns the counts that were written; stops at the first failure.
pub fn materialize(
    assignment: &SplitAssignment,
    paired:     &PairedFiles,
    sink:       &mut impl PairSink,
) -> Result<SplitSummary> {
    let mut written = SplitSummary::default();

    for split in Split::ALL {
        let stems = assignment.stems(split);
        tracing::info!("Copying {} pair(s) into {}", stems.len(), split);

        for stem in stems {
            let (image, mask) = paired.get(stem).ok_or_else(|| SplitError::UnpairedStem {
                stem: stem.clone(),
                split,
            })?;
            sink.put(split, PairRole::Image, image)?;
            sink.put(split, PairRole::Mask, mask)?;
            written.record(split);
        }
    }

    Ok(written)
}
