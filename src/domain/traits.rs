// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer talks to the filesystem through two
// seams:
//
//   StemSource → anything that yields a stem → file mapping
//                (DirScanner reads a flat directory)
//   PairSink   → anything that receives one file of a pair for
//                a given split (FsCopier copies it to disk)
//
// The split planner and pairing logic never see paths on disk,
// only these abstractions and plain data.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use std::path::Path;

use crate::domain::error::Result;
use crate::domain::file_entry::{FileEntry, StemMapping};
use crate::domain::split::Split;

// ─── StemSource ───────────────────────────────────────────────────────────────
/// Any component that can enumerate files keyed by stem.
pub trait StemSource {
    /// Where the files come from, used in error messages.
    fn location(&self) -> &Path;

    /// Collect every accepted file, keyed by its stem.
    fn collect(&self) -> Result<StemMapping>;
}

// ─── PairSink ─────────────────────────────────────────────────────────────────
/// Whether a file is the image or the mask half of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairRole {
    Image,
    Mask,
}

/// Receives the files of each pair, one at a time.
pub trait PairSink {
    /// Store `entry` under `split` in the directory for `role`.
    fn put(&mut self, split: Split, role: PairRole, entry: &FileEntry) -> Result<()>;
}
