// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the two input directories and a finished
// split plan:
//
//   images/   masks/
//       │        │
//       ▼        ▼
//   DirScanner (×2)   → stem → file mapping per directory
//       │
//       ▼
//   PairedFiles       → sorted stems present in both
//       │
//       ▼
//   plan_split        → seeded shuffle, then train/test/val slices
//
// Nothing in this layer writes to disk.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Scans a flat directory for accepted raster files
pub mod scanner;

/// Matches image and mask files by stem
pub mod pairing;

/// Shuffles and splits stems into train/test/val
pub mod splitter;
