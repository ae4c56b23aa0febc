// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Everything that writes to disk:
//
//   output_dirs.rs — the six `<split>_images` / `<split>_masks`
//                    directories and their reset before a run
//
//   copier.rs      — copies each pair into its split directories,
//                    preserving file names and timestamps
//
//   manifest.rs    — optional JSON record of a completed split
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Destination directory layout and reset
pub mod output_dirs;

/// Metadata-preserving file copies and the materialize loop
pub mod copier;

/// JSON manifest of a completed split
pub mod manifest;
