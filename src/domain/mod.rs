// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits describing the dataset
// split: discovered files, stem mappings, the three splits and
// the error taxonomy.
//
// Rules for this layer:
//   - NO filesystem access
//   - NO randomness
//   - NO printing or logging setup
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

/// A discovered image or mask file and its pairing stem
pub mod file_entry;

/// Split names, assignments and summary counts
pub mod split;

/// Error taxonomy for the split pipeline
pub mod error;

/// Abstractions implemented by the data and infra layers
pub mod traits;
