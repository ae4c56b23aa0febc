// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the data and infra layers into one run.
//
// Rules for this layer:
//   - No pairing or shuffling logic here (that's Layer 4)
//   - No printing (that's Layer 1)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

/// Pair → plan → copy workflow and its configuration
pub mod split_use_case;
