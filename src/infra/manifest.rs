// ============================================================
// Layer 6 — Split Manifest
// ============================================================
// Optional JSON record of a finished split: the configuration
// that produced it, the per-split counts, and the stems in each
// split in shuffled order.
//
// Example (abridged):
//   {
//     "config":  { "base_dir": "dataset", "train_ratio": 0.8, ... },
//     "summary": { "total": 2, "train": 1, "test": 0, "val": 1 },
//     "assignment": { "train": ["b"], "test": [], "val": ["a"] }
//   }
//
// Reference: serde_json documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::application::split_use_case::SplitConfig;
use crate::domain::split::{SplitAssignment, SplitSummary};

/// Everything needed to audit or reproduce a split.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub config:     SplitConfig,
    pub summary:    SplitSummary,
    pub assignment: SplitAssignment,
}

impl Manifest {
    pub fn new(config: &SplitConfig, assignment: &SplitAssignment) -> Self {
        Self {
            config:     config.clone(),
            summary:    assignment.summary(),
            assignment: assignment.clone(),
        }
    }

    /// Pretty-printed JSON form
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the manifest to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create '{}'", parent.display()))?;
        }

        fs::write(path, self.to_json()?)
            .with_context(|| format!("Cannot write manifest to '{}'", path.display()))?;

        tracing::info!("Saved split manifest to '{}'", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn read_back(path: &Path) -> Manifest {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_save_and_load() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("reports/split.json");

        let assignment = SplitAssignment {
            train: vec!["b".into()],
            test:  vec![],
            val:   vec!["a".into()],
        };
        Manifest::new(&SplitConfig::default(), &assignment).save(&path).unwrap();

        let loaded = read_back(&path);
        assert_eq!(loaded.assignment, assignment);
        assert_eq!(loaded.summary.total, 2);
        assert_eq!(loaded.config.seed, 42);
    }
}
