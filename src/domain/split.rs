// ============================================================
// Layer 3 — Split Domain Types
// ============================================================
// The three disjoint subsets every pair ends up in:
//
//   train → used to fit the segmentation model
//   test  → held out for the final evaluation
//   val   → used for tuning during training
//
// SplitAssignment holds the stems per split. Its three lists
// are disjoint and together contain every paired stem exactly
// once, so train + test + val == total.
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

use serde::{Deserialize, Serialize};

/// One of the three dataset subsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    Train,
    Test,
    Val,
}

impl Split {
    /// All splits in materialization order
    pub const ALL: [Split; 3] = [Split::Train, Split::Test, Split::Val];

    /// Directory prefix used for this split, e.g. `train` → `train_images`
    pub fn name(self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Test  => "test",
            Split::Val   => "val",
        }
    }
}

impl std::fmt::Display for Split {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Number of pairs assigned to each split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitSizes {
    pub train: usize,
    pub test:  usize,
    pub val:   usize,
}

/// Stems partitioned into train, test and val, in shuffled order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitAssignment {
    pub train: Vec<String>,
    pub test:  Vec<String>,
    pub val:   Vec<String>,
}

impl SplitAssignment {
    /// Stems assigned to one split
    pub fn stems(&self, split: Split) -> &[String] {
        match split {
            Split::Train => &self.train,
            Split::Test  => &self.test,
            Split::Val   => &self.val,
        }
    }

    /// Total number of assigned stems across all splits
    pub fn total(&self) -> usize {
        self.train.len() + self.test.len() + self.val.len()
    }

    pub fn summary(&self) -> SplitSummary {
        SplitSummary {
            total: self.total(),
            train: self.train.len(),
            test:  self.test.len(),
            val:   self.val.len(),
        }
    }
}

/// Counts reported to the user after a successful run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitSummary {
    pub total: usize,
    pub train: usize,
    pub test:  usize,
    pub val:   usize,
}

impl SplitSummary {
    /// Count one pair written into `split`.
    pub fn record(&mut self, split: Split) {
        self.total += 1;
        match split {
            Split::Train => self.train += 1,
            Split::Test  => self.test += 1,
            Split::Val   => self.val += 1,
        }
    }
}

impl std::fmt::Display for SplitSummary {
    /// Two-line console summary:
    ///   Total pairs: 2
    ///   train: 1  test: 0  val: 1
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Total pairs: {}", self.total)?;
        write!(
            f,
            "train: {}  test: {}  val: {}",
            self.train, self.test, self.val
        )
    }
}
