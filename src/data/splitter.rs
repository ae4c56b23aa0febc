// ============================================================
// Layer 4 — Train/Test/Validation Splitter
// ============================================================
// Shuffles the sorted paired stems with a seeded RNG and cuts
// the result into three contiguous slices:
//
//   shuffled: [ s0 s1 ... | ... | ... ]
//              └─ train ─┘└test┘└ val ┘
//
//   n_train = floor(total * train_ratio)
//   n_test  = floor(total * test_ratio)
//   n_val   = total - n_train - n_test
//
// val absorbs all rounding slack, so no pair is ever lost and
// tiny datasets may legitimately give train or test zero pairs.
//
// The RNG is ChaCha8 seeded from a u64. Its output stream is
// fixed by the algorithm rather than by the rand version or the
// platform, so the same stems and seed always give the same
// split.
//
// Reference: rand::seq::SliceRandom documentation
//            rand_chacha crate documentation

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::domain::error::{Result, SplitError};
use crate::domain::split::{SplitAssignment, SplitSizes};

/// Seed used when none is configured
pub const DEFAULT_SEED: u64 = 42;

const RATIO_TOLERANCE: f64 = 1e-9;

/// Fractions of the dataset assigned to train and test.
/// Validation receives whatever is left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitRatios {
    pub train: f64,
    pub test:  f64,
}

impl SplitRatios {
    /// Validated constructor.
    /// Each ratio must be finite and in [0, 1], and their sum at most 1.
    pub fn new(train: f64, test: f64) -> Result<Self> {
        let in_range = |r: f64| r.is_finite() && (0.0..=1.0).contains(&r);

        if !in_range(train) || !in_range(test) || train + test > 1.0 + RATIO_TOLERANCE {
            return Err(SplitError::InvalidRatio { train, test });
        }
        Ok(Self { train, test })
    }

    /// Implied validation fraction
    pub fn val(&self) -> f64 {
        (1.0 - self.train - self.test).max(0.0)
    }
}

impl Default for SplitRatios {
    /// 80% train, 10% test, 10% val
    fn default() -> Self {
        Self { train: 0.8, test: 0.1 }
    }
}

/// Compute integral split sizes that always sum to `total`.
pub fn split_sizes(total: usize, ratios: SplitRatios) -> SplitSizes {
    let floor_of = |ratio: f64| ((total as f64) * ratio).floor() as usize;

    let train = floor_of(ratios.train).min(total);
    let test  = floor_of(ratios.test).min(total - train);
    let val   = total - train - test;

    SplitSizes { train, test, val }
}

/// Deterministically permute `stems` in place.
pub fn shuffle_stems(stems: &mut [String], seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    stems.shuffle(&mut rng);
}

/// Shuffle `stems` with `seed` and slice them into train/test/val.
///
/// `stems` should already be sorted; the same sorted input and
/// seed always produce the same assignment.
pub fn plan_split(mut stems: Vec<String>, ratios: SplitRatios, seed: u64) -> SplitAssignment {
    shuffle_stems(&mut stems, seed);

    let sizes = split_sizes(stems.len(), ratios);

    // split_off(n) leaves [0..n) behind and returns [n..)
    let mut test = stems.split_off(sizes.train);
    let val      = test.split_off(sizes.test);
    let train    = stems;

    tracing::debug!(
        "Planned split: {} train, {} test, {} val (seed {})",
        train.len(),
        test.len(),
        val.len(),
        seed
    );

    SplitAssignment { train, test, val }
}
