// ============================================================
// Layer 2 — SplitUseCase
// ============================================================
// Runs the whole split strictly in order:
//
//   Step 1: Validate ratios              (Layer 4 - data)
//   Step 2: Check images/ and masks/     (Layer 4 - data)
//   Step 3: Scan and pair by stem        (Layer 4 - data)
//   Step 4: Shuffle and slice            (Layer 4 - data)
//   Step 5: Reset output directories     (Layer 6 - infra)
//   Step 6: Copy pairs into splits       (Layer 6 - infra)
//   Step 7: Save manifest (optional)     (Layer 6 - infra)
//
// Steps 1-4 never touch the filesystem beyond reading, so any
// MissingInputDirectory / NoPairedFiles / InvalidRatio failure
// leaves existing output directories exactly as they were.
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::{
    pairing::{ensure_input_dirs, PairedFiles},
    scanner::{DirScanner, DuplicatePolicy},
    splitter::{plan_split, SplitRatios, DEFAULT_SEED},
};
use crate::domain::split::{SplitAssignment, SplitSummary};
use crate::domain::traits::PairSink;
use crate::infra::{
    copier::{materialize, FsCopier},
    manifest::Manifest,
    output_dirs::OutputLayout,
};

// ─── Split Configuration ─────────────────────────────────────────────────────
// Everything a run depends on. Defaults:
//   base_dir          = "dataset"
//   train_ratio       = 0.8
//   test_ratio        = 0.1   (val gets the remaining 0.1)
//   seed              = 42
//   strict_duplicates = false (last file name wins, with a warning)
//   manifest          = none
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitConfig {
    pub base_dir:          PathBuf,
    pub train_ratio:       f64,
    pub test_ratio:        f64,
    pub seed:              u64,
    pub strict_duplicates: bool,
    pub manifest:          Option<PathBuf>,
}

impl Default for SplitConfig {
    fn default() -> Self {
        let ratios = SplitRatios::default();
        Self {
            base_dir:          PathBuf::from("dataset"),
            train_ratio:       ratios.train,
            test_ratio:        ratios.test,
            seed:              DEFAULT_SEED,
            strict_duplicates: false,
            manifest:          None,
        }
    }
}

impl SplitConfig {
    fn duplicate_policy(&self) -> DuplicatePolicy {
        if self.strict_duplicates {
            DuplicatePolicy::Reject
        } else {
            DuplicatePolicy::LastWins
        }
    }
}

// ─── SplitUseCase ─────────────────────────────────────────────────────────────
pub struct SplitUseCase {
    config: SplitConfig,
    layout: OutputLayout,
}

impl SplitUseCase {
    pub fn new(config: SplitConfig) -> Self {
        let layout = OutputLayout::new(&config.base_dir);
        Self { config, layout }
    }

    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Steps 1-4: pair the inputs and compute the assignment.
    /// Read-only; used directly by the `plan` command.
    pub fn plan(&self) -> Result<(PairedFiles, SplitAssignment)> {
        let cfg = &self.config;

        // ── Step 1: Validate ratios ──────────────────────────────────────────
        let ratios = SplitRatios::new(cfg.train_ratio, cfg.test_ratio)?;
        tracing::debug!(
            "Ratios: train {:.3}, test {:.3}, val {:.3}",
            ratios.train,
            ratios.test,
            ratios.val()
        );

        // ── Step 2: Both input directories must exist ────────────────────────
        let images_dir = self.layout.images_input();
        let masks_dir  = self.layout.masks_input();
        ensure_input_dirs(&images_dir, &masks_dir)?;

        // ── Step 3: Scan and pair ────────────────────────────────────────────
        tracing::info!("Pairing files under '{}'", cfg.base_dir.display());
        let policy = cfg.duplicate_policy();
        let paired = PairedFiles::collect(
            &DirScanner::new(images_dir, policy),
            &DirScanner::new(masks_dir, policy),
        )?;
        tracing::info!("Found {} image/mask pairs", paired.len());

        // ── Step 4: Seeded shuffle + slice ───────────────────────────────────
        let assignment = plan_split(paired.stems.clone(), ratios, cfg.seed);

        Ok((paired, assignment))
    }

    /// Run the full pipeline and return the per-split counts.
    pub fn execute(&self) -> Result<SplitSummary> {
        let mut copier = FsCopier::new(self.layout.clone());
        self.execute_into(&mut copier)
    }

    /// Same as `execute`, with pairs handed to `sink` instead of copied
    /// by an FsCopier.
    pub fn execute_into(&self, sink: &mut impl PairSink) -> Result<SplitSummary> {
        let (paired, assignment) = self.plan()?;

        // ── Step 5: Fresh output directories ─────────────────────────────────
        self.layout
            .reset()
            .context("Failed to prepare output directories")?;

        // ── Step 6: Copy every pair ──────────────────────────────────────────
        let summary = materialize(&assignment, &paired, sink)
            .context("Failed while copying pairs; output directories may be incomplete")?;

        // ── Step 7: Manifest ─────────────────────────────────────────────────
        if let Some(path) = &self.config.manifest {
            Manifest::new(&self.config, &assignment).save(path)?;
        }

        tracing::info!(
            "Split complete: {} train, {} test, {} val",
            summary.train,
            summary.test,
            summary.val
        );
        Ok(summary)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::SplitError;
    use std::collections::BTreeSet;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_files(dir: &Path, names: &[&str]) {
        fs::create_dir_all(dir).unwrap();
        for name in names {
            fs::write(dir.join(name), name.as_bytes()).unwrap();
        }
    }

    fn list(dir: &Path) -> BTreeSet<String> {
        fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect()
    }

    fn stems_in(dir: &Path) -> BTreeSet<String> {
        list(dir)
            .into_iter()
            .map(|n| n.rsplit_once('.').map_or(n.clone(), |(s, _)| s.to_string()))
            .collect()
    }

    fn config_for(base: &Path) -> SplitConfig {
        SplitConfig {
            base_dir: base.to_path_buf(),
            ..SplitConfig::default()
        }
    }

    fn split_error(err: &anyhow::Error) -> &SplitError {
        err.downcast_ref::<SplitError>().expect("expected a SplitError")
    }

    #[test]
    fn test_two_pair_scenario() {
        let tmp  = TempDir::new().unwrap();
        let base = tmp.path();
        write_files(&base.join("images"), &["a.png", "b.jpg", "c.png"]);
        write_files(&base.join("masks"), &["a.png", "b.png", "d.png"]);

        let summary = SplitUseCase::new(config_for(base)).execute().unwrap();
        assert_eq!(summary, SplitSummary { total: 2, train: 1, test: 0, val: 1 });
        assert_eq!(summary.to_string(), "Total pairs: 2\ntrain: 1  test: 0  val: 1");

        assert_eq!(list(&base.join("train_images")).len(), 1);
        assert_eq!(list(&base.join("train_masks")).len(), 1);
        assert!(list(&base.join("test_images")).is_empty());
        assert!(list(&base.join("test_masks")).is_empty());
        assert_eq!(list(&base.join("val_images")).len(), 1);

        // unpaired files never land anywhere
        let mut all = BTreeSet::new();
        for split in ["train", "test", "val"] {
            all.extend(stems_in(&base.join(format!("{split}_images"))));
            all.extend(stems_in(&base.join(format!("{split}_masks"))));
        }
        assert_eq!(all, BTreeSet::from(["a".to_string(), "b".to_string()]));

        // original extensions are kept per side
        let b_in_train = list(&base.join("train_images")).contains("b.jpg");
        let b_in_val   = list(&base.join("val_images")).contains("b.jpg");
        assert!(b_in_train ^ b_in_val);

        // sources are copied, not moved
        assert_eq!(list(&base.join("images")).len(), 3);
    }

    #[test]
    fn test_images_and_masks_land_in_same_split() {
        let tmp  = TempDir::new().unwrap();
        let base = tmp.path();
        let names: Vec<String> = (0..25).map(|i| format!("s{i:02}.png")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        write_files(&base.join("images"), &refs);
        write_files(&base.join("masks"), &refs);

        let summary = SplitUseCase::new(config_for(base)).execute().unwrap();
        assert_eq!(summary, SplitSummary { total: 25, train: 20, test: 2, val: 3 });

        for split in ["train", "test", "val"] {
            assert_eq!(
                stems_in(&base.join(format!("{split}_images"))),
                stems_in(&base.join(format!("{split}_masks")))
            );
        }
    }

    #[test]
    fn test_repeated_runs_are_identical_and_do_not_accumulate() {
        let tmp  = TempDir::new().unwrap();
        let base = tmp.path();
        let names: Vec<String> = (0..30).map(|i| format!("f{i}.png")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        write_files(&base.join("images"), &refs);
        write_files(&base.join("masks"), &refs);

        let use_case = SplitUseCase::new(config_for(base));
        use_case.execute().unwrap();
        let first: Vec<_> = ["train_images", "test_images", "val_images"]
            .iter()
            .map(|d| list(&base.join(d)))
            .collect();

        fs::write(base.join("train_images").join("stray.png"), b"x").unwrap();
        use_case.execute().unwrap();
        let second: Vec<_> = ["train_images", "test_images", "val_images"]
            .iter()
            .map(|d| list(&base.join(d)))
            .collect();

        assert_eq!(first, second);
        assert!(!list(&base.join("train_images")).contains("stray.png"));
    }

    #[test]
    fn test_no_shared_stems_touches_nothing() {
        let tmp  = TempDir::new().unwrap();
        let base = tmp.path();
        write_files(&base.join("images"), &["a.png"]);
        write_files(&base.join("masks"), &["b.png"]);

        let err = SplitUseCase::new(config_for(base)).execute().unwrap_err();
        assert!(matches!(split_error(&err), SplitError::NoPairedFiles { .. }));
        assert!(!base.join("train_images").exists());
        assert!(!base.join("val_masks").exists());
    }

    #[test]
    fn test_missing_masks_dir() {
        let tmp  = TempDir::new().unwrap();
        let base = tmp.path();
        write_files(&base.join("images"), &["a.png"]);
        write_files(&base.join("val_images"), &["keep.png"]);

        let err = SplitUseCase::new(config_for(base)).execute().unwrap_err();
        assert!(matches!(split_error(&err), SplitError::MissingInputDirectory { .. }));
        // a previous split is left untouched
        assert!(base.join("val_images").join("keep.png").exists());
    }

    #[test]
    fn test_invalid_ratio_rejected_before_io() {
        let tmp = TempDir::new().unwrap();
        let config = SplitConfig {
            train_ratio: 0.95,
            test_ratio:  0.1,
            ..config_for(&tmp.path().join("does-not-exist"))
        };

        let err = SplitUseCase::new(config).plan().unwrap_err();
        assert!(matches!(split_error(&err), SplitError::InvalidRatio { .. }));
    }

    #[test]
    fn test_strict_duplicates() {
        let tmp  = TempDir::new().unwrap();
        let base = tmp.path();
        write_files(&base.join("images"), &["a.png", "a.jpg"]);
        write_files(&base.join("masks"), &["a.png"]);

        let lenient = SplitUseCase::new(config_for(base)).plan().unwrap();
        assert_eq!(lenient.0.len(), 1);

        let strict = SplitConfig { strict_duplicates: true, ..config_for(base) };
        let err = SplitUseCase::new(strict).plan().unwrap_err();
        assert!(matches!(split_error(&err), SplitError::DuplicateStem { .. }));
    }

    /// Accepts `limit` files, then fails like a full disk would
    struct FailingSink {
        limit: usize,
        puts:  usize,
    }

    impl PairSink for FailingSink {
        fn put(
            &mut self,
            _split: crate::domain::split::Split,
            _role: crate::domain::traits::PairRole,
            entry: &crate::domain::file_entry::FileEntry,
        ) -> crate::domain::error::Result<()> {
            if self.puts == self.limit {
                return Err(SplitError::io(
                    &entry.path,
                    std::io::Error::new(std::io::ErrorKind::Other, "no space left on device"),
                ));
            }
            self.puts += 1;
            Ok(())
        }
    }

    #[test]
    fn test_copy_failure_aborts_run() {
        let tmp  = TempDir::new().unwrap();
        let base = tmp.path();
        let names: Vec<String> = (0..10).map(|i| format!("p{i}.png")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        write_files(&base.join("images"), &refs);
        write_files(&base.join("masks"), &refs);

        let manifest_path = base.join("split.json");
        let config = SplitConfig {
            manifest: Some(manifest_path.clone()),
            ..config_for(base)
        };
        let mut sink = FailingSink { limit: 3, puts: 0 };

        let err = SplitUseCase::new(config).execute_into(&mut sink).unwrap_err();

        assert!(matches!(split_error(&err), SplitError::Io { .. }));
        assert_eq!(sink.puts, 3);
        // outputs were reset, but the run stopped before the manifest
        assert!(base.join("train_images").is_dir());
        assert!(!manifest_path.exists());
    }

    #[test]
    fn test_manifest_written() {
        let tmp  = TempDir::new().unwrap();
        let base = tmp.path();
        write_files(&base.join("images"), &["a.png", "b.png", "c.png"]);
        write_files(&base.join("masks"), &["a.png", "b.png", "c.png"]);

        let manifest_path = base.join("split.json");
        let config = SplitConfig {
            manifest: Some(manifest_path.clone()),
            ..config_for(base)
        };
        let summary = SplitUseCase::new(config).execute().unwrap();

        let manifest: Manifest =
            serde_json::from_str(&fs::read_to_string(&manifest_path).unwrap()).unwrap();
        assert_eq!(manifest.summary, summary);
        assert_eq!(manifest.assignment.total(), 3);
    }
}
