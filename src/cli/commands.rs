// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Two subcommands share the same selection flags:
//
//   split — pair, shuffle and copy into the six split directories
//   plan  — pair and shuffle only, print the assignment as JSON
//
// Reference: clap derive documentation
//            Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::split_use_case::SplitConfig;

/// The top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split images/ and masks/ into train, test and val directories
    Split(SplitArgs),

    /// Show which pairs would go where, without copying anything
    Plan(PlanArgs),
}

/// Flags that decide which pairs exist and where they go
#[derive(Args, Debug, Clone)]
pub struct SelectionArgs {
    /// Directory containing `images/` and `masks/`; outputs are created here too
    #[arg(long, default_value = "dataset")]
    pub base_dir: PathBuf,

    /// Fraction of pairs assigned to training
    #[arg(long, default_value_t = 0.8)]
    pub train_ratio: f64,

    /// Fraction of pairs assigned to testing (validation gets the rest)
    #[arg(long, default_value_t = 0.1)]
    pub test_ratio: f64,

    /// Shuffle seed; the same seed and inputs always give the same split
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Fail instead of warning when two files in one directory share a stem
    #[arg(long)]
    pub strict_duplicates: bool,
}

/// Arguments for the `split` command
#[derive(Args, Debug)]
pub struct SplitArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Write a JSON manifest of the finished split to this path
    #[arg(long)]
    pub manifest: Option<PathBuf>,
}

/// Arguments for the `plan` command
#[derive(Args, Debug)]
pub struct PlanArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,
}

impl From<SelectionArgs> for SplitConfig {
    fn from(a: SelectionArgs) -> Self {
        SplitConfig {
            base_dir:          a.base_dir,
            train_ratio:       a.train_ratio,
            test_ratio:        a.test_ratio,
            seed:              a.seed,
            strict_duplicates: a.strict_duplicates,
            manifest:          None,
        }
    }
}

/// Convert CLI SplitArgs into the application-layer SplitConfig.
/// The application layer never sees clap types.
impl From<SplitArgs> for SplitConfig {
    fn from(a: SplitArgs) -> Self {
        SplitConfig {
            manifest: a.manifest,
            ..a.selection.into()
        }
    }
}

impl From<PlanArgs> for SplitConfig {
    fn from(a: PlanArgs) -> Self {
        a.selection.into()
    }
}
