// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and prints results. All work is
// delegated to Layer 2 (application).
//
//   `split` — copy pairs into train/test/val directories
//   `plan`  — dry run, prints the assignment as JSON
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, PlanArgs, SplitArgs};

use crate::application::split_use_case::SplitUseCase;
use crate::infra::manifest::Manifest;

#[derive(Parser, Debug)]
#[command(
    name = "mask-split",
    version,
    about = "Split paired images and masks into train, test and validation directories."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the matching use case
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Split(args) => run_split(args),
            Commands::Plan(args)  => run_plan(args),
        }
    }
}

fn run_split(args: SplitArgs) -> Result<()> {
    let use_case = SplitUseCase::new(args.into());
    tracing::info!("Splitting dataset in '{}'", use_case.config().base_dir.display());

    let summary = use_case.execute()?;

    println!("{summary}");
    println!("Done");
    Ok(())
}

fn run_plan(args: PlanArgs) -> Result<()> {
    let use_case = SplitUseCase::new(args.into());
    let (_, assignment) = use_case.plan()?;

    let manifest = Manifest::new(use_case.config(), &assignment);
    println!("{}", manifest.to_json()?);
    Ok(())
}
