use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (overrides RUST_LOG)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a candidate output file with the deterministic metric
    Score {
        /// Path to a file holding the raw model output
        #[arg(long, short)]
        input: PathBuf,

        /// Write a JSON report under this directory
        #[arg(long)]
        report_dir: Option<PathBuf>,
    },
    /// Score a candidate output file with the LLM-as-judge metric
    Judge {
        /// Path to a file holding the raw model output
        #[arg(long, short)]
        input: PathBuf,

        /// Return the labeled objective triple instead of one combined score
        #[arg(long)]
        multi: bool,

        /// Write a JSON report under this directory
        #[arg(long)]
        report_dir: Option<PathBuf>,
    },
    /// Show a train/validation partition of the training data
    Dataset {
        /// Partition mode
        #[arg(long, value_enum, default_value = "fixed")]
        mode: SplitMode,

        /// Train share in (0, 1)
        #[arg(long, default_value = "0.7")]
        ratio: f64,

        /// Seed for random mode (omit for OS entropy)
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SplitMode {
    /// Deterministic prefix split in dataset order
    Fixed,
    /// Shuffled split (non-reproducible unless seeded)
    Random,
}
