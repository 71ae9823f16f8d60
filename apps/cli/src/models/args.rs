//! # CLI Argument Definitions
//!
//! Subcommands, arguments and flags of the `starfield` binary. A path of `-` stands for
//! stdin or stdout.

use clap::{Args, Parser, Subcommand};
use starfield::Phases;
use starfield::domain::constants::{DEFAULT_INPUT, DEFAULT_OUTPUT, STDIO_MARKER};
use starfield::features::census::DEFAULT_THRESHOLD;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "starfield")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Deterministic colors and galaxy coordinates for fediverse instances")]
pub struct Cli {
    /// Log at DEBUG level (RUST_LOG still wins when set)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: AppCommands,
}

#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Color and place every record of a dataset
    Process(ProcessArgs),
    /// Count heavy instances and special placements in a processed dataset
    Analyze {
        /// Processed dataset ('-' for stdin)
        #[arg(short, long, default_value = STDIO_MARKER)]
        file: PathBuf,

        /// User count above which an instance is counted as heavy
        #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: u64,
    },
    /// Assign a platform to `Unknown` records by keyword-matching their domain
    Repair {
        /// Dataset to repair ('-' for stdin)
        input: PathBuf,

        /// Where to write the repaired dataset ('-' for stdout)
        #[arg(short, long, default_value = STDIO_MARKER)]
        output: PathBuf,
    },
}

#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Raw dataset ('-' for stdin)
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Processed dataset ('-' for stdout)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Only compute colors
    #[arg(long, conflicts_with = "positions_only")]
    pub colors_only: bool,

    /// Only compute positions
    #[arg(long)]
    pub positions_only: bool,

    /// Engine config file (toml, json or yaml); defaults apply when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Drop records whose domain already appeared
    #[arg(long)]
    pub dedupe: bool,

    /// Print statistics as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl ProcessArgs {
    pub const fn phases(&self) -> Phases {
        match (self.colors_only, self.positions_only) {
            (true, _) => Phases::ColorsOnly,
            (_, true) => Phases::PositionsOnly,
            _ => Phases::All,
        }
    }

    pub fn writes_to_stdout(&self) -> bool {
        self.output.as_os_str() == STDIO_MARKER
    }
}
