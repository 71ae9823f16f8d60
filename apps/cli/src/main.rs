#![allow(clippy::print_stderr, clippy::print_stdout)]

pub mod handlers;
pub mod models;

use crate::handlers::{analyze, process, repair};
use crate::models::args::{AppCommands, Cli};

use anyhow::Result;
use clap::Parser;
use starfield_logger::Logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log = Logger::builder().name(env!("CARGO_BIN_NAME")).verbose(cli.verbose).init()?;

    match cli.command {
        AppCommands::Process(args) => process::run_process(&args)?,
        AppCommands::Analyze { file, threshold } => analyze::run_analyze(&file, threshold)?,
        AppCommands::Repair { input, output } => repair::run_repair(&input, &output)?,
    }

    Ok(())
}
