use crate::models::args::ProcessArgs;
use anyhow::{Context, Result};
use starfield::Pipeline;
use starfield::domain::EngineConfig;
use starfield::features::census::Census;
use starfield::kernel::config::load_engine_config;
use starfield::kernel::dataset::{dedupe_by_domain, read_instances, write_instances};
use std::time::Instant;
use tracing::{debug, info};

/// Reads a raw dataset, runs the selected passes and writes the enriched records.
///
/// Statistics are printed to stdout unless the dataset itself goes there.
///
/// # Errors
/// Returns an error if the config is rejected or the dataset cannot be read or written.
pub fn run_process(args: &ProcessArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => load_engine_config(path)
            .with_context(|| format!("Critical: Configuration {} is malformed", path.display()))?,
        None => EngineConfig::default(),
    };

    let started = Instant::now();

    let mut records = read_instances(&args.input)
        .with_context(|| format!("Failed to load input {}", args.input.display()))?;
    if args.dedupe {
        dedupe_by_domain(&mut records);
    }

    let phases = args.phases();
    debug!(?phases, "Processing");
    let processed = Pipeline::new(config).phases(phases).run(records);

    write_instances(&args.output, &processed.records)
        .with_context(|| format!("Failed to save output {}", args.output.display()))?;

    let elapsed = started.elapsed();
    info!(records = processed.records.len(), elapsed_ms = elapsed.as_millis(), "Done");

    if args.writes_to_stdout() {
        return Ok(());
    }

    let census = Census::survey(&processed.records);
    if args.json {
        println!("{}", census.to_json().context("Failed to encode statistics")?);
    } else {
        println!("{census}");
        println!("Processing time: {elapsed:?}");
    }

    Ok(())
}
