use anyhow::{Context, Result};
use starfield::features::repair::reclassify;
use starfield::kernel::dataset::{read_instances, write_instances};
use std::path::Path;
use tracing::info;

/// Reclassifies `Unknown` records of `input` and writes the whole dataset to `output`.
///
/// # Errors
/// Returns an error if the dataset cannot be read or written.
pub fn run_repair(input: &Path, output: &Path) -> Result<()> {
    let mut records = read_instances(input)
        .with_context(|| format!("Failed to load {}", input.display()))?;

    let fixed = reclassify(&mut records);
    info!(fixed = fixed.len(), total = records.len(), "Repair finished");

    write_instances(output, &records)
        .with_context(|| format!("Failed to save {}", output.display()))?;
    Ok(())
}
