use anyhow::{Context, Result};
use starfield::features::census::Tally;
use std::path::Path;

/// Prints the tally of a processed dataset as JSON.
///
/// # Errors
/// Returns an error if the source is unreadable or not a JSON array.
pub fn run_analyze(file: &Path, threshold: u64) -> Result<()> {
    let tally = Tally::read(file, threshold)
        .with_context(|| format!("Failed to analyze {}", file.display()))?;
    println!("{}", tally.to_json().context("Failed to encode tally")?);
    Ok(())
}
