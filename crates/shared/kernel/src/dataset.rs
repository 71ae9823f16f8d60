//! # Dataset I/O
//!
//! Reads and writes the flat JSON array of instance records. A source or sink of `-`
//! stands for stdin / stdout.

use fxhash::{FxBuildHasher, FxHashSet};
use serde::de::DeserializeOwned;
use starfield_domain::Instance;
use starfield_domain::constants::STDIO_MARKER;
use std::borrow::Cow;
use std::fs;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Dataset I/O error{}: {source}", format_context(.context))]
    Io { source: io::Error, context: Option<Cow<'static, str>> },

    #[error("Dataset JSON error{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },
}

pub trait DatasetErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, DatasetError>;
}

impl<T> DatasetErrorExt<T> for Result<T, DatasetError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                DatasetError::Io { context: c, .. } | DatasetError::Json { context: c, .. } => {
                    *c = Some(context.into());
                },
            }
            e
        })
    }
}

impl<T> DatasetErrorExt<T> for Result<T, io::Error> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, DatasetError> {
        self.map_err(|source| DatasetError::Io { source, context: Some(context.into()) })
    }
}

impl<T> DatasetErrorExt<T> for Result<T, serde_json::Error> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, DatasetError> {
        self.map_err(|source| DatasetError::Json { source, context: Some(context.into()) })
    }
}

impl From<io::Error> for DatasetError {
    fn from(source: io::Error) -> Self {
        Self::Io { source, context: None }
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(source: serde_json::Error) -> Self {
        Self::Json { source, context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO_MARKER
}

/// Reads a JSON array of instance records from `source`.
///
/// # Errors
/// Fails if the source cannot be read or is not a JSON array of records.
pub fn read_instances(source: impl AsRef<Path>) -> Result<Vec<Instance>, DatasetError> {
    let source = source.as_ref();
    let records: Vec<Instance> = read_array(source)?;
    info!(source = %source.display(), records = records.len(), "Dataset loaded");
    Ok(records)
}

/// Reads a JSON array of any element type from a path, or from stdin for `-`.
///
/// # Errors
/// Fails if the source cannot be read or does not decode as `Vec<T>`.
pub fn read_array<T>(source: impl AsRef<Path>) -> Result<Vec<T>, DatasetError>
where
    T: DeserializeOwned,
{
    let source = source.as_ref();
    if is_stdio(source) {
        let mut buf = String::new();
        io::stdin().lock().read_to_string(&mut buf).context("Failed to read stdin")?;
        return serde_json::from_str(&buf).context("Malformed dataset on stdin");
    }

    let file = fs::File::open(source).context(format!("Failed to open {}", source.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .context(format!("Malformed dataset in {}", source.display()))
}

/// Parses a JSON array of instance records.
///
/// # Errors
/// Fails if `json` is not an array of records.
pub fn parse_instances(json: &str) -> Result<Vec<Instance>, DatasetError> {
    serde_json::from_str(json).context("Malformed dataset")
}

/// Pretty-prints `records` to `sink`, creating missing parent directories.
///
/// # Errors
/// Fails if the sink cannot be created or written.
pub fn write_instances(sink: impl AsRef<Path>, records: &[Instance]) -> Result<(), DatasetError> {
    let sink = sink.as_ref();
    if is_stdio(sink) {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        serde_json::to_writer_pretty(&mut out, records).context("Failed to encode dataset")?;
        writeln!(out).context("Failed to write stdout")?;
        out.flush().context("Failed to flush stdout")?;
    } else {
        if let Some(parent) = sink.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .context(format!("Failed to create {}", parent.display()))?;
        }
        let file = fs::File::create(sink)
            .context(format!("Failed to create {}", sink.display()))?;
        let mut out = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut out, records).context("Failed to encode dataset")?;
        out.flush().context(format!("Failed to write {}", sink.display()))?;
    }

    info!(sink = %sink.display(), records = records.len(), "Dataset written");
    Ok(())
}

/// Drops records whose domain was already seen, keeping the first occurrence and the order.
/// Returns the number of records removed.
pub fn dedupe_by_domain(records: &mut Vec<Instance>) -> usize {
    let before = records.len();
    let mut seen = FxHashSet::with_capacity_and_hasher(before, FxBuildHasher::default());
    records.retain(|r| {
        let fresh = seen.insert(r.domain.clone());
        if !fresh {
            debug!(domain = %r.domain, "Duplicate record dropped");
        }
        fresh
    });

    let removed = before - records.len();
    if removed > 0 {
        warn!(removed, "Duplicate domains removed");
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedupe_keeps_first_occurrence_in_order() {
        let mut records = vec![
            Instance::new("a.test").with_stats(1, 0),
            Instance::new("b.test"),
            Instance::new("a.test").with_stats(99, 0),
            Instance::new("c.test"),
        ];
        assert_eq!(dedupe_by_domain(&mut records), 1);
        let domains: Vec<_> = records.iter().map(|r| r.domain.as_str()).collect();
        assert_eq!(domains, ["a.test", "b.test", "c.test"]);
        assert_eq!(records[0].raw_user_count(), 1);
    }

    #[test]
    fn malformed_top_level_is_an_error() {
        assert!(matches!(parse_instances("{\"domain\": 1}"), Err(DatasetError::Json { .. })));
        assert!(parse_instances("[]").is_ok_and(|v| v.is_empty()));
    }
}
