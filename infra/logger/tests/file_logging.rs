use starfield_logger::{LevelFilter, Logger};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn file_logging_creates_nested_log_directory() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("var").join("logs");

    let logger = Logger::builder()
        .name("starfield-file")
        .console(false)
        .path(&log_dir)
        .max_files(2)
        .level(LevelFilter::DEBUG)
        .init()?;

    tracing::debug!(phase = "colors", "phase finished");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let content = fs::read_to_string(&log_file)?;
    assert!(content.contains("phase finished"), "unexpected log content: {content}");
    assert!(!content.contains("\u{1b}["), "file output must not carry ANSI escapes");

    Ok(())
}
