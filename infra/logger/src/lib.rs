//! # Logger
//!
//! Installs the process-wide `tracing` subscriber for the starfield binaries: a compact
//! console layer on **stderr** (stdout stays free for dataset output) and an optional
//! non-blocking rolling file.
//!
//! * The level comes from [`LoggerBuilder::level`] / [`LoggerBuilder::verbose`] and can be
//!   refined through `RUST_LOG` or [`LoggerBuilder::env_filter`].
//! * With the `json` feature the file layer can emit JSON lines.
//!
//! ## Example
//!
//! ```rust
//! # use starfield_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder()
//!     .name("starfield")
//!     .level(LevelFilter::WARN)
//!     .init()
//!     .unwrap();
//! ```

mod builder;
mod error;

pub use crate::builder::{LoggerBuilder, NoFile, NoName, WithFile, WithName};
pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use tracing_appender::non_blocking::WorkerGuard;

/// Handle to the installed logging system.
///
/// Holds the file worker guard, if any. Drop it only at shutdown.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts configuring the global subscriber.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub(crate) const fn new(guard: Option<WorkerGuard>) -> Self {
        Self { guard }
    }

    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Logging system shutting down, flushing buffers...");
        }
    }
}
