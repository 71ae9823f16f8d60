//! Facade crate for the starfield slices and shared modules.
//! Re-exports domain/kernel primitives and composes the two per-record passes.
//! Keep this crate thin: it should compose other crates, not implement the numeric core.
//!
//! ## Usage
//! ```rust
//! use starfield::{Phases, Pipeline};
//! use starfield::domain::{EngineConfig, Instance};
//!
//! let records = vec![
//!     Instance::new("one.example").with_software("lemmy").with_stats(900, 120),
//!     Instance::new("two.example").with_software("lemmy").with_stats(40, 2),
//! ];
//!
//! let processed = Pipeline::new(EngineConfig::default()).phases(Phases::All).run(records);
//! assert!(processed.records.iter().all(|r| r.color.is_some() && r.position.is_some()));
//! ```

mod pipeline;

pub use pipeline::{Phases, Pipeline, Processed};
pub use starfield_domain as domain;
pub use starfield_kernel as kernel;

/// Feature slices.
pub mod features {
    pub use starfield_census as census;
    pub use starfield_chroma as chroma;
    pub use starfield_orbit as orbit;
    pub use starfield_repair as repair;
}
