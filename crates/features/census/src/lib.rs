//! Read-only reporting over instance datasets.
//!
//! [`Census`] summarizes a processed dataset: group distribution, placement labels, hue
//! range and a sample of records. [`Tally`] is the lightweight companion report that
//! counts large instances and special placements without decoding full records.

mod survey;
mod tally;

pub use survey::{Census, HueStats, LabelCount, SampleRow};
pub use tally::{DEFAULT_THRESHOLD, Tally};
