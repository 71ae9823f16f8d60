//! Kernel utilities shared across the feature slices.
//! Keep this crate lightweight: it holds the deterministic primitives every slice builds on
//! and the thin I/O shell around them.
//!
//! ## Hashing
//! Pseudo-randomness is derived from content hashes, never from a seeded generator, so a
//! rerun over the same dataset reproduces every value bit for bit:
//! ```rust
//! use starfield_kernel::hash::{salted_unit, unit_hash};
//!
//! let h = unit_hash("mastodon.social");
//! assert!((0.0..1.0).contains(&h));
//! assert_eq!(h, unit_hash("mastodon.social"));
//! assert_ne!(salted_unit("mastodon.social", "theta"), salted_unit("mastodon.social", "phi"));
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use starfield_kernel::config::load_config;
//! use starfield_domain::EngineConfig;
//!
//! let cfg: EngineConfig = load_config(Some("starfield.toml"))?;
//! ```
pub mod config;
pub mod dataset;
pub mod hash;
pub mod normalize;

pub use starfield_domain as domain;
