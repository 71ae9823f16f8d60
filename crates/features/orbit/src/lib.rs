//! Galaxy layout feature slice.
//!
//! Records are grouped by platform. Each group is classified into a tier by member count
//! and gets an anchor: tier A groups on five main spiral arms, tier B on branch arms, tier C
//! in a central bulge. The largest member of a group sits on the anchor; the others orbit it
//! on a rotated Fibonacci lattice. A configured set of core domains is pinned to a regular
//! polygon around the origin, and records without a group are spread by the fallback placer.
//!
//! ```rust
//! use starfield_domain::{EngineConfig, Instance};
//! use starfield_orbit::classify_and_place;
//!
//! let records = vec![
//!     Instance::new("mastodon.social").with_software("mastodon").with_stats(2_000_000, 300_000),
//!     Instance::new("small.example").with_software("mastodon").with_stats(42, 10),
//!     Instance::new("stray.example"),
//! ];
//!
//! let placed = classify_and_place(records, &EngineConfig::default());
//! assert_eq!(placed[0].position_type.as_deref(), Some("supergiant"));
//! assert!(placed.iter().all(|r| r.position.is_some()));
//! ```

mod centers;
mod fallback;
pub mod geometry;
mod layout;
mod placer;
mod tier;

pub use centers::{Anchors, allocate, branch_anchor, bulge_anchor, spiral_anchor, system_radius};
pub use fallback::{choose_strategy, nebula_key, place_fallback};
pub use layout::{GalaxyLayout, GroupSystem, Rank, classify_and_place, place_all};
pub use placer::{
    Orbit, Orientation, core_lookup, core_position, orbit_band, orbital_distance, orbital_position,
    size_class,
};
pub use tier::{GroupInfo, classify};
