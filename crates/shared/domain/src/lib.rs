//! # Domain Models
//!
//! This crate contains the pure data types of the starfield engine: the instance records
//! read from a dataset, the derived [`color::Color`] and [`layout::Position`] values the
//! engine injects into them, and the tunable [`config::EngineConfig`].
//! Keep it lean: no I/O, hashing, or geometry here, just data and simple helpers.

pub mod color;
pub mod config;
pub mod constants;
pub mod instance;
pub mod layout;

pub use color::{Color, ColorTrace, Hsl, Rgb};
pub use config::EngineConfig;
pub use instance::{CreationTime, Instance, Software, Stats};
pub use layout::{Position, PositionType, SizeClass, Tier};
