//! Color synthesis feature slice.
//!
//! Every instance gets a deterministic color:
//! - **hue** encodes age, from the configured "old" hue at genesis to the "young" hue today,
//!   nudged by a domain-salted hash and an era offset;
//! - **saturation** encodes popularity, with diminishing returns on user count;
//! - **lightness** encodes activity, the share of monthly-active users.
//!
//! ```rust
//! use starfield_chroma::synthesize_color;
//! use starfield_domain::{EngineConfig, Instance};
//!
//! let instance = Instance::new("example.social")
//!     .with_software("mastodon")
//!     .with_stats(2_500, 400)
//!     .with_created_at("2021-06-01T00:00:00Z");
//!
//! let color = synthesize_color(&instance, &EngineConfig::default());
//! assert!((0.0..360.0).contains(&color.hsl.h));
//! assert_eq!(color.hex, color.rgb.hex());
//! ```

mod label;
mod rgb;
mod synth;

pub use label::{category, color_family, size_name, temperature};
pub use rgb::hsl_to_rgb;
pub use synth::{paint_all, synthesize_color, synthesize_color_at};
