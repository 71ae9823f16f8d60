use serde::{Deserialize, Serialize};
use std::fmt;

/// Derived color of an instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub hsl: Hsl,
    pub rgb: Rgb,
    /// `#rrggbb`, lowercase.
    pub hex: String,
    /// Estimated color temperature in Kelvin.
    #[serde(default)]
    pub temperature: u32,
    /// Hue family followed by size name, e.g. `"blue giant"`.
    #[serde(default)]
    pub category: String,
    /// Intermediate values, kept for auditing only.
    #[serde(default)]
    pub debug: ColorTrace,
}

/// Hue in degrees `[0, 360)`, saturation and lightness in percent `[0, 100]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` form.
    pub fn hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorTrace {
    pub age_days: i64,
    pub age_norm: f64,
    pub hash_perturbation: f64,
    pub era_offset: f64,
    pub user_norm: f64,
    pub activity_ratio: f64,
}
