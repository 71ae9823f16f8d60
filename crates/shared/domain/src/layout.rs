use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString, IntoStaticStr};

/// A point in layout space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Rounds each coordinate to one decimal place, the precision written to the dataset.
    #[must_use]
    pub fn rounded(self) -> Self {
        let round = |v: f64| (v * 10.0).round() / 10.0;
        Self { x: round(self.x), y: round(self.y), z: round(self.z) }
    }

    pub fn distance(self, other: Self) -> f64 {
        let (dx, dy, dz) = (self.x - other.x, self.y - other.y, self.z - other.z);
        dz.mul_add(dz, dx.mul_add(dx, dy * dy)).sqrt()
    }

    pub const fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Group tier, selected by member count.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, AsRefStr, Serialize, Deserialize,
)]
pub enum Tier {
    /// Main spiral arms.
    A,
    /// Branch arms.
    B,
    /// Central bulge.
    C,
}

/// Size category of an instance, by user count, innermost band first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    AsRefStr,
    IntoStaticStr,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SizeClass {
    Planet,
    Asteroid,
    Satellite,
    Dust,
}

/// Which placement branch produced a position.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    AsRefStr,
    IntoStaticStr,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PositionType {
    /// One of the galactic-core domains.
    Supergiant,
    Planet,
    Asteroid,
    Satellite,
    Dust,
    /// Fallback: scattered along an outer spiral arm.
    DustLane,
    /// Fallback: clustered with records sharing a domain prefix.
    Nebula,
    /// Fallback: outer spherical shell.
    Halo,
}

impl PositionType {
    /// Labels that mark the galactic core or a fallback placement.
    pub const SPECIAL: [Self; 4] = [Self::Supergiant, Self::DustLane, Self::Nebula, Self::Halo];

    pub const fn is_fallback(self) -> bool {
        matches!(self, Self::DustLane | Self::Nebula | Self::Halo)
    }
}

impl From<SizeClass> for PositionType {
    fn from(size: SizeClass) -> Self {
        match size {
            SizeClass::Planet => Self::Planet,
            SizeClass::Asteroid => Self::Asteroid,
            SizeClass::Satellite => Self::Satellite,
            SizeClass::Dust => Self::Dust,
        }
    }
}
