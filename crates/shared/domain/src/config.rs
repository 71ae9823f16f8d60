use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// All tunables of the color and layout engine.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfigInner {
    /// Reference user count (the largest instance) for logarithmic normalization.
    pub max_user_count: u64,
    pub chroma: ChromaConfig,
    pub galaxy: GalaxyConfig,
}

/// Thin Arc-wrapped config, cheap to clone into worker threads.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct EngineConfig {
    #[serde(flatten, default)]
    inner: Arc<EngineConfigInner>,
}

impl Deref for EngineConfig {
    type Target = EngineConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for EngineConfig {
    fn deref_mut(&mut self) -> &mut EngineConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Closed numeric range. Inverted bounds are tolerated by the helpers.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Band {
    pub min: f64,
    pub max: f64,
}

impl Band {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Linear interpolation from `min` (t = 0) to `max` (t = 1).
    pub fn lerp(self, t: f64) -> f64 {
        (self.max - self.min).mul_add(t, self.min)
    }

    /// Clamps into the band, whichever way round its bounds are.
    pub fn clamp(self, value: f64) -> f64 {
        let (lo, hi) = if self.min <= self.max { (self.min, self.max) } else { (self.max, self.min) };
        value.clamp(lo, hi)
    }

    pub fn is_ordered(self) -> bool {
        self.min <= self.max
    }
}

// --- Color ---

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChromaConfig {
    /// Age reference: an instance created at genesis is the oldest possible.
    pub genesis: DateTime<Utc>,
    pub era: EraConfig,
    pub hue_old: f64,
    pub hue_young: f64,
    /// Half-width of the domain-hash hue perturbation, in degrees.
    pub domain_hash_range: f64,
    /// Hues below this value are kept inside `[0, ceiling)` when adjusted.
    pub red_zone_ceiling: f64,
    pub saturation: Band,
    pub lightness: Band,
    pub temperature: TemperatureScale,
    /// Lower user-count bounds of the `small`, `medium`, `large`, and `giant` size names.
    pub size_names: [u64; 4],
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EraConfig {
    /// Instances created strictly before this instant get `early_offset`.
    pub early_boundary: DateTime<Utc>,
    pub early_offset: f64,
    /// Instances created at or after this instant get `late_offset`.
    pub late_boundary: DateTime<Utc>,
    pub late_offset: f64,
}

/// Kelvin anchors at hue 0°, 180° and 360°.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct TemperatureScale {
    pub cool: f64,
    pub mid: f64,
    pub hot: f64,
}

// --- Layout ---

#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GalaxyConfig {
    pub core: CoreConfig,
    pub tiers: TierThresholds,
    pub spiral: SpiralConfig,
    pub branch: BranchConfig,
    pub bulge: BulgeConfig,
    pub systems: SystemConfig,
    pub sizes: SizeThresholds,
    pub fallback: FallbackConfig,
}

/// The galactic core: a fixed set of domains pinned to the vertices of a regular polygon.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    pub domains: Vec<String>,
    pub radius: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct TierThresholds {
    pub a: usize,
    pub b: usize,
}

/// Logarithmic spiral `r = start_radius * e^(tightness * theta)` shared by tier A and dust lanes.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct SpiralConfig {
    pub arms: usize,
    pub start_radius: f64,
    pub tightness: f64,
    /// Rotations covered from the innermost to the outermost group of an arm.
    pub turns: f64,
    /// Amplitude of the sinusoidal z-wave, as a fraction of radius.
    pub wave_amplitude: f64,
    /// Hashed z-jitter on top of the wave, as a fraction of radius.
    pub wave_jitter: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct BranchConfig {
    pub min_radius: f64,
    pub radius_span: f64,
    /// Full width of the hashed angular offset from the parent arm, in degrees.
    pub angular_spread: f64,
    /// Z spread as a fraction of radius.
    pub thickness: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct BulgeConfig {
    pub min_radius: f64,
    pub radius_span: f64,
}

/// Extent of a group around its anchor.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    pub tier_a_radius: f64,
    pub tier_b_radius: f64,
    pub tier_c_radius: f64,
    /// Weight of `log10(count / 10)` in the radius growth.
    pub scale_factor: f64,
    /// Hashed radial jitter, as a fraction of the group radius.
    pub radial_variation: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct SizeThresholds {
    pub planet: u64,
    pub asteroid: u64,
    pub satellite: u64,
}

#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FallbackConfig {
    pub mix: FallbackMix,
    pub dust_lane: DustLaneConfig,
    pub nebula: NebulaConfig,
    pub halo: HaloConfig,
}

/// Relative weights of the three fallback strategies. Normalized by their sum at use.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct FallbackMix {
    pub dust_lane: f64,
    pub nebula: f64,
    pub halo: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct DustLaneConfig {
    /// Multiplier pushing the lane outside the tier-A arms.
    pub radial_offset: f64,
    /// In-plane scatter perpendicular to the arm, as a fraction of radius.
    pub scatter: f64,
    pub thickness: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct NebulaConfig {
    /// Number of leading domain characters that key a nebula.
    pub prefix_len: usize,
    pub min_radius: f64,
    pub radius_span: f64,
    /// Radius of the ball members are scattered in around the nebula center.
    pub spread: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct HaloConfig {
    pub min_radius: f64,
    pub radius_span: f64,
}

// --- Default ---

fn utc_midnight(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).single().unwrap_or(DateTime::UNIX_EPOCH)
}

impl EngineConfigInner {
    pub const DEFAULT_MAX_USER_COUNT: u64 = 3_000_000;
}

impl Default for EngineConfigInner {
    fn default() -> Self {
        Self {
            max_user_count: Self::DEFAULT_MAX_USER_COUNT,
            chroma: ChromaConfig::default(),
            galaxy: GalaxyConfig::default(),
        }
    }
}

impl Default for ChromaConfig {
    fn default() -> Self {
        Self {
            genesis: utc_midnight(2016, 11, 23),
            era: EraConfig::default(),
            hue_old: 0.0,
            hue_young: 240.0,
            domain_hash_range: 30.0,
            red_zone_ceiling: 60.0,
            saturation: Band::new(40.0, 90.0),
            lightness: Band::new(30.0, 75.0),
            temperature: TemperatureScale::default(),
            size_names: [10, 100, 1_000, 10_000],
        }
    }
}

impl Default for EraConfig {
    fn default() -> Self {
        Self {
            early_boundary: utc_midnight(2019, 1, 1),
            early_offset: -20.0,
            late_boundary: utc_midnight(2024, 1, 1),
            late_offset: 20.0,
        }
    }
}

impl Default for TemperatureScale {
    fn default() -> Self {
        Self { cool: 3840.0, mid: 7300.0, hot: 42_000.0 }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            domains: vec![
                "mastodon.social".to_owned(),
                "misskey.io".to_owned(),
                "pixelfed.social".to_owned(),
            ],
            radius: 3000.0,
        }
    }
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self { a: 100, b: 20 }
    }
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self {
            arms: 5,
            start_radius: 5000.0,
            tightness: 0.25,
            turns: 1.25,
            wave_amplitude: 0.15,
            wave_jitter: 0.05,
        }
    }
}

impl Default for BranchConfig {
    fn default() -> Self {
        Self { min_radius: 4000.0, radius_span: 4000.0, angular_spread: 60.0, thickness: 0.08 }
    }
}

impl Default for BulgeConfig {
    fn default() -> Self {
        Self { min_radius: 3000.0, radius_span: 2000.0 }
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            tier_a_radius: 4000.0,
            tier_b_radius: 2000.0,
            tier_c_radius: 1000.0,
            scale_factor: 0.5,
            radial_variation: 0.15,
        }
    }
}

impl Default for SizeThresholds {
    fn default() -> Self {
        Self { planet: 1000, asteroid: 100, satellite: 10 }
    }
}

impl Default for FallbackMix {
    fn default() -> Self {
        Self { dust_lane: 0.7, nebula: 0.2, halo: 0.1 }
    }
}

impl Default for DustLaneConfig {
    fn default() -> Self {
        Self { radial_offset: 1.6, scatter: 0.12, thickness: 0.06 }
    }
}

impl Default for NebulaConfig {
    fn default() -> Self {
        Self { prefix_len: 3, min_radius: 20_000.0, radius_span: 15_000.0, spread: 1500.0 }
    }
}

impl Default for HaloConfig {
    fn default() -> Self {
        Self { min_radius: 50_000.0, radius_span: 10_000.0 }
    }
}
