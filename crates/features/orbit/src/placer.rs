//! # Instance Placer
//!
//! Galactic-core vertices, size classes and orbital placement around a group anchor.

use crate::geometry::{add, fibonacci_point, polar, rotate, scale, unit_direction};
use starfield_domain::config::{CoreConfig, SizeThresholds};
use starfield_domain::{Position, SizeClass};
use starfield_kernel::hash::{salted_centered, salted_unit};
use starfield_kernel::normalize::log_normalize;
use std::f64::consts::{FRAC_PI_2, TAU};

/// Vertex of the core polygon for core domain `index` out of `count`: the first vertex
/// points along +y, the rest follow counter-clockwise, all at z = 0.
pub fn core_position(index: usize, count: usize, core: &CoreConfig) -> Position {
    let angle = FRAC_PI_2 + TAU * index as f64 / count.max(1) as f64;
    polar(core.radius, angle, 0.0)
}

/// Position of `domain` when it is one of the configured core domains.
pub fn core_lookup(domain: &str, core: &CoreConfig) -> Option<Position> {
    core.domains
        .iter()
        .position(|d| d == domain)
        .map(|index| core_position(index, core.domains.len(), core))
}

pub const fn size_class(user_count: u64, sizes: &SizeThresholds) -> SizeClass {
    if user_count >= sizes.planet {
        SizeClass::Planet
    } else if user_count >= sizes.asteroid {
        SizeClass::Asteroid
    } else if user_count >= sizes.satellite {
        SizeClass::Satellite
    } else {
        SizeClass::Dust
    }
}

/// Fractions of the group radius a size class orbits in, innermost first.
pub const fn orbit_band(size: SizeClass) -> (f64, f64) {
    match size {
        SizeClass::Planet => (0.2, 0.4),
        SizeClass::Asteroid => (0.4, 0.65),
        SizeClass::Satellite => (0.65, 0.85),
        SizeClass::Dust => (0.85, 1.0),
    }
}

/// Shared orientation of a group's lattice, hashed from the group name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    pub axis: Position,
    pub angle: f64,
}

impl Orientation {
    pub fn of_group(name: &str) -> Self {
        Self {
            axis: unit_direction(salted_unit(name, "axis_theta"), salted_unit(name, "axis_phi")),
            angle: salted_unit(name, "spin") * TAU,
        }
    }
}

/// Everything the orbital placement needs about one member.
#[derive(Debug, Clone, Copy)]
pub struct Orbit<'a> {
    pub domain: &'a str,
    pub user_count: u64,
    pub max_user_count: u64,
    pub rank: usize,
    pub total: usize,
}

/// Distance from the anchor: larger instances sit deeper inside their size band, jittered
/// by a hash. Jitter may cross the band floor; only a negative distance is reset to it.
pub fn orbital_distance(orbit: &Orbit<'_>, size: SizeClass, group_radius: f64, variation: f64) -> f64 {
    let (min, max) = orbit_band(size);
    let user_norm =
        log_normalize(orbit.user_count as f64, orbit.max_user_count as f64).clamp(0.0, 1.0);
    let fraction = user_norm.mul_add(-(max - min), max);
    let jitter = salted_centered(orbit.domain, "dist") * variation * group_radius;
    let distance = fraction.mul_add(group_radius, jitter);
    if distance < 0.0 { min * group_radius } else { distance }
}

/// Orbital position around `anchor`: the lattice point of the member's rank, rotated into
/// the group's orientation and scaled to its orbital distance.
pub fn orbital_position(
    orbit: &Orbit<'_>,
    size: SizeClass,
    anchor: Position,
    group_radius: f64,
    variation: f64,
    orientation: Orientation,
) -> Position {
    let direction = rotate(fibonacci_point(orbit.rank, orbit.total), orientation.axis, orientation.angle);
    let distance = orbital_distance(orbit, size, group_radius, variation);
    add(anchor, scale(direction, distance))
}
