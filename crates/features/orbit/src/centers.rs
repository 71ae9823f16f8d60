//! # System Center Allocator
//!
//! One anchor per group. Tier A groups ride five logarithmic spiral arms, tier B groups
//! branch off those arms, tier C groups form a spherical bulge around the core.

use crate::geometry::{fibonacci_angles, polar, spherical};
use crate::tier::GroupInfo;
use fxhash::FxHashMap;
use starfield_domain::{Position, Tier};
use starfield_domain::config::{BranchConfig, BulgeConfig, GalaxyConfig, SpiralConfig, SystemConfig};
use starfield_kernel::hash::{salted_centered, salted_unit};
use std::f64::consts::{PI, TAU};
use tracing::debug;

/// Anchors keyed by group name.
pub type Anchors = FxHashMap<String, Position>;

/// Computes an anchor for every group and records the arm of each tier-A group.
///
/// Each tier is ordered by member count descending, then by name, so the result does not
/// depend on the input order.
pub fn allocate(groups: &mut [GroupInfo], config: &GalaxyConfig) -> Anchors {
    groups.sort_by(|a, b| {
        a.tier.cmp(&b.tier).then(b.member_count.cmp(&a.member_count)).then_with(|| a.name.cmp(&b.name))
    });

    let arms = config.spiral.arms.max(1);
    let mut anchors = Anchors::default();

    let split_b = groups.partition_point(|g| g.tier == Tier::A);
    let split_c = groups.partition_point(|g| g.tier != Tier::C);
    let (tier_a, rest) = groups.split_at_mut(split_b);
    let (tier_b, tier_c) = rest.split_at_mut(split_c - split_b);

    for (i, group) in tier_a.iter_mut().enumerate() {
        group.arm_index = Some(i % arms);
    }
    let arm_sizes = (0..arms).map(|arm| tier_a.len() / arms + usize::from(arm < tier_a.len() % arms));
    let arm_sizes: Vec<usize> = arm_sizes.collect();

    for (i, group) in tier_a.iter().enumerate() {
        let arm = i % arms;
        let anchor = spiral_anchor(&group.name, arm, i / arms, arm_sizes[arm], arms, &config.spiral);
        anchors.insert(group.name.clone(), anchor);
    }

    for (i, group) in tier_b.iter().enumerate() {
        anchors.insert(group.name.clone(), branch_anchor(&group.name, i % arms, arms, &config.branch));
    }

    let bulge_total = tier_c.len();
    for (i, group) in tier_c.iter().enumerate() {
        anchors.insert(group.name.clone(), bulge_anchor(&group.name, i, bulge_total, &config.bulge));
    }

    debug!(tier_a = tier_a.len(), tier_b = tier_b.len(), tier_c = tier_c.len(), "System centers allocated");
    anchors
}

fn arm_angle(arm: usize, arms: usize) -> f64 {
    TAU * arm as f64 / arms.max(1) as f64
}

/// Anchor on a main arm: `r = start * e^(tightness * theta)`, theta growing with the rank
/// along the arm, lifted by a sinusoidal wave plus a hashed jitter.
pub fn spiral_anchor(
    name: &str,
    arm: usize,
    rank_in_arm: usize,
    arm_size: usize,
    arms: usize,
    spiral: &SpiralConfig,
) -> Position {
    let progress = rank_in_arm as f64 / arm_size.max(1) as f64;
    let theta = progress * spiral.turns * TAU;
    let radius = spiral.start_radius * (spiral.tightness * theta).exp();

    let wave = (theta * 2.0).sin() * spiral.wave_amplitude * radius;
    let jitter = salted_centered(name, "z") * spiral.wave_jitter * radius;

    polar(radius, arm_angle(arm, arms) + theta, wave + jitter)
}

/// Anchor on a branch leaving `parent_arm` at a hashed angle, on a half-turn spiral.
pub fn branch_anchor(
    name: &str,
    parent_arm: usize,
    arms: usize,
    branch: &BranchConfig,
) -> Position {
    let h = salted_unit(name, "branch");
    let offset = (h - 0.5) * branch.angular_spread.to_radians();
    let theta = h * PI;
    let radius = branch.radius_span.mul_add(h, branch.min_radius);
    let z = salted_centered(name, "z") * radius * branch.thickness;

    polar(radius, arm_angle(parent_arm, arms) + offset + theta * 0.5, z)
}

/// Anchor on a Fibonacci sphere around the origin with a hashed radius.
pub fn bulge_anchor(name: &str, index: usize, total: usize, bulge: &BulgeConfig) -> Position {
    let (theta, phi) = fibonacci_angles(index, total);
    let radius = bulge.radius_span.mul_add(salted_unit(name, "radius"), bulge.min_radius);
    spherical(radius, theta, phi)
}

/// Group extent: `base * max(1, 1 + log10(count / 10) * scale)`, with counts below ten
/// treated as ten.
pub fn system_radius(tier: Tier, member_count: usize, systems: &SystemConfig) -> f64 {
    let base = match tier {
        Tier::A => systems.tier_a_radius,
        Tier::B => systems.tier_b_radius,
        Tier::C => systems.tier_c_radius,
    };
    let count = member_count.max(10) as f64;
    let growth = (count / 10.0).log10().mul_add(systems.scale_factor, 1.0).max(1.0);
    base * growth
}
