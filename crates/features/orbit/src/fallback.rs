//! # Fallback Placer
//!
//! Placement for records whose group has no anchor. Every choice is hashed from the record's
//! own domain, so the result does not depend on the rest of the dataset.

use crate::geometry::{add, polar, scale, spherical, unit_direction};
use starfield_domain::config::{FallbackConfig, FallbackMix, SpiralConfig};
use starfield_domain::{Position, PositionType};
use starfield_kernel::hash::{salted_centered, salted_unit};
use std::f64::consts::TAU;

/// Picks a strategy from the weighted mix. A mix without a positive sum falls back to the
/// default weights.
pub fn choose_strategy(domain: &str, mix: &FallbackMix) -> PositionType {
    let weights = [mix.dust_lane, mix.nebula, mix.halo].map(|w| if w.is_finite() { w.max(0.0) } else { 0.0 });
    let total: f64 = weights.iter().sum();
    let (weights, total) = if total > 0.0 {
        (weights, total)
    } else {
        let d = FallbackMix::default();
        ([d.dust_lane, d.nebula, d.halo], d.dust_lane + d.nebula + d.halo)
    };

    let pick = salted_unit(domain, "strategy") * total;
    if pick < weights[0] {
        PositionType::DustLane
    } else if pick < weights[0] + weights[1] {
        PositionType::Nebula
    } else {
        PositionType::Halo
    }
}

/// Places `domain` with the strategy its hash selects.
pub fn place_fallback(domain: &str, spiral: &SpiralConfig, fallback: &FallbackConfig) -> (Position, PositionType) {
    let strategy = choose_strategy(domain, &fallback.mix);
    let position = match strategy {
        PositionType::Nebula => nebula(domain, fallback),
        PositionType::Halo => halo(domain, fallback),
        _ => dust_lane(domain, spiral, fallback),
    };
    (position, strategy)
}

/// Along a main arm, pushed outward by the lane offset, with scatter across the arm.
fn dust_lane(domain: &str, spiral: &SpiralConfig, fallback: &FallbackConfig) -> Position {
    let lane = &fallback.dust_lane;
    let arms = spiral.arms.max(1);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let arm = ((salted_unit(domain, "arm") * arms as f64) as usize).min(arms - 1);
    let base_angle = TAU * arm as f64 / arms as f64;

    let theta = salted_unit(domain, "lane") * spiral.turns * TAU;
    let radius = spiral.start_radius * (spiral.tightness * theta).exp() * lane.radial_offset;
    let angle = base_angle + theta;

    let on_arm = polar(radius, angle, salted_centered(domain, "z") * lane.thickness * radius);
    let across = polar(1.0, angle + TAU / 4.0, 0.0);
    add(on_arm, scale(across, salted_centered(domain, "scatter") * 2.0 * lane.scatter * radius))
}

/// Clustered around a center shared by every domain with the same prefix.
fn nebula(domain: &str, fallback: &FallbackConfig) -> Position {
    let cfg = &fallback.nebula;
    let key = nebula_key(domain, cfg.prefix_len);

    let center = spherical(
        cfg.radius_span.mul_add(salted_unit(&key, "nebula_radius"), cfg.min_radius),
        salted_unit(&key, "nebula_theta") * TAU,
        salted_unit(&key, "nebula_phi").mul_add(2.0, -1.0).clamp(-1.0, 1.0).acos(),
    );

    // Cube root keeps members uniform inside the ball rather than crowding the center.
    let depth = cfg.spread * salted_unit(domain, "depth").cbrt();
    let direction = unit_direction(salted_unit(domain, "theta"), salted_unit(domain, "phi"));
    add(center, scale(direction, depth))
}

/// Lowercased leading characters of the domain.
pub fn nebula_key(domain: &str, prefix_len: usize) -> String {
    domain.chars().flat_map(char::to_lowercase).take(prefix_len.max(1)).collect()
}

/// On a far spherical shell.
fn halo(domain: &str, fallback: &FallbackConfig) -> Position {
    let cfg = &fallback.halo;
    let radius = cfg.radius_span.mul_add(salted_unit(domain, "halo_radius"), cfg.min_radius);
    scale(unit_direction(salted_unit(domain, "theta"), salted_unit(domain, "phi")), radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_lowercase_prefix() {
        assert_eq!(nebula_key("MAStodon.example", 3), "mas");
        assert_eq!(nebula_key("ab", 3), "ab");
        assert_eq!(nebula_key("", 3), "");
    }

    #[test]
    fn mix_roughly_follows_weights() {
        let mix = FallbackMix::default();
        let mut counts = [0usize; 3];
        for i in 0..3000 {
            match choose_strategy(&format!("stray-{i}.test"), &mix) {
                PositionType::DustLane => counts[0] += 1,
                PositionType::Nebula => counts[1] += 1,
                _ => counts[2] += 1,
            }
        }
        assert!((1950..2250).contains(&counts[0]), "{counts:?}");
        assert!((480..720).contains(&counts[1]), "{counts:?}");
        assert!((210..390).contains(&counts[2]), "{counts:?}");
    }

    #[test]
    fn single_weight_mix_is_exclusive() {
        let mix = FallbackMix { dust_lane: 0.0, nebula: 0.0, halo: 2.0 };
        assert!((0..200).all(|i| choose_strategy(&format!("h{i}.test"), &mix) == PositionType::Halo));
    }

    #[test]
    fn zero_mix_uses_defaults() {
        let mix = FallbackMix { dust_lane: 0.0, nebula: 0.0, halo: 0.0 };
        let d = FallbackMix::default();
        for i in 0..50 {
            let domain = format!("z{i}.test");
            assert_eq!(choose_strategy(&domain, &mix), choose_strategy(&domain, &d));
        }
    }

    #[test]
    fn halo_lands_on_its_shell() {
        let fallback = FallbackConfig::default();
        let r = halo("far.test", &fallback).distance(Position::ORIGIN);
        assert!((50_000.0..=60_000.0).contains(&r), "{r}");
    }

    #[test]
    fn nebula_members_share_a_center() {
        let fallback = FallbackConfig::default();
        let a = nebula("abc-one.test", &fallback);
        let b = nebula("abc-two.test", &fallback);
        assert!(a.distance(b) <= 2.0 * fallback.nebula.spread + 1e-6);
    }

    #[test]
    fn lanes_lie_outside_the_arm_start() {
        let spiral = SpiralConfig::default();
        let fallback = FallbackConfig::default();
        for i in 0..100 {
            let p = dust_lane(&format!("lane-{i}.test"), &spiral, &fallback);
            assert!(p.is_finite());
            assert!(p.x.hypot(p.y) > spiral.start_radius);
        }
    }
}
