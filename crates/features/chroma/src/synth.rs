use crate::label::{category, temperature};
use crate::rgb::hsl_to_rgb;
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use starfield_domain::config::ChromaConfig;
use starfield_domain::{Color, ColorTrace, EngineConfig, Hsl, Instance};
use starfield_kernel::hash::salted_centered;
use starfield_kernel::normalize::{
    age_days, era_offset, log_normalize, resolve_timestamp, round_to,
};
use tracing::{debug, instrument};

const HUE_SALT: &str = "hue";

/// Gap kept below the red-zone ceiling so a one-decimal rounding never reaches it.
const RED_ZONE_MARGIN: f64 = 0.1;

/// Color of `instance`, aged against the current time.
pub fn synthesize_color(instance: &Instance, config: &EngineConfig) -> Color {
    synthesize_color_at(instance, config, Utc::now())
}

/// Color of `instance`, aged against `now`.
pub fn synthesize_color_at(instance: &Instance, config: &EngineConfig, now: DateTime<Utc>) -> Color {
    let chroma = &config.chroma;

    // Hue: age
    let created = resolve_timestamp(instance.timestamp(), now);
    let age = age_days(created, now);
    let max_age = age_days(chroma.genesis, now);
    let age_norm = if max_age > 0.0 { 1.0 - (age / max_age).clamp(0.0, 1.0) } else { 1.0 };

    let base_hue = (chroma.hue_young - chroma.hue_old).mul_add(age_norm, chroma.hue_old);
    let perturbation = salted_centered(&instance.domain, HUE_SALT) * 2.0 * chroma.domain_hash_range;
    let era = era_offset(created, &chroma.era);
    let hue = adjust_hue(base_hue, perturbation + era, chroma);

    // Saturation: popularity
    let users = instance.user_count();
    let user_norm =
        log_normalize((users - 1) as f64, config.max_user_count as f64).clamp(0.0, 1.0);
    let saturation = chroma.saturation.clamp(chroma.saturation.lerp(user_norm.sqrt()));

    // Lightness: activity
    let activity = (instance.monthly_active_users() as f64 / users as f64).min(1.0);
    let lightness = chroma.lightness.clamp(chroma.lightness.lerp(activity));

    let hsl = Hsl {
        h: round_to(hue, 1).rem_euclid(360.0),
        s: round_to(saturation.clamp(0.0, 100.0), 1),
        l: round_to(lightness.clamp(0.0, 100.0), 1),
    };
    let rgb = hsl_to_rgb(hsl);

    Color {
        hsl,
        rgb,
        hex: rgb.hex(),
        temperature: temperature(hsl.h, &chroma.temperature),
        category: category(hsl.h, instance.raw_user_count(), chroma),
        debug: ColorTrace {
            age_days: whole_days(age),
            age_norm: round_to(age_norm, 3),
            hash_perturbation: round_to(perturbation, 3),
            era_offset: era,
            user_norm: round_to(user_norm, 3),
            activity_ratio: round_to(activity, 3),
        },
    }
}

/// Applies the hash and era adjustment. A base hue in the red zone stays inside it,
/// anything else wraps around the wheel.
fn adjust_hue(base: f64, adjustment: f64, chroma: &ChromaConfig) -> f64 {
    if base < chroma.red_zone_ceiling {
        let ceiling = (chroma.red_zone_ceiling - RED_ZONE_MARGIN).max(0.0);
        (base + adjustment).clamp(0.0, ceiling)
    } else {
        (base + adjustment).rem_euclid(360.0)
    }
}

#[allow(clippy::cast_possible_truncation)]
fn whole_days(age: f64) -> i64 {
    age.floor() as i64
}

/// Colors every record in place. All records age against the same `now`.
#[instrument(name = "paint_all", skip_all, fields(records = records.len()))]
pub fn paint_all(records: &mut [Instance], config: &EngineConfig, now: DateTime<Utc>) {
    records.par_iter_mut().for_each(|record| {
        record.color = Some(synthesize_color_at(record, config, now));
    });

    debug!("Color pass finished");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn red_zone_keeps_hue_below_ceiling() {
        let chroma = ChromaConfig::default();
        assert!((adjust_hue(10.0, -45.0, &chroma)).abs() < f64::EPSILON);
        assert!((adjust_hue(50.0, 30.0, &chroma) - 59.9).abs() < 1e-9);
        assert!((adjust_hue(30.0, 5.0, &chroma) - 35.0).abs() < 1e-9);
    }

    #[test]
    fn outside_red_zone_wraps() {
        let chroma = ChromaConfig::default();
        assert!((adjust_hue(350.0, 20.0, &chroma) - 10.0).abs() < 1e-9);
        assert!((adjust_hue(200.0, -30.0, &chroma) - 170.0).abs() < 1e-9);
    }

    #[test]
    fn whole_days_floors() {
        assert_eq!(whole_days(3.9), 3);
        assert_eq!(whole_days(-0.5), -1);
    }
}
