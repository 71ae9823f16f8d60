use chrono::{DateTime, TimeZone, Utc};
use starfield_chroma::{paint_all, synthesize_color_at};
use starfield_domain::{EngineConfig, Instance};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
}

#[test]
fn genesis_instance_is_old_dull_and_bright() {
    let config = EngineConfig::default();
    let chroma = &config.chroma;
    let instance = Instance::new("genesis.test")
        .with_stats(1, 1)
        .with_created_at(chroma.genesis.to_rfc3339());

    let color = synthesize_color_at(&instance, &config, now());

    assert!(color.debug.age_norm.abs() < f64::EPSILON);
    assert!((color.debug.era_offset - chroma.era.early_offset).abs() < f64::EPSILON);
    let reach = chroma.domain_hash_range + chroma.era.early_offset.abs();
    assert!(color.hsl.h >= chroma.hue_old && color.hsl.h <= chroma.hue_old + reach, "hue {}", color.hsl.h);
    assert!(color.hsl.h < chroma.red_zone_ceiling);

    // A single user normalizes to zero popularity; one active user of one is full activity.
    assert!((color.hsl.s - chroma.saturation.min).abs() < f64::EPSILON);
    assert!((color.hsl.l - chroma.lightness.max).abs() < f64::EPSILON);
    assert!(color.category.starts_with("red") || color.category.starts_with("orange"));
    assert!(color.category.ends_with("dwarf"));
}

#[test]
fn fresh_instance_leans_blue() {
    let config = EngineConfig::default();
    let instance = Instance::new("fresh.test").with_stats(50, 5).with_created_at(now().to_rfc3339());
    let color = synthesize_color_at(&instance, &config, now());

    assert!((color.debug.age_norm - 1.0).abs() < f64::EPSILON);
    let young = config.chroma.hue_young;
    let reach = config.chroma.domain_hash_range + config.chroma.era.late_offset.abs();
    assert!((color.hsl.h - young).abs() <= reach + 0.05, "hue {}", color.hsl.h);
}

#[test]
fn saturation_has_diminishing_returns() {
    let config = EngineConfig::default();
    let sat = |users: i64| {
        let instance = Instance::new("same.test").with_stats(users, 0).with_created_at("2021-01-01");
        synthesize_color_at(&instance, &config, now()).hsl.s
    };
    let first = sat(1_000) - sat(100);
    let second = sat(10_000) - sat(1_000);
    assert!(first > second, "{first} <= {second}");
    assert!(second > 0.0);
}

#[test]
fn unparseable_timestamp_ages_as_now() {
    let config = EngineConfig::default();
    let garbled = Instance::new("x.test").with_created_at("yesterday-ish");
    let missing = Instance::new("x.test");
    let a = synthesize_color_at(&garbled, &config, now());
    let b = synthesize_color_at(&missing, &config, now());
    assert_eq!(a.debug.age_days, 0);
    assert_eq!(a, b);
}

#[test]
fn domains_get_different_perturbations() {
    let config = EngineConfig::default();
    let a = synthesize_color_at(&Instance::new("alpha.test").with_created_at("2021-01-01"), &config, now());
    let b = synthesize_color_at(&Instance::new("beta.test").with_created_at("2021-01-01"), &config, now());
    assert!((a.debug.hash_perturbation - b.debug.hash_perturbation).abs() > f64::EPSILON);
    assert!(a.debug.hash_perturbation.abs() <= config.chroma.domain_hash_range);
}

#[test]
fn degenerate_config_stays_finite() {
    let mut config = EngineConfig::default();
    config.max_user_count = 0;
    config.chroma.genesis = now();
    config.chroma.red_zone_ceiling = 0.0;

    let color = synthesize_color_at(&Instance::new("edge.test").with_stats(0, 0), &config, now());
    assert!(color.hsl.h.is_finite() && color.hsl.s.is_finite() && color.hsl.l.is_finite());
    assert!((0.0..360.0).contains(&color.hsl.h));
}

#[test]
fn paint_all_matches_single_synthesis_in_order() {
    let config = EngineConfig::default();
    let mut records: Vec<_> = (0..64)
        .map(|i| Instance::new(format!("node-{i}.test")).with_stats(i * 37, i).with_created_at("2022-02-02"))
        .collect();
    let expected: Vec<_> = records.iter().map(|r| synthesize_color_at(r, &config, now())).collect();

    paint_all(&mut records, &config, now());

    for (record, color) in records.iter().zip(&expected) {
        assert_eq!(record.color.as_ref(), Some(color), "{}", record.domain);
    }
}
