use starfield_domain::{EngineConfig, Instance, Position, PositionType};
use starfield_orbit::{GalaxyLayout, classify_and_place, place_all};

fn group(name: &str, n: usize, leader_users: i64, others: i64) -> Vec<Instance> {
    (0..n)
        .map(|i| {
            let users = if i == 0 { leader_users } else { others };
            Instance::new(format!("{name}-{i}.test")).with_software(name).with_stats(users, users / 4)
        })
        .collect()
}

fn label(record: &Instance) -> Option<&str> {
    record.position_type.as_deref()
}

#[test]
fn core_domains_form_an_equilateral_triangle() {
    let config = EngineConfig::default();
    let mut records = vec![
        Instance::new("pixelfed.social").with_software("pixelfed").with_stats(500_000, 10),
        Instance::new("mastodon.social").with_software("mastodon").with_stats(2_000_000, 10),
        Instance::new("misskey.io").with_software("misskey").with_stats(700_000, 10),
    ];
    records.extend(group("mastodon", 30, 9_000, 100));

    let placed = classify_and_place(records, &config);
    let core: Vec<Position> = placed[..3].iter().map(|r| r.position.unwrap()).collect();
    assert!(placed[..3].iter().all(|r| label(r) == Some("supergiant")));

    let sides = [core[0].distance(core[1]), core[1].distance(core[2]), core[2].distance(core[0])];
    let (lo, hi) = sides.iter().fold((f64::MAX, f64::MIN), |(lo, hi), &s| (lo.min(s), hi.max(s)));
    assert!(hi / lo < 1.001, "{sides:?}");
    for p in &core {
        assert!((p.distance(Position::ORIGIN) - config.galaxy.core.radius).abs() < 0.2);
    }
}

#[test]
fn leader_sits_on_the_anchor_and_others_orbit() {
    let config = EngineConfig::default();
    let mut records = group("lemmy", 12, 10_000, 1_000);

    let layout = place_all(&mut records, &config);
    let anchor = layout.system("lemmy").unwrap().anchor.rounded();

    assert_eq!(records[0].position, Some(anchor));
    assert_eq!(label(&records[0]), Some("planet"));
    for record in &records[1..] {
        assert!(record.position.unwrap().distance(anchor) > 0.0, "{}", record.domain);
    }
}

#[test]
fn core_domain_does_not_lead_its_group() {
    let config = EngineConfig::default();
    let mut records = group("mastodon", 5, 500, 50);
    records.push(Instance::new("mastodon.social").with_software("mastodon").with_stats(2_000_000, 1));

    let layout = place_all(&mut records, &config);
    assert_eq!(layout.rank(0).map(|r| r.index), Some(0));
    assert_eq!(layout.rank(5), None);
    assert_eq!(layout.system("mastodon").unwrap().member_count, 6);
    assert_eq!(layout.system("mastodon").unwrap().ranked, 5);
    assert_eq!(records[0].position, Some(layout.system("mastodon").unwrap().anchor.rounded()));
}

#[test]
fn unknown_group_goes_to_fallback() {
    let config = EngineConfig::default();
    let mut records: Vec<_> = (0..40).map(|i| Instance::new(format!("stray-{i}.test"))).collect();
    records.push(Instance::new("named.test").with_software("Unknown"));

    let layout = place_all(&mut records, &config);
    assert!(layout.system("Unknown").is_none());
    for record in &records {
        let kind: PositionType = label(record).unwrap().parse().unwrap();
        assert!(kind.is_fallback(), "{}: {kind}", record.domain);
        assert!(record.position.unwrap().is_finite());
    }
}

#[test]
fn order_is_preserved_and_every_record_is_placed() {
    let config = EngineConfig::default();
    let mut records = group("misskey", 130, 50_000, 80);
    records.extend(group("pleroma", 25, 3_000, 5));
    records.extend(group("gotosocial", 4, 200, 2));
    records.push(Instance::new("lonely.test"));
    let domains: Vec<_> = records.iter().map(|r| r.domain.clone()).collect();

    let placed = classify_and_place(records, &config);
    assert_eq!(placed.iter().map(|r| r.domain.clone()).collect::<Vec<_>>(), domains);
    assert!(placed.iter().all(|r| r.position.is_some_and(Position::is_finite)));
    assert!(placed.iter().all(|r| r.position_type.is_some()));
}

#[test]
fn placement_is_deterministic_and_order_independent() {
    let config = EngineConfig::default();
    let mut records = group("misskey", 40, 5_000, 60);
    records.extend(group("akkoma", 8, 300, 3));

    let first = classify_and_place(records.clone(), &config);
    let second = classify_and_place(records.clone(), &config);
    assert_eq!(first, second);

    let reversed: Vec<_> = records.into_iter().rev().collect();
    let mut third = classify_and_place(reversed, &config);
    third.reverse();
    for (a, b) in first.iter().zip(&third) {
        assert_eq!(a.position, b.position, "{}", a.domain);
    }
}

#[test]
fn domains_differing_only_by_name_land_apart() {
    let config = EngineConfig::default();
    let records = vec![
        Instance::new("alpha.test"),
        Instance::new("alphb.test"),
    ];
    let placed = classify_and_place(records, &config);
    assert_ne!(placed[0].position, placed[1].position);
}

#[test]
fn survey_tiers_by_member_count() {
    let config = EngineConfig::default();
    let mut records = group("big", 120, 1_000, 10);
    records.extend(group("mid", 30, 1_000, 10));
    records.extend(group("tiny", 2, 1_000, 10));

    let layout = GalaxyLayout::survey(&records, &config);
    assert_eq!(layout.system("big").unwrap().tier.to_string(), "A");
    assert_eq!(layout.system("big").unwrap().arm_index, Some(0));
    assert_eq!(layout.system("mid").unwrap().tier.to_string(), "B");
    assert_eq!(layout.system("tiny").unwrap().tier.to_string(), "C");
    assert_eq!(layout.systems().count(), 3);
}

#[test]
fn degenerate_config_stays_finite() {
    let mut config = EngineConfig::default();
    config.galaxy.spiral.arms = 0;
    config.galaxy.fallback.mix.dust_lane = 0.0;
    config.galaxy.fallback.mix.nebula = 0.0;
    config.galaxy.fallback.mix.halo = 0.0;
    config.galaxy.fallback.nebula.prefix_len = 0;
    config.max_user_count = 0;

    let mut records = group("x", 150, 100, 1);
    records.extend((0..30).map(|i| Instance::new(format!("s{i}.test"))));
    let placed = classify_and_place(records, &config);
    assert!(placed.iter().all(|r| r.position.is_some_and(Position::is_finite)));
}
