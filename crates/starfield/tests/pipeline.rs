use chrono::{TimeZone, Utc};
use starfield::domain::{EngineConfig, Instance};
use starfield::features::{chroma, orbit};
use starfield::{Phases, Pipeline};

fn dataset() -> Vec<Instance> {
    let mut records = vec![
        Instance::new("mastodon.social").with_software("mastodon").with_stats(2_000_000, 250_000),
        Instance::new("stray.example").with_first_seen_at("2023-05-05T10:00:00.000Z"),
    ];
    records.extend((0..25).map(|i| {
        Instance::new(format!("m{i}.example"))
            .with_software("mastodon")
            .with_stats(1000 - i * 30, i)
            .with_created_at("2020-02-02T00:00:00Z")
    }));
    records
}

#[test]
fn full_run_matches_the_individual_passes() {
    let config = EngineConfig::default();
    let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let input = dataset();

    let processed = Pipeline::new(config.clone()).at(now).run(input.clone());
    assert!(processed.layout.is_some());
    assert!(processed.colors_elapsed.is_some() && processed.positions_elapsed.is_some());

    let placed = orbit::classify_and_place(input, &config);
    for (record, expected) in processed.records.iter().zip(&placed) {
        assert_eq!(record.domain, expected.domain);
        assert_eq!(record.position, expected.position);
        assert_eq!(record.position_type, expected.position_type);
        assert_eq!(record.color.as_ref(), Some(&chroma::synthesize_color_at(record, &config, now)));
    }
}

#[test]
fn phases_can_be_run_alone() {
    let config = EngineConfig::default();

    let colors = Pipeline::new(config.clone()).phases(Phases::ColorsOnly).run(dataset());
    assert!(colors.layout.is_none());
    assert!(colors.records.iter().all(|r| r.color.is_some() && r.position.is_none()));

    let positions = Pipeline::new(config).phases(Phases::PositionsOnly).run(dataset());
    assert!(positions.colors_elapsed.is_none());
    assert!(positions.records.iter().all(|r| r.color.is_none() && r.position.is_some()));
}

#[test]
fn pinned_clock_makes_runs_identical() {
    let now = Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap();
    let pipeline = Pipeline::new(EngineConfig::default()).at(now);
    assert_eq!(pipeline.run(dataset()).records, pipeline.run(dataset()).records);
}
