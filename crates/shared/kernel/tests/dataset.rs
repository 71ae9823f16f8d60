use serde_json::{Value, json};
use starfield_kernel::dataset::{DatasetError, parse_instances, read_instances, write_instances};
use std::fs;
use tempfile::tempdir;

#[test]
fn round_trip_preserves_unknown_keys() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("raw.json");
    let raw = json!([
        {
            "domain": "a.test",
            "software": { "name": "mastodon", "version": "4.2.0" },
            "stats": { "user_count": 120, "monthly_active_users": 30, "status_count": 9000 },
            "first_seen_at": "2021-03-01T00:00:00Z",
            "creation_time": { "created_at": "2020-01-01T00:00:00Z", "source": "api", "reliable": true },
            "open_registrations": false
        }
    ]);
    fs::write(&input, serde_json::to_string(&raw).unwrap()).unwrap();

    let records = read_instances(&input).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].group_name(), "mastodon");
    assert_eq!(records[0].timestamp(), Some("2020-01-01T00:00:00Z"));

    let output = dir.path().join("nested/out/final.json");
    write_instances(&output, &records).unwrap();

    let written: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written, raw);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = read_instances(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, DatasetError::Io { .. }));
    assert!(err.to_string().contains("absent.json"), "{err}");
}

#[test]
fn top_level_object_is_rejected() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("object.json");
    fs::write(&input, r#"{"domain":"a.test"}"#).unwrap();
    assert!(matches!(read_instances(&input), Err(DatasetError::Json { .. })));
}

#[test]
fn null_fields_degrade_to_defaults() {
    let raw = json!([
        { "domain": "ok.test", "software": { "name": "mastodon" }, "stats": { "user_count": 40, "monthly_active_users": 8 } },
        { "domain": "nulls.test", "software": { "name": "mastodon" }, "stats": { "user_count": 5, "monthly_active_users": null } },
        { "domain": "anon.test", "software": { "name": null }, "stats": { "user_count": null, "monthly_active_users": 3 } },
        { "domain": "bare.test", "software": null, "stats": null, "first_seen_at": null }
    ]);

    let records = parse_instances(&raw.to_string()).unwrap();
    assert_eq!(records.len(), 4);

    assert_eq!(records[1].user_count(), 5);
    assert_eq!(records[1].monthly_active_users(), 0);

    assert_eq!(records[2].group_name(), "Unknown");
    assert_eq!(records[2].raw_user_count(), 0);
    assert_eq!(records[2].user_count(), 1);

    assert_eq!(records[3].group_name(), "Unknown");
    assert_eq!(records[3].user_count(), 1);
    assert_eq!(records[3].timestamp(), None);
}
