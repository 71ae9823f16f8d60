use serde_json::json;
use starfield_domain::{Instance, Position, PositionType};

#[test]
fn unknown_keys_survive_a_roundtrip() {
    let raw = json!({
        "id": 7,
        "domain": "example.social",
        "open_registration": true,
        "software": { "name": "Mastodon", "slug": "mastodon" },
        "stats": { "user_count": 120, "monthly_active_users": 30, "status_count": 999 },
        "first_seen_at": "2020-05-01T00:00:00.000Z",
        "creation_time": { "created_at": "2019-03-01T00:00:00Z", "source": "api", "reliable": true }
    });

    let instance: Instance = serde_json::from_value(raw.clone()).expect("instance deserialize");
    assert_eq!(instance.group_name(), "Mastodon");
    assert_eq!(instance.user_count(), 120);
    assert_eq!(instance.timestamp(), Some("2019-03-01T00:00:00Z"));

    let back = serde_json::to_value(&instance).expect("instance serialize");
    assert_eq!(back, raw);
}

#[test]
fn derived_fields_are_injected_with_dataset_names() {
    let mut instance = Instance::new("example.social");
    instance.position = Some(Position::new(1.5, -2.0, 0.0));
    instance.position_type = Some(PositionType::Planet.to_string());

    let value = serde_json::to_value(&instance).expect("instance serialize");
    assert_eq!(value["positionType"], "planet");
    assert_eq!(value["position"]["x"], 1.5);
    assert!(value.get("color").is_none());
}

#[test]
fn sparse_records_deserialize() {
    let instance: Instance =
        serde_json::from_value(json!({ "domain": "bare.test", "stats": {} })).expect("sparse");
    assert_eq!(instance.user_count(), 1);
    assert_eq!(instance.monthly_active_users(), 0);
    assert!(instance.software.is_none());
}
