use starfield_domain::Instance;
use starfield_repair::{Reclassified, reclassify};

#[test]
fn only_unrecognized_records_are_rewritten() {
    let mut records = vec![
        Instance::new("mastodon.example").with_software("Pleroma"),
        Instance::new("misskey.example").with_software("Unknown"),
        Instance::new("my-lemmy.town"),
        Instance::new("plain.example").with_software("Unknown"),
        Instance::new("pleroma.example").with_software(""),
    ];

    let fixed = reclassify(&mut records);

    assert_eq!(
        fixed,
        vec![
            Reclassified { index: 1, domain: "misskey.example".to_owned(), platform: "Misskey" },
            Reclassified { index: 2, domain: "my-lemmy.town".to_owned(), platform: "Lemmy" },
            Reclassified { index: 4, domain: "pleroma.example".to_owned(), platform: "Pleroma" },
        ]
    );
    assert_eq!(records[0].group_name(), "Pleroma");
    assert_eq!(records[1].group_name(), "Misskey");
    assert_eq!(records[3].group_name(), "Unknown");
    assert_eq!(records[2].software.as_ref().unwrap().extra["id"], 59);
}
