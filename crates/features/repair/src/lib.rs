//! Post-hoc repair of records whose platform is missing or `Unknown`.
//!
//! The lowercased domain is matched against an ordered keyword table; the first keyword
//! contained in the domain assigns its platform, together with the registry `id`, `url`
//! and `slug` of that platform.

use serde_json::{Map, Value, json};
use starfield_domain::constants::UNKNOWN_GROUP;
use starfield_domain::{Instance, Software};
use tracing::{debug, info};

const REGISTRY_URL: &str = "https://fedidb.org/software/";

/// A known platform and the keyword that identifies it in a domain name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub keyword: &'static str,
    pub id: u32,
    pub name: &'static str,
    pub slug: &'static str,
}

/// Matched in order; the first hit wins.
pub const PLATFORMS: [Platform; 5] = [
    Platform { keyword: "mastodon", id: 2, name: "Mastodon", slug: "mastodon" },
    Platform { keyword: "pleroma", id: 4, name: "Pleroma", slug: "pleroma" },
    Platform { keyword: "misskey", id: 12, name: "Misskey", slug: "misskey" },
    Platform { keyword: "lemmy", id: 59, name: "Lemmy", slug: "lemmy" },
    Platform { keyword: "akkoma", id: 89, name: "Akkoma", slug: "akkoma" },
];

impl Platform {
    /// Software block written into a repaired record.
    pub fn software(&self) -> Software {
        let mut extra = Map::new();
        extra.insert("id".to_owned(), json!(self.id));
        extra.insert("url".to_owned(), Value::String(format!("{REGISTRY_URL}{}", self.slug)));
        extra.insert("slug".to_owned(), Value::String(self.slug.to_owned()));
        Software { name: self.name.to_owned(), extra }
    }
}

/// One rewritten record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reclassified {
    pub index: usize,
    pub domain: String,
    pub platform: &'static str,
}

/// First platform whose keyword occurs in `domain`, ignoring case.
pub fn match_platform(domain: &str) -> Option<&'static Platform> {
    let domain = domain.to_lowercase();
    PLATFORMS.iter().find(|p| domain.contains(p.keyword))
}

fn is_unrecognized(record: &Instance) -> bool {
    record.group_name() == UNKNOWN_GROUP
}

/// Rewrites the platform of every unrecognized record whose domain matches a keyword.
pub fn reclassify(records: &mut [Instance]) -> Vec<Reclassified> {
    let mut fixed = Vec::new();
    for (index, record) in records.iter_mut().enumerate() {
        if !is_unrecognized(record) {
            continue;
        }
        let Some(platform) = match_platform(&record.domain) else {
            debug!(domain = %record.domain, "No keyword match");
            continue;
        };

        record.software = Some(platform.software());
        info!(domain = %record.domain, platform = platform.name, "Fixed");
        fixed.push(Reclassified { index, domain: record.domain.clone(), platform: platform.name });
    }

    info!(fixed = fixed.len(), "Reclassification complete");
    fixed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_keyword_wins() {
        assert_eq!(match_platform("lemmy.mastodon.example").map(|p| p.name), Some("Mastodon"));
        assert_eq!(match_platform("Akkoma.Social").map(|p| p.id), Some(89));
        assert_eq!(match_platform("plain.example"), None);
    }

    #[test]
    fn software_block_carries_registry_metadata() {
        let software = PLATFORMS[3].software();
        assert_eq!(software.name, "Lemmy");
        assert_eq!(software.extra["id"], 59);
        assert_eq!(software.extra["url"], "https://fedidb.org/software/lemmy");
        assert_eq!(software.extra["slug"], "lemmy");
    }
}
