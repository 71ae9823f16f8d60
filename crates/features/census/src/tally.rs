use serde::{Deserialize, Serialize};
use serde_json::Value;
use starfield_domain::PositionType;
use starfield_domain::instance::null_as_default;
use starfield_kernel::dataset::{DatasetError, read_array};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{info, instrument, warn};

/// User count a record must exceed to count as large.
pub const DEFAULT_THRESHOLD: u64 = 1000;

/// Counts of large instances and special placements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub total_items: usize,
    pub threshold: u64,
    /// Records whose user count is strictly above `threshold`.
    pub users_over_threshold: usize,
    /// Core and fallback labels, each present even when zero.
    pub special_positions: BTreeMap<String, usize>,
    /// Records that could not be decoded and were left out of every count.
    pub skipped: usize,
}

/// The slice of a record the tally needs.
#[derive(Debug, Deserialize)]
struct Node {
    #[serde(default)]
    stats: Option<NodeStats>,
    #[serde(rename = "positionType", default)]
    position_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NodeStats {
    #[serde(default, deserialize_with = "null_as_default")]
    user_count: i64,
}

impl Tally {
    pub fn new(threshold: u64) -> Self {
        let special_positions = PositionType::SPECIAL.iter().map(|kind| (kind.to_string(), 0)).collect();
        Self { total_items: 0, threshold, users_over_threshold: 0, special_positions, skipped: 0 }
    }

    /// Tallies a JSON array read from `source`, or stdin for `-`.
    ///
    /// # Errors
    /// Fails only when the source is unreadable or not a JSON array; individual records
    /// that fail to decode are skipped with a warning.
    #[instrument(skip_all, fields(source = %source.as_ref().display(), threshold = threshold))]
    pub fn read(source: impl AsRef<Path>, threshold: u64) -> Result<Self, DatasetError> {
        let nodes: Vec<Value> = read_array(source)?;
        let tally = Self::count(nodes, threshold);
        info!(total = tally.total_items, skipped = tally.skipped, "Tally complete");
        Ok(tally)
    }

    /// Tallies already-parsed records.
    pub fn count(nodes: impl IntoIterator<Item = Value>, threshold: u64) -> Self {
        let mut tally = Self::new(threshold);
        for (index, value) in nodes.into_iter().enumerate() {
            match serde_json::from_value::<Node>(value) {
                Ok(node) => tally.add(&node),
                Err(e) => {
                    warn!(index, error = %e, "Skipping undecodable record");
                    tally.skipped += 1;
                },
            }
        }
        tally
    }

    fn add(&mut self, node: &Node) {
        self.total_items += 1;

        let users = node.stats.as_ref().map_or(0, |s| u64::try_from(s.user_count).unwrap_or(0));
        if users > self.threshold {
            self.users_over_threshold += 1;
        }

        if let Some(count) = node.position_type.as_deref().and_then(|label| self.special_positions.get_mut(label)) {
            *count += 1;
        }
    }

    /// Pretty JSON document.
    ///
    /// # Errors
    /// Only if serialization fails, which plain data does not.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn counts_large_and_special_records() {
        let nodes = vec![
            json!({ "domain": "a", "stats": { "user_count": 5000 }, "positionType": "supergiant" }),
            json!({ "domain": "b", "stats": { "user_count": 1000 }, "positionType": "planet" }),
            json!({ "domain": "c", "positionType": "halo" }),
            json!({ "domain": "d", "stats": { "user_count": 1001 }, "positionType": "nebula" }),
        ];
        let tally = Tally::count(nodes, DEFAULT_THRESHOLD);

        assert_eq!(tally.total_items, 4);
        assert_eq!(tally.users_over_threshold, 2);
        assert_eq!(tally.special_positions["supergiant"], 1);
        assert_eq!(tally.special_positions["halo"], 1);
        assert_eq!(tally.special_positions["nebula"], 1);
        assert_eq!(tally.special_positions["dust_lane"], 0);
        assert!(!tally.special_positions.contains_key("planet"));
    }

    #[test]
    fn bad_records_are_skipped() {
        let nodes = vec![
            json!({ "stats": { "user_count": "many" } }),
            json!("not an object"),
            json!({ "stats": { "user_count": 2000 } }),
        ];
        let tally = Tally::count(nodes, 1000);
        assert_eq!(tally.total_items, 1);
        assert_eq!(tally.skipped, 2);
        assert_eq!(tally.users_over_threshold, 1);
    }

    #[test]
    fn null_user_count_is_counted_not_skipped() {
        let nodes = vec![
            json!({ "stats": { "user_count": null }, "positionType": "halo" }),
            json!({ "stats": { "user_count": 1500 } }),
        ];
        let tally = Tally::count(nodes, 1000);
        assert_eq!(tally.total_items, 2);
        assert_eq!(tally.skipped, 0);
        assert_eq!(tally.users_over_threshold, 1);
        assert_eq!(tally.special_positions["halo"], 1);
    }
}
