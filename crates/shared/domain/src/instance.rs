//! Instance records as they appear in the dataset.
//!
//! Every struct keeps the keys it does not model in an `extra` map, so a record that
//! goes through the engine is written back with exactly the shape it was read with,
//! plus the injected `color`, `position`, and `positionType` fields.

use crate::color::Color;
use crate::constants::UNKNOWN_GROUP;
use crate::layout::Position;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One dataset record: a network instance with its metadata and derived attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    pub domain: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub software: Option<Software>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<Stats>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_seen_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<CreationTime>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,

    /// Placement label. Kept as a string so datasets written by older layouts still load.
    #[serde(rename = "positionType", default, skip_serializing_if = "Option::is_none")]
    pub position_type: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Reads an explicit `null` as the type's default, like a missing key.
///
/// # Errors
/// Only when the value is present, not `null`, and not a `T`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Platform the instance runs; its name is the grouping key of the layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Software {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// User statistics. Negative values in the source are tolerated and floored by the accessors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_count: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub monthly_active_users: i64,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Creation timestamp reported by the instance itself, when known.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreationTime {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Instance {
    /// Creates a bare record for `domain` with no metadata.
    pub fn new(domain: impl Into<String>) -> Self {
        Self { domain: domain.into(), ..Self::default() }
    }

    /// Sets the platform name.
    #[must_use]
    pub fn with_software(mut self, name: impl Into<String>) -> Self {
        self.software = Some(Software { name: name.into(), extra: Map::new() });
        self
    }

    /// Sets total and monthly-active user counts.
    #[must_use]
    pub fn with_stats(mut self, user_count: i64, monthly_active_users: i64) -> Self {
        self.stats = Some(Stats { user_count, monthly_active_users, extra: Map::new() });
        self
    }

    /// Sets the self-reported creation timestamp.
    #[must_use]
    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.creation_time = Some(CreationTime { created_at: Some(created_at.into()), extra: Map::new() });
        self
    }

    /// Sets the first-observed timestamp.
    #[must_use]
    pub fn with_first_seen_at(mut self, first_seen_at: impl Into<String>) -> Self {
        self.first_seen_at = Some(first_seen_at.into());
        self
    }

    /// Group label used by the layout, falling back to the `Unknown` sentinel.
    pub fn group_name(&self) -> &str {
        self.software
            .as_ref()
            .map(|s| s.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_GROUP)
    }

    /// Raw user count, floored at zero. Missing stats count as zero.
    pub fn raw_user_count(&self) -> u64 {
        self.stats.as_ref().map_or(0, |s| u64::try_from(s.user_count).unwrap_or(0))
    }

    /// User count floored at one, safe as a divisor and inside a logarithm.
    pub fn user_count(&self) -> u64 {
        self.raw_user_count().max(1)
    }

    /// Monthly active users, floored at zero.
    pub fn monthly_active_users(&self) -> u64 {
        self.stats.as_ref().map_or(0, |s| u64::try_from(s.monthly_active_users).unwrap_or(0))
    }

    /// Timestamp the age is measured from: the self-reported creation time when present,
    /// else the first-observed time. `None` when neither is set.
    pub fn timestamp(&self) -> Option<&str> {
        self.creation_time
            .as_ref()
            .and_then(|c| c.created_at.as_deref())
            .filter(|s| !s.is_empty())
            .or(self.first_seen_at.as_deref())
    }
}
