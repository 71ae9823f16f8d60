//! # Normalization Utilities
//!
//! Timestamp parsing with a silent "now" fallback, age in days, logarithmic normalization,
//! and era-offset lookup.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use starfield_domain::config::EraConfig;
use tracing::trace;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Naive layouts tried after RFC 3339 / RFC 2822; they are read as UTC.
const NAIVE_LAYOUTS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parses a timestamp in any of the known layouts.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(t) = DateTime::parse_from_rfc3339(raw) {
        return Some(t.with_timezone(&Utc));
    }
    if let Ok(t) = DateTime::parse_from_rfc2822(raw) {
        return Some(t.with_timezone(&Utc));
    }
    if let Some(t) =
        NAIVE_LAYOUTS.iter().find_map(|layout| NaiveDateTime::parse_from_str(raw, layout).ok())
    {
        return Some(t.and_utc());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|t| t.and_utc())
}

/// Parses `raw`, degrading to `now` when it is missing or unparseable.
pub fn resolve_timestamp(raw: Option<&str>, now: DateTime<Utc>) -> DateTime<Utc> {
    raw.and_then(parse_timestamp).unwrap_or_else(|| {
        trace!(raw = raw.unwrap_or_default(), "Unparseable timestamp, treating as now");
        now
    })
}

/// Days elapsed from `created` to `now`. Negative for timestamps in the future.
pub fn age_days(created: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now - created).num_milliseconds() as f64 / MILLIS_PER_DAY
}

/// `ln(value + 1) / ln(max + 1)`; 0 for non-positive values, 1 for a non-positive max.
pub fn log_normalize(value: f64, max: f64) -> f64 {
    if value <= 0.0 || value.is_nan() {
        return 0.0;
    }
    if max <= 0.0 || max.is_nan() {
        return 1.0;
    }
    value.ln_1p() / max.ln_1p()
}

/// Hue offset of the era `created` falls in: early before the early boundary (exclusive),
/// late from the late boundary on (inclusive), zero in between.
pub fn era_offset(created: DateTime<Utc>, era: &EraConfig) -> f64 {
    if created < era.early_boundary {
        era.early_offset
    } else if created >= era.late_boundary {
        era.late_offset
    } else {
        0.0
    }
}

/// Rounds to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
