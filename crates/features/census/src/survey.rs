use fxhash::FxHashMap;
use serde::Serialize;
use starfield_domain::Instance;
use std::fmt;

const SAMPLE_SIZE: usize = 5;
const TOP_GROUPS: usize = 5;
const RULE: &str = "─────────────────────────────────────";

/// Summary statistics of a dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Census {
    pub total_instances: usize,
    /// Count per group, largest first, ties by name.
    pub software_distribution: Vec<LabelCount>,
    /// Count per placement label, largest first, ties by label. Unplaced records count
    /// under an empty label.
    pub position_distribution: Vec<LabelCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_statistics: Option<HueStats>,
    pub sample: Vec<SampleRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

/// Hue statistics over the records that carry a color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HueStats {
    pub colored: usize,
    pub hue_min: f64,
    pub hue_max: f64,
    pub hue_avg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleRow {
    pub domain: String,
    pub software: String,
    pub hue: Option<f64>,
    pub position_type: Option<String>,
}

impl Census {
    pub fn survey(records: &[Instance]) -> Self {
        let software = ranked(records.iter().map(Instance::group_name));
        let positions = ranked(records.iter().map(|r| r.position_type.as_deref().unwrap_or_default()));

        let hues: Vec<f64> = records.iter().filter_map(|r| r.color.as_ref().map(|c| c.hsl.h)).collect();
        let color_statistics = (!hues.is_empty()).then(|| HueStats {
            colored: hues.len(),
            hue_min: hues.iter().copied().fold(f64::INFINITY, f64::min),
            hue_max: hues.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            hue_avg: hues.iter().sum::<f64>() / hues.len() as f64,
        });

        let sample = records
            .iter()
            .take(SAMPLE_SIZE)
            .map(|r| SampleRow {
                domain: r.domain.clone(),
                software: r.group_name().to_owned(),
                hue: r.color.as_ref().map(|c| c.hsl.h),
                position_type: r.position_type.clone(),
            })
            .collect();

        Self {
            total_instances: records.len(),
            software_distribution: software,
            position_distribution: positions,
            color_statistics,
            sample,
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

fn ranked<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<LabelCount> {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for label in labels {
        *counts.entry(label).or_default() += 1;
    }
    let mut ranked: Vec<LabelCount> =
        counts.into_iter().map(|(label, count)| LabelCount { label: label.to_owned(), count }).collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    ranked
}

impl fmt::Display for Census {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Statistics:")?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Total instances: {}", self.total_instances)?;
        writeln!(f, "Software types: {}", self.software_distribution.len())?;

        writeln!(f, "\nTop {TOP_GROUPS} software by instance count:")?;
        for (i, group) in self.software_distribution.iter().take(TOP_GROUPS).enumerate() {
            writeln!(f, "  {}. {:<20} {:>5} instances", i + 1, group.label, group.count)?;
        }

        writeln!(f, "\nPosition types:")?;
        for kind in &self.position_distribution {
            let label = if kind.label.is_empty() { "(none)" } else { &kind.label };
            writeln!(f, "  {label:<25} {:>5} instances", kind.count)?;
        }

        if let Some(hue) = &self.color_statistics {
            writeln!(f, "\nColor statistics:")?;
            writeln!(f, "  Hue range: {:.1}° - {:.1}°", hue.hue_min, hue.hue_max)?;
            writeln!(f, "  Hue average: {:.1}°", hue.hue_avg)?;
        }

        writeln!(f, "\nSample results (first {SAMPLE_SIZE}):")?;
        writeln!(f, "{RULE}")?;
        for row in &self.sample {
            writeln!(
                f,
                "{:<30} {:<12} Hue:{:>6.1}° Type:{:<20}",
                row.domain,
                row.software,
                row.hue.unwrap_or_default(),
                row.position_type.as_deref().unwrap_or_default(),
            )?;
        }
        Ok(())
    }
}
