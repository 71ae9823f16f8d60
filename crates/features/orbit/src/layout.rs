//! # Galaxy Layout
//!
//! The aggregate pass groups records, classifies groups, allocates anchors and radii, and
//! ranks members. The result is an immutable [`GalaxyLayout`] that the per-record pass
//! reads from any number of threads.

use crate::centers::{Anchors, allocate, system_radius};
use crate::fallback::place_fallback;
use crate::placer::{Orbit, Orientation, core_lookup, orbital_position, size_class};
use crate::tier::GroupInfo;
use fxhash::FxHashMap;
use rayon::prelude::*;
use starfield_domain::constants::UNKNOWN_GROUP;
use starfield_domain::{EngineConfig, Instance, Position, PositionType, Tier};
use tracing::{debug, info, instrument, warn};

/// Anchor, extent and orientation of one group.
#[derive(Debug, Clone)]
pub struct GroupSystem {
    pub tier: Tier,
    pub member_count: usize,
    /// Main arm for tier-A groups.
    pub arm_index: Option<usize>,
    pub anchor: Position,
    pub radius: f64,
    pub orientation: Orientation,
    /// Number of ranked members; core domains are not ranked.
    pub ranked: usize,
}

/// Rank of a record inside its group, `0` being the leader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rank {
    pub index: usize,
    pub total: usize,
}

/// Read-only snapshot of the aggregate pass.
#[derive(Debug, Clone, Default)]
pub struct GalaxyLayout {
    systems: FxHashMap<String, GroupSystem>,
    ranks: Vec<Option<Rank>>,
}

/// Whether a group name gets an anchor at all.
fn is_anchored(name: &str) -> bool {
    !name.is_empty() && name != UNKNOWN_GROUP
}

impl GalaxyLayout {
    /// Runs the aggregate pass over `records`.
    #[instrument(name = "survey_layout", skip_all, fields(records = records.len()))]
    pub fn survey(records: &[Instance], config: &EngineConfig) -> Self {
        let galaxy = &config.galaxy;

        let mut members: FxHashMap<&str, Vec<usize>> = FxHashMap::default();
        for (i, record) in records.iter().enumerate() {
            let name = record.group_name();
            if is_anchored(name) {
                members.entry(name).or_default().push(i);
            }
        }

        let mut groups: Vec<GroupInfo> =
            members.iter().map(|(name, indices)| GroupInfo::new(*name, indices.len(), &galaxy.tiers)).collect();
        let anchors: Anchors = allocate(&mut groups, galaxy);

        let is_core = |i: usize| galaxy.core.domains.iter().any(|d| *d == records[i].domain);
        let mut ranks = vec![None; records.len()];
        let mut systems = FxHashMap::default();

        for group in groups {
            let Some(anchor) = anchors.get(&group.name).copied() else { continue };
            let mut ranked: Vec<usize> =
                members.get(group.name.as_str()).into_iter().flatten().copied().filter(|&i| !is_core(i)).collect();

            // Largest first; ties broken by domain, then by input position.
            ranked.sort_by(|&a, &b| {
                records[b]
                    .user_count()
                    .cmp(&records[a].user_count())
                    .then_with(|| records[a].domain.cmp(&records[b].domain))
                    .then(a.cmp(&b))
            });
            let total = ranked.len();
            for (index, &i) in ranked.iter().enumerate() {
                ranks[i] = Some(Rank { index, total });
            }

            systems.insert(
                group.name.clone(),
                GroupSystem {
                    tier: group.tier,
                    member_count: group.member_count,
                    arm_index: group.arm_index,
                    anchor,
                    radius: system_radius(group.tier, group.member_count, &galaxy.systems),
                    orientation: Orientation::of_group(&group.name),
                    ranked: total,
                },
            );
        }

        info!(groups = systems.len(), "Galaxy layout surveyed");
        Self { systems, ranks }
    }

    pub fn system(&self, group: &str) -> Option<&GroupSystem> {
        self.systems.get(group)
    }

    pub fn systems(&self) -> impl Iterator<Item = (&str, &GroupSystem)> {
        self.systems.iter().map(|(name, system)| (name.as_str(), system))
    }

    /// Rank of record `index` within its group. `None` for core domains and ungrouped records.
    pub fn rank(&self, index: usize) -> Option<Rank> {
        self.ranks.get(index).copied().flatten()
    }

    /// Position and label of record `index`. Never fails: core domains win, ranked members
    /// orbit their anchor, everything else goes to the fallback placer.
    pub fn place(&self, index: usize, record: &Instance, config: &EngineConfig) -> (Position, PositionType) {
        let galaxy = &config.galaxy;

        if let Some(position) = core_lookup(&record.domain, &galaxy.core) {
            return (position, PositionType::Supergiant);
        }

        let system = self.systems.get(record.group_name());
        let (Some(system), Some(rank)) = (system, self.rank(index)) else {
            return place_fallback(&record.domain, &galaxy.spiral, &galaxy.fallback);
        };

        let users = record.user_count();
        let size = size_class(users, &galaxy.sizes);
        if rank.index == 0 {
            return (system.anchor, size.into());
        }

        let orbit = Orbit {
            domain: &record.domain,
            user_count: users,
            max_user_count: config.max_user_count,
            rank: rank.index,
            total: rank.total,
        };
        let position = orbital_position(
            &orbit,
            size,
            system.anchor,
            system.radius,
            galaxy.systems.radial_variation,
            system.orientation,
        );
        (position, size.into())
    }
}

/// Places every record in place, rounding coordinates to one decimal.
#[instrument(name = "place_all", skip_all, fields(records = records.len()))]
pub fn place_all(records: &mut [Instance], config: &EngineConfig) -> GalaxyLayout {
    let layout = GalaxyLayout::survey(records, config);

    records.par_iter_mut().enumerate().for_each(|(i, record)| {
        let (position, kind) = layout.place(i, record, config);
        let position = if position.is_finite() {
            position.rounded()
        } else {
            warn!(domain = %record.domain, "Non-finite placement, pinned to origin");
            Position::ORIGIN
        };
        record.position = Some(position);
        record.position_type = Some(kind.to_string());
    });

    debug!("Placement pass finished");
    layout
}

/// Enriches `records` with `position` and `positionType`, preserving their order.
pub fn classify_and_place(mut records: Vec<Instance>, config: &EngineConfig) -> Vec<Instance> {
    place_all(&mut records, config);
    records
}
