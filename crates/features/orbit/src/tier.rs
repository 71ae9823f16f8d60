use starfield_domain::Tier;
use starfield_domain::config::TierThresholds;

/// Per-group aggregate, computed once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupInfo {
    pub name: String,
    pub tier: Tier,
    pub member_count: usize,
    /// Main arm of a tier-A group.
    pub arm_index: Option<usize>,
}

impl GroupInfo {
    pub fn new(name: impl Into<String>, member_count: usize, thresholds: &TierThresholds) -> Self {
        Self { name: name.into(), tier: classify(member_count, thresholds), member_count, arm_index: None }
    }
}

/// `A` at or above the tier-A threshold, else `B` at or above the tier-B threshold, else `C`.
pub const fn classify(member_count: usize, thresholds: &TierThresholds) -> Tier {
    if member_count >= thresholds.a {
        Tier::A
    } else if member_count >= thresholds.b {
        Tier::B
    } else {
        Tier::C
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_inclusive() {
        let t = TierThresholds::default();
        assert_eq!(classify(100, &t), Tier::A);
        assert_eq!(classify(99, &t), Tier::B);
        assert_eq!(classify(20, &t), Tier::B);
        assert_eq!(classify(19, &t), Tier::C);
        assert_eq!(classify(0, &t), Tier::C);
    }

    #[test]
    fn info_carries_tier() {
        let info = GroupInfo::new("lemmy", 250, &TierThresholds::default());
        assert_eq!(info.tier, Tier::A);
        assert_eq!(info.arm_index, None);
    }
}
