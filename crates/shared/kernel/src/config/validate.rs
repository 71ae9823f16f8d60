use super::ConfigError;
use starfield_domain::EngineConfig;
use starfield_domain::config::Band;

/// Checks range ordering, radius signs and the fallback mix.
///
/// # Errors
/// Returns [`ConfigError::InvalidConfiguration`] naming the first offending field.
pub fn validate(config: &EngineConfig) -> Result<(), ConfigError> {
    let chroma = &config.chroma;
    let galaxy = &config.galaxy;

    if config.max_user_count == 0 {
        return Err(ConfigError::invalid("max_user_count must be positive"));
    }

    check_band("chroma.saturation", chroma.saturation)?;
    check_band("chroma.lightness", chroma.lightness)?;
    check_band("chroma.hue", Band::new(chroma.hue_old, chroma.hue_young))?;
    if chroma.era.early_boundary > chroma.era.late_boundary {
        return Err(ConfigError::invalid("chroma.era: early boundary is after late boundary"));
    }
    if chroma.genesis > chroma.era.late_boundary {
        return Err(ConfigError::invalid("chroma.genesis is after the late era boundary"));
    }
    if !chroma.size_names.is_sorted() {
        return Err(ConfigError::invalid("chroma.size_names must be ascending"));
    }

    if galaxy.tiers.a < galaxy.tiers.b {
        return Err(ConfigError::invalid("galaxy.tiers: tier A threshold is below tier B"));
    }
    let sizes = galaxy.sizes;
    if !(sizes.planet >= sizes.asteroid && sizes.asteroid >= sizes.satellite) {
        return Err(ConfigError::invalid("galaxy.sizes must descend from planet to satellite"));
    }
    if galaxy.spiral.arms == 0 {
        return Err(ConfigError::invalid("galaxy.spiral.arms must be at least 1"));
    }
    if galaxy.fallback.nebula.prefix_len == 0 {
        return Err(ConfigError::invalid("galaxy.fallback.nebula.prefix_len must be at least 1"));
    }

    let radii = [
        ("galaxy.core.radius", galaxy.core.radius),
        ("galaxy.spiral.start_radius", galaxy.spiral.start_radius),
        ("galaxy.branch.min_radius", galaxy.branch.min_radius),
        ("galaxy.branch.radius_span", galaxy.branch.radius_span),
        ("galaxy.bulge.min_radius", galaxy.bulge.min_radius),
        ("galaxy.bulge.radius_span", galaxy.bulge.radius_span),
        ("galaxy.systems.tier_a_radius", galaxy.systems.tier_a_radius),
        ("galaxy.systems.tier_b_radius", galaxy.systems.tier_b_radius),
        ("galaxy.systems.tier_c_radius", galaxy.systems.tier_c_radius),
        ("galaxy.fallback.nebula.min_radius", galaxy.fallback.nebula.min_radius),
        ("galaxy.fallback.nebula.spread", galaxy.fallback.nebula.spread),
        ("galaxy.fallback.halo.min_radius", galaxy.fallback.halo.min_radius),
        ("galaxy.fallback.halo.radius_span", galaxy.fallback.halo.radius_span),
    ];
    if let Some((name, value)) = radii.iter().find(|(_, v)| !(v.is_finite() && *v >= 0.0)) {
        return Err(ConfigError::invalid(format!("{name} must be a non-negative number, got {value}")));
    }

    let mix = galaxy.fallback.mix;
    let weights = [mix.dust_lane, mix.nebula, mix.halo];
    if weights.iter().any(|w| !w.is_finite() || *w < 0.0) || weights.iter().sum::<f64>() <= 0.0 {
        return Err(ConfigError::invalid("galaxy.fallback.mix needs non-negative weights with a positive sum"));
    }

    Ok(())
}

fn check_band(name: &'static str, band: Band) -> Result<(), ConfigError> {
    if band.min.is_finite() && band.max.is_finite() && band.is_ordered() {
        Ok(())
    } else {
        Err(ConfigError::invalid(format!("{name}: min {} exceeds max {}", band.min, band.max)))
    }
}
