use starfield_domain::config::{ChromaConfig, TemperatureScale};

/// Upper hue bounds (exclusive) of each family, walking the wheel from 15°.
/// Red owns both ends of the seam.
const FAMILIES: [(f64, &str); 7] = [
    (15.0, "red"),
    (45.0, "orange"),
    (75.0, "yellow"),
    (165.0, "green"),
    (195.0, "cyan"),
    (255.0, "blue"),
    (345.0, "violet"),
];

const SIZE_NAMES: [&str; 5] = ["dwarf", "small", "medium", "large", "giant"];

/// Color temperature in Kelvin, piecewise linear over `hue / 360` through the
/// cool (0°), mid (180°) and hot (360°) anchors.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn temperature(hue: f64, scale: &TemperatureScale) -> u32 {
    let t = (hue / 360.0).clamp(0.0, 1.0);
    let kelvin = if t <= 0.5 {
        (scale.mid - scale.cool).mul_add(t * 2.0, scale.cool)
    } else {
        (scale.hot - scale.mid).mul_add((t - 0.5) * 2.0, scale.mid)
    };
    kelvin.round().clamp(0.0, f64::from(u32::MAX)) as u32
}

pub fn color_family(hue: f64) -> &'static str {
    let hue = hue.rem_euclid(360.0);
    FAMILIES.iter().find(|(upper, _)| hue < *upper).map_or("red", |(_, name)| name)
}

/// Size name by user count against ascending thresholds.
pub fn size_name(user_count: u64, thresholds: &[u64; 4]) -> &'static str {
    let index = thresholds.iter().take_while(|&&t| user_count >= t).count();
    SIZE_NAMES[index]
}

/// `"<family> <size>"`, e.g. `"blue giant"`.
pub fn category(hue: f64, user_count: u64, config: &ChromaConfig) -> String {
    format!("{} {}", color_family(hue), size_name(user_count, &config.size_names))
}
