use crate::config::WeightUnit;

/// Format a weight with its display unit ("245.0 lbs").
pub fn format_weight(weight: f64, unit: WeightUnit) -> String {
    format!("{:.1} {}", weight, unit)
}

/// Format a volume total; whole values drop the fraction.
pub fn format_volume(volume: f64) -> String {
    if volume.fract() == 0.0 {
        format!("{:.0}", volume)
    } else {
        format!("{:.1}", volume)
    }
}
