use crate::types::DecimalPlaces;

/// Rounds `value` to `places` decimal digits, half away from zero.
///
/// If scaling by `10^places` overflows, `value` is returned unrounded. Values that round to
/// zero come back as `0.0`, never `-0.0`.
pub fn round_to_places(value: f64, places: DecimalPlaces) -> f64 {
    let factor = 10_f64.powi(places.min(i32::MAX as u32) as i32);
    let scaled = value * factor;

    if !factor.is_finite() || !scaled.is_finite() {
        return value;
    }

    // Adding positive zero turns `-0.0` into `0.0`
    scaled.round() / factor + 0.0
}
