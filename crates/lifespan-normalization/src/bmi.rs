//! Body-mass index derivation.

use lifespan_model::round_to;

/// Compute body-mass index (kg/m²) rounded to one decimal.
///
/// Returns `None` when either measurement is missing or zero, or when the
/// height does not resolve to a positive metre value.
pub fn bmi_from(height_cm: Option<f64>, weight_kg: Option<f64>) -> Option<f64> {
    let (height_cm, weight_kg) = (height_cm?, weight_kg?);
    if height_cm == 0.0 || weight_kg == 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    if height_m <= 0.0 {
        return None;
    }
    Some(round_to(weight_kg / (height_m * height_m), 1))
}
