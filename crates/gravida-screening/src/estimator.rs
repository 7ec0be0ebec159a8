/// Slope of the simplified Hadlock SFH-to-weight formula, kg per cm.
pub const KG_PER_CM: f64 = 0.09;

/// Estimate fetal weight in kg from a symphysis-fundal height in cm,
/// rounded to 2 decimals.
///
/// Deliberately unvalidated: a negative or zero height yields a
/// non-clinical value rather than an error.
pub fn estimate_weight(sfh_cm: f64) -> f64 {
    round2(sfh_cm * KG_PER_CM)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
