use serde::Serialize;

/// One display row of the on-screen growth table, values in kg rounded
/// to 1 decimal.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReferenceRow {
    pub week: u8,
    pub p10_kg: f64,
    pub p50_kg: f64,
    pub p90_kg: f64,
}

/// The gestational weeks the reference table displays.
pub const REFERENCE_WEEKS: [u8; 5] = [24, 28, 32, 36, 40];

/// Build the five-row reference table rendered next to results.
///
/// Uses its own linear display formula (`week*0.1 + 0.4/0.7/1.1`),
/// which intentionally differs from the classification thresholds in
/// [`crate::percentile`]. Keep the two tables separate.
pub fn reference_rows() -> [ReferenceRow; 5] {
    REFERENCE_WEEKS.map(|week| {
        let base = f64::from(week) * 0.1;
        ReferenceRow {
            week,
            p10_kg: round1(base + 0.4),
            p50_kg: round1(base + 0.7),
            p90_kg: round1(base + 1.1),
        }
    })
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
