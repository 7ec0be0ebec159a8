use gravida_core::models::PercentileBand;

/// Lookup domain: gestational ages outside this range clamp to it.
pub const MIN_LOOKUP_WEEK: u8 = 24;
pub const MAX_LOOKUP_WEEK: u8 = 40;

/// One row of the banded growth table, thresholds in kg.
#[derive(Debug, Clone, Copy)]
pub struct PercentileRow {
    pub week: u8,
    pub p10: f64,
    pub p50: f64,
    pub p90: f64,
}

/// Simplified Hadlock growth curves, defined at 4-week intervals.
///
/// Distinct from the display table in [`crate::reference`]: these are the
/// classification thresholds, not the rendered reference values.
pub static PERCENTILE_TABLE: [PercentileRow; 5] = [
    PercentileRow { week: 24, p10: 0.6, p50: 0.7, p90: 0.8 },
    PercentileRow { week: 28, p10: 1.0, p50: 1.2, p90: 1.4 },
    PercentileRow { week: 32, p10: 1.6, p50: 1.9, p90: 2.2 },
    PercentileRow { week: 36, p10: 2.4, p50: 2.9, p90: 3.3 },
    PercentileRow { week: 40, p10: 2.9, p50: 3.5, p90: 4.1 },
];

/// Clamp into the lookup domain, then snap down to the nearest defined
/// row (25–27 → 24, 30 → 28, 39 → 36). Total for every `u8` week.
pub fn bucket_week(gestational_age_weeks: u8) -> u8 {
    let clamped = gestational_age_weeks.clamp(MIN_LOOKUP_WEEK, MAX_LOOKUP_WEEK);
    clamped - (clamped - MIN_LOOKUP_WEEK) % 4
}

/// The table row a gestational age resolves to.
pub fn row_for_week(gestational_age_weeks: u8) -> &'static PercentileRow {
    let bucket = bucket_week(gestational_age_weeks);
    PERCENTILE_TABLE
        .iter()
        .find(|row| row.week == bucket)
        .unwrap_or(&PERCENTILE_TABLE[0])
}

/// Band a weight against the growth curve for the given gestational age.
///
/// Boundaries are asymmetric on purpose: a weight exactly at p10 is in
/// the middle band, a weight exactly at p90 is above it.
pub fn classify(weight_kg: f64, gestational_age_weeks: u8) -> PercentileBand {
    let row = row_for_week(gestational_age_weeks);
    if weight_kg < row.p10 {
        PercentileBand::Under10
    } else if weight_kg >= row.p90 {
        PercentileBand::Over90
    } else {
        PercentileBand::Middle
    }
}
