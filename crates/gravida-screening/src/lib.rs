//! gravida-screening
//!
//! The antenatal calculation core: fetal weight estimation from
//! symphysis-fundal height, percentile banding against fixed growth
//! curves, and the outcome rule engine. Pure functions over
//! `gravida-core` types — no state, no I/O.

pub mod estimator;
pub mod outcome;
pub mod percentile;
pub mod reference;
pub mod standards;

use gravida_core::models::{Observation, Prediction};

/// Run the full screening pipeline over one set of measurements:
/// estimate → classify → evaluate rules.
///
/// Total for every input; identical observations always produce
/// identical predictions.
pub fn screen(observation: &Observation) -> Prediction {
    let weight_kg = estimator::estimate_weight(observation.sfh_cm);
    let band = percentile::classify(weight_kg, observation.gestational_age_weeks);
    let (outcome, risks, recommendations) = outcome::evaluate(weight_kg, band, observation);

    tracing::debug!(weight_kg, band = %band, outcome = %outcome, "screening computed");

    Prediction {
        weight_kg,
        band,
        outcome,
        risks,
        recommendations,
    }
}
