use serde::{Deserialize, Serialize};

use super::observation::Observation;
use super::prediction::Prediction;

/// JSON export envelope pairing the measurements with the computed
/// prediction. Produced by the presentation layer; the calculation core
/// never sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningReport {
    pub generated_at: jiff::Timestamp,
    pub observation: Observation,
    pub prediction: Prediction,
}
