pub mod observation;
pub mod prediction;
pub mod report;

pub use observation::{BloodPressure, Observation, Proteinuria};
pub use prediction::{GrowthClass, Outcome, PercentileBand, Prediction, Recommendation, RiskFlag};
pub use report::ScreeningReport;
