use std::str::FromStr;

use gravida_core::models::{BloodPressure, Observation, Proteinuria};

use crate::cli::ScreenArgs;

/// Build a core observation from the raw flag values.
///
/// This is the parse-and-default boundary: an unknown dipstick code falls
/// back to `-` and a malformed blood pressure to 0/0, each with a
/// warning. The core never sees partial input and never errors.
pub fn observation_from_args(args: &ScreenArgs) -> Observation {
    let proteinuria = Proteinuria::from_str(&args.proteinuria).unwrap_or_else(|err| {
        tracing::warn!(%err, "defaulting proteinuria to -");
        Proteinuria::default()
    });

    let blood_pressure = BloodPressure::from_str(&args.bp).unwrap_or_else(|err| {
        tracing::warn!(%err, "defaulting blood pressure to 0/0");
        BloodPressure::default()
    });

    Observation {
        sfh_cm: args.sfh,
        gestational_age_weeks: args.weeks,
        proteinuria,
        fasting_glucose: args.fbs,
        blood_pressure,
    }
}
