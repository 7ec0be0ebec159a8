use gravida_core::models::{
    GrowthClass, Observation, Outcome, PercentileBand, Recommendation, RiskFlag,
};

/// WHO macrosomia threshold, kg.
pub const MACROSOMIA_KG: f64 = 4.0;
/// Low estimated weight suggesting fetal growth restriction, kg.
pub const FGR_KG: f64 = 2.5;
/// WHO gestational diabetes fasting threshold, mmol/L.
pub const GDM_FBS_MMOL: f64 = 7.0;
/// ACOG impaired fasting glucose threshold, mmol/L.
pub const IFG_FBS_MMOL: f64 = 5.1;

/// Combine the estimated weight, its percentile band, and the remaining
/// measurements into an outcome label plus ordered risk flags and
/// recommendations.
///
/// All thresholds are inclusive. Risks and recommendations accumulate
/// independently; nothing is deduplicated.
pub fn evaluate(
    weight_kg: f64,
    band: PercentileBand,
    observation: &Observation,
) -> (Outcome, Vec<RiskFlag>, Vec<Recommendation>) {
    // First match wins: macrosomia trumps FGR trumps appropriate.
    let class = if weight_kg >= MACROSOMIA_KG {
        GrowthClass::Macrosomia
    } else if weight_kg < FGR_KG || band == PercentileBand::Under10 {
        GrowthClass::PossibleFgr
    } else {
        GrowthClass::Appropriate
    };

    let mut risks = Vec::new();
    let mut recommendations = Vec::new();

    // Hypertensive disease. The two branches are mutually exclusive:
    // high BP without significant proteinuria is gestational hypertension
    // only, never pre-eclampsia.
    let bp = observation.blood_pressure;
    if observation.proteinuria.is_significant() {
        risks.push(RiskFlag::SignificantProteinuria);
        if bp.is_hypertensive() {
            risks.push(RiskFlag::Preeclampsia {
                systolic: bp.systolic,
                diastolic: bp.diastolic,
            });
            recommendations.push(Recommendation::UrgentEvaluation);
        }
    } else if bp.is_hypertensive() {
        risks.push(RiskFlag::GestationalHypertension);
    }

    // Glucose: frank GDM takes the whole branch, impaired fasting
    // glucose only fires below the GDM threshold.
    if observation.fasting_glucose >= GDM_FBS_MMOL {
        risks.push(RiskFlag::GestationalDiabetes);
        recommendations.push(Recommendation::GdmWorkup);
    } else if observation.fasting_glucose >= IFG_FBS_MMOL {
        risks.push(RiskFlag::ImpairedFastingGlucose);
        recommendations.push(Recommendation::GlucoseChallenge);
    }

    // Growth surveillance follows the same precedence as the outcome.
    if weight_kg >= MACROSOMIA_KG {
        recommendations.push(Recommendation::MacrosomiaSurveillance);
    } else if band == PercentileBand::Under10 {
        recommendations.push(Recommendation::FgrSurveillance);
    }

    (Outcome { class, band }, risks, recommendations)
}
