//! Plain-text rendering of screening results and the static reference
//! data. Presentation only; every value comes from the core crates.

use std::fmt::Write;

use gravida_core::models::{Observation, Prediction};
use gravida_screening::reference::reference_rows;
use gravida_screening::standards::ClinicalStandards;

pub fn prediction(observation: &Observation, prediction: &Prediction) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Results");
    let _ = writeln!(
        out,
        "  Weight: {:.2} kg    Percentile: {}",
        prediction.weight_kg, prediction.band
    );
    let _ = writeln!(out, "  {}", prediction.outcome);
    let _ = writeln!(
        out,
        "  Inputs: SFH {} cm, {} weeks, proteinuria {}, FBS {} mmol/L, BP {} mmHg",
        observation.sfh_cm,
        observation.gestational_age_weeks,
        observation.proteinuria,
        observation.fasting_glucose,
        observation.blood_pressure,
    );

    if !prediction.risks.is_empty() {
        let _ = writeln!(out, "\nClinical Risks");
        for risk in &prediction.risks {
            let _ = writeln!(out, "  - {risk}");
        }
    }

    if !prediction.recommendations.is_empty() {
        let _ = writeln!(out, "\nRecommendations");
        for (i, recommendation) in prediction.recommendations.iter().enumerate() {
            // Blocks may span multiple lines; indent continuations under
            // their list number.
            let mut lines = recommendation.to_string();
            lines = lines.replace('\n', "\n     ");
            let _ = writeln!(out, "  {}. {lines}", i + 1);
        }
    }

    out.push('\n');
    out
}

pub fn reference_table(highlight_weeks: Option<u8>) -> String {
    let mut out = String::new();

    // Mark the row the classifier actually used, so an in-between week
    // like 30 highlights its snapped bucket.
    let highlight = highlight_weeks.map(gravida_screening::percentile::bucket_week);

    let _ = writeln!(out, "Growth Percentiles");
    let _ = writeln!(out, "  Week   10%ile   50%ile   90%ile");
    for row in reference_rows() {
        let marker = if highlight == Some(row.week) { ">" } else { " " };
        let _ = writeln!(
            out,
            " {marker}{:>3}   {:>4.1} kg  {:>4.1} kg  {:>4.1} kg",
            row.week, row.p10_kg, row.p50_kg, row.p90_kg
        );
    }

    out
}

pub fn standards(standards: &ClinicalStandards) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Clinical Standards");
    let _ = writeln!(out, "  Fetal Growth");
    let _ = writeln!(out, "    Macrosomia: {}", standards.fetal_growth.macrosomia);
    let _ = writeln!(out, "    FGR: {}", standards.fetal_growth.fgr);
    let _ = writeln!(out, "  Glucose");
    let _ = writeln!(out, "    Normal: {}", standards.fasting_glucose.normal);
    let _ = writeln!(out, "    Impaired: {}", standards.fasting_glucose.impaired);
    let _ = writeln!(out, "    GDM: {}", standards.fasting_glucose.gdm);
    let _ = writeln!(out, "  Blood Pressure");
    let _ = writeln!(out, "    Normal: {}", standards.blood_pressure.normal);
    let _ = writeln!(
        out,
        "    Pre-eclampsia: {}",
        standards.blood_pressure.preeclampsia
    );

    out
}
