use std::str::FromStr;

use gravida_core::error::CoreError;
use gravida_core::models::{
    BloodPressure, GrowthClass, Outcome, PercentileBand, Proteinuria, Recommendation, RiskFlag,
};

#[test]
fn proteinuria_parses_all_dipstick_codes() {
    assert_eq!(Proteinuria::from_str("-").unwrap(), Proteinuria::Negative);
    assert_eq!(Proteinuria::from_str("+").unwrap(), Proteinuria::OnePlus);
    assert_eq!(Proteinuria::from_str("++").unwrap(), Proteinuria::TwoPlus);
    assert_eq!(Proteinuria::from_str("+++").unwrap(), Proteinuria::ThreePlus);
    assert_eq!(Proteinuria::from_str("++++").unwrap(), Proteinuria::FourPlus);
}

#[test]
fn empty_proteinuria_reads_as_negative() {
    assert_eq!(Proteinuria::from_str("").unwrap(), Proteinuria::Negative);
    assert_eq!(Proteinuria::from_str("  ").unwrap(), Proteinuria::Negative);
}

#[test]
fn unknown_proteinuria_code_is_an_error() {
    let err = Proteinuria::from_str("garbage").unwrap_err();
    assert!(matches!(err, CoreError::InvalidProteinuria(_)));
}

#[test]
fn proteinuria_significance_starts_at_two_plus() {
    assert!(!Proteinuria::Negative.is_significant());
    assert!(!Proteinuria::OnePlus.is_significant());
    assert!(Proteinuria::TwoPlus.is_significant());
    assert!(Proteinuria::ThreePlus.is_significant());
    assert!(Proteinuria::FourPlus.is_significant());
}

#[test]
fn blood_pressure_parses_slash_form() {
    let bp = BloodPressure::from_str("120/80").unwrap();
    assert_eq!(bp, BloodPressure::new(120, 80));
    assert_eq!(bp.to_string(), "120/80");
}

#[test]
fn blood_pressure_rejects_malformed_input() {
    assert!(matches!(
        BloodPressure::from_str("140").unwrap_err(),
        CoreError::InvalidBloodPressure(_)
    ));
    assert!(matches!(
        BloodPressure::from_str("abc/def").unwrap_err(),
        CoreError::InvalidBloodPressure(_)
    ));
}

#[test]
fn hypertension_criteria_are_inclusive_on_either_side() {
    assert!(BloodPressure::new(140, 70).is_hypertensive());
    assert!(BloodPressure::new(110, 90).is_hypertensive());
    assert!(!BloodPressure::new(139, 89).is_hypertensive());
}

#[test]
fn band_serializes_to_clinical_notation() {
    assert_eq!(
        serde_json::to_string(&PercentileBand::Under10).unwrap(),
        "\"<10\""
    );
    assert_eq!(
        serde_json::to_string(&PercentileBand::Middle).unwrap(),
        "\"10-90\""
    );
    assert_eq!(
        serde_json::to_string(&PercentileBand::Over90).unwrap(),
        "\">90\""
    );
}

#[test]
fn outcome_labels_carry_the_band() {
    let macrosomia = Outcome {
        class: GrowthClass::Macrosomia,
        band: PercentileBand::Over90,
    };
    assert_eq!(
        macrosomia.to_string(),
        "Macrosomia (WHO \u{2265} 4.0 kg, >90%ile)"
    );

    let fgr = Outcome {
        class: GrowthClass::PossibleFgr,
        band: PercentileBand::Under10,
    };
    assert_eq!(fgr.to_string(), "Possible FGR (<10%ile)");

    let appropriate = Outcome {
        class: GrowthClass::Appropriate,
        band: PercentileBand::Middle,
    };
    assert_eq!(appropriate.to_string(), "Appropriate Growth (10-90%ile)");
}

#[test]
fn preeclampsia_flag_embeds_the_measured_pressure() {
    let flag = RiskFlag::Preeclampsia {
        systolic: 150,
        diastolic: 95,
    };
    assert_eq!(flag.to_string(), "ACOG: Pre-eclampsia (BP 150/95 mmHg)");
}

#[test]
fn gdm_workup_is_a_three_item_block() {
    let text = Recommendation::GdmWorkup.to_string();
    assert_eq!(text.lines().count(), 3);
    assert!(text.contains("75g OGTT confirmation"));
    assert!(text.contains("Diabetes education"));
    assert!(text.contains("Glucose monitoring"));
}
