use gravida_screening::percentile::PERCENTILE_TABLE;
use gravida_screening::reference::{reference_rows, REFERENCE_WEEKS};
use gravida_screening::standards::ClinicalStandards;

#[test]
fn reference_table_has_the_five_display_rows() {
    let rows = reference_rows();
    let weeks: Vec<u8> = rows.iter().map(|r| r.week).collect();
    assert_eq!(weeks, REFERENCE_WEEKS);
}

#[test]
fn reference_values_follow_the_display_formula() {
    let rows = reference_rows();
    assert_eq!(rows[0].p10_kg, 2.8); // 24*0.1 + 0.4
    assert_eq!(rows[0].p50_kg, 3.1);
    assert_eq!(rows[0].p90_kg, 3.5);
    assert_eq!(rows[4].p10_kg, 4.4); // 40*0.1 + 0.4
    assert_eq!(rows[4].p90_kg, 5.1);
}

#[test]
fn display_table_diverges_from_classification_table() {
    // The rendered table and the classifier thresholds are different
    // functions of week. Guard against anyone "fixing" one to match
    // the other.
    let display = reference_rows();
    for (display_row, table_row) in display.iter().zip(&PERCENTILE_TABLE) {
        assert_eq!(display_row.week, table_row.week);
        assert_ne!(display_row.p10_kg, table_row.p10);
        assert_ne!(display_row.p90_kg, table_row.p90);
    }
}

#[test]
fn standards_card_names_the_band_for_the_fgr_cutoff() {
    let standards = ClinicalStandards::for_gestational_age(28);
    // 2.5 kg is above the 28-week p90 (1.4 kg).
    assert_eq!(
        standards.fetal_growth.fgr,
        "< 2.5 kg or < >90%ile for 28 weeks"
    );
    assert_eq!(standards.fetal_growth.macrosomia, "\u{2265} 4.0 kg (WHO)");
    assert_eq!(standards.fasting_glucose.gdm, "\u{2265} 7.0 mmol/L (WHO)");
    assert_eq!(standards.blood_pressure.normal, "< 140/90 mmHg");
}
