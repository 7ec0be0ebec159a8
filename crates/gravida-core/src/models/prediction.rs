use std::fmt;

use serde::{Deserialize, Serialize};

/// Growth-percentile band relative to the reference table for the
/// clamped gestational age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PercentileBand {
    #[serde(rename = "<10")]
    Under10,
    #[serde(rename = "10-90")]
    Middle,
    #[serde(rename = ">90")]
    Over90,
}

impl fmt::Display for PercentileBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let band = match self {
            PercentileBand::Under10 => "<10",
            PercentileBand::Middle => "10-90",
            PercentileBand::Over90 => ">90",
        };
        f.write_str(band)
    }
}

/// Growth classification, before band annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthClass {
    Macrosomia,
    PossibleFgr,
    Appropriate,
}

/// A growth classification annotated with the percentile band it was
/// reached in. `Display` yields the clinical label shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub class: GrowthClass,
    pub band: PercentileBand,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.class {
            GrowthClass::Macrosomia => {
                write!(f, "Macrosomia (WHO \u{2265} 4.0 kg, {}%ile)", self.band)
            }
            GrowthClass::PossibleFgr => write!(f, "Possible FGR ({}%ile)", self.band),
            GrowthClass::Appropriate => write!(f, "Appropriate Growth ({}%ile)", self.band),
        }
    }
}

/// A clinical risk identified by the rule engine.
///
/// `Display` reproduces the attributed strings from the source standards
/// (ACOG for hypertensive disease and impaired fasting glucose, WHO for
/// gestational diabetes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RiskFlag {
    SignificantProteinuria,
    Preeclampsia { systolic: u16, diastolic: u16 },
    GestationalHypertension,
    GestationalDiabetes,
    ImpairedFastingGlucose,
}

impl fmt::Display for RiskFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskFlag::SignificantProteinuria => {
                write!(f, "ACOG: Significant Proteinuria (\u{2265}2+)")
            }
            RiskFlag::Preeclampsia { systolic, diastolic } => {
                write!(f, "ACOG: Pre-eclampsia (BP {systolic}/{diastolic} mmHg)")
            }
            RiskFlag::GestationalHypertension => write!(f, "ACOG: Gestational Hypertension"),
            RiskFlag::GestationalDiabetes => {
                write!(f, "WHO: Gestational Diabetes (FBS \u{2265}7.0 mmol/L)")
            }
            RiskFlag::ImpairedFastingGlucose => write!(f, "ACOG: Impaired Fasting Glucose"),
        }
    }
}

/// A follow-up recommendation attached by the rule engine. `Display`
/// yields the full text block, which may span multiple lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    UrgentEvaluation,
    GdmWorkup,
    GlucoseChallenge,
    MacrosomiaSurveillance,
    FgrSurveillance,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Recommendation::UrgentEvaluation => {
                "Urgent OB evaluation + labs (CBC, LFTs, creatinine)"
            }
            Recommendation::GdmWorkup => {
                "1. 75g OGTT confirmation\n2. Diabetes education\n3. Glucose monitoring"
            }
            Recommendation::GlucoseChallenge => "Consider 1-hour 50g glucose challenge test",
            Recommendation::MacrosomiaSurveillance => {
                "\u{2022} Ultrasound for growth verification\n\u{2022} Monitor for shoulder dystocia"
            }
            Recommendation::FgrSurveillance => {
                "\u{2022} Doppler ultrasound\n\u{2022} Antenatal testing\n\u{2022} Consider delivery at 37-38 weeks if severe"
            }
        };
        f.write_str(text)
    }
}

/// The result of one screening calculation. Built fresh per invocation;
/// carries no identity and is never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Estimated fetal weight in kg, rounded to 2 decimals.
    pub weight_kg: f64,
    pub band: PercentileBand,
    pub outcome: Outcome,
    /// In rule-evaluation order; duplicates are never produced but also
    /// never filtered.
    pub risks: Vec<RiskFlag>,
    pub recommendations: Vec<Recommendation>,
}
