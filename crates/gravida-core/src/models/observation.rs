use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Urine dipstick proteinuria code, ordered from negative to ++++.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Proteinuria {
    #[default]
    #[serde(rename = "-")]
    Negative,
    #[serde(rename = "+")]
    OnePlus,
    #[serde(rename = "++")]
    TwoPlus,
    #[serde(rename = "+++")]
    ThreePlus,
    #[serde(rename = "++++")]
    FourPlus,
}

impl Proteinuria {
    /// ACOG significance threshold: 2+ or above.
    pub fn is_significant(&self) -> bool {
        *self >= Proteinuria::TwoPlus
    }
}

impl fmt::Display for Proteinuria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Proteinuria::Negative => "-",
            Proteinuria::OnePlus => "+",
            Proteinuria::TwoPlus => "++",
            Proteinuria::ThreePlus => "+++",
            Proteinuria::FourPlus => "++++",
        };
        f.write_str(code)
    }
}

impl FromStr for Proteinuria {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "-" | "" => Ok(Proteinuria::Negative),
            "+" => Ok(Proteinuria::OnePlus),
            "++" => Ok(Proteinuria::TwoPlus),
            "+++" => Ok(Proteinuria::ThreePlus),
            "++++" => Ok(Proteinuria::FourPlus),
            other => Err(CoreError::InvalidProteinuria(other.to_string())),
        }
    }
}

/// A systolic/diastolic pair in mmHg.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloodPressure {
    pub systolic: u16,
    pub diastolic: u16,
}

impl BloodPressure {
    pub fn new(systolic: u16, diastolic: u16) -> Self {
        Self { systolic, diastolic }
    }

    /// ACOG hypertension criteria: systolic ≥ 140 or diastolic ≥ 90.
    pub fn is_hypertensive(&self) -> bool {
        self.systolic >= 140 || self.diastolic >= 90
    }
}

impl fmt::Display for BloodPressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.systolic, self.diastolic)
    }
}

impl FromStr for BloodPressure {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (sys, dia) = s
            .split_once('/')
            .ok_or_else(|| CoreError::InvalidBloodPressure(s.to_string()))?;
        let systolic = sys
            .trim()
            .parse()
            .map_err(|_| CoreError::InvalidBloodPressure(s.to_string()))?;
        let diastolic = dia
            .trim()
            .parse()
            .map_err(|_| CoreError::InvalidBloodPressure(s.to_string()))?;
        Ok(Self { systolic, diastolic })
    }
}

/// One set of prenatal measurements, taken at a single visit.
///
/// Numeric fields are never validated here: the calculation pipeline is
/// total over its numeric domain, and the presentation layer owns the
/// parse-and-default boundary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Observation {
    /// Symphysis-fundal height in cm.
    pub sfh_cm: f64,
    /// Gestational age in completed weeks; entry range 24–42, clamped to
    /// 24–40 for percentile lookup.
    pub gestational_age_weeks: u8,
    pub proteinuria: Proteinuria,
    /// Fasting blood sugar in mmol/L.
    pub fasting_glucose: f64,
    pub blood_pressure: BloodPressure,
}
