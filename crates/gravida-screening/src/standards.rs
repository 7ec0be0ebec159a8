use serde::Serialize;

use crate::outcome::FGR_KG;
use crate::percentile;

/// Glucose threshold descriptions.
#[derive(Debug, Clone, Serialize)]
pub struct GlucoseStandards {
    pub normal: String,
    pub impaired: String,
    pub gdm: String,
}

/// Blood-pressure threshold descriptions.
#[derive(Debug, Clone, Serialize)]
pub struct BloodPressureStandards {
    pub normal: String,
    pub preeclampsia: String,
}

/// Fetal-growth threshold descriptions. The FGR line depends on
/// gestational age: it names the band the 2.5 kg cutoff falls into at
/// that age.
#[derive(Debug, Clone, Serialize)]
pub struct FetalGrowthStandards {
    pub macrosomia: String,
    pub fgr: String,
}

/// The static clinical-standards card shown beside results.
#[derive(Debug, Clone, Serialize)]
pub struct ClinicalStandards {
    pub fasting_glucose: GlucoseStandards,
    pub blood_pressure: BloodPressureStandards,
    pub fetal_growth: FetalGrowthStandards,
}

impl ClinicalStandards {
    pub fn for_gestational_age(weeks: u8) -> Self {
        let fgr_band = percentile::classify(FGR_KG, weeks);
        Self {
            fasting_glucose: GlucoseStandards {
                normal: "< 5.1 mmol/L (ACOG)".to_string(),
                impaired: "5.1\u{2013}6.9 mmol/L".to_string(),
                gdm: "\u{2265} 7.0 mmol/L (WHO)".to_string(),
            },
            blood_pressure: BloodPressureStandards {
                normal: "< 140/90 mmHg".to_string(),
                preeclampsia: "\u{2265} 140/90 mmHg + proteinuria/symptoms".to_string(),
            },
            fetal_growth: FetalGrowthStandards {
                macrosomia: "\u{2265} 4.0 kg (WHO)".to_string(),
                fgr: format!("< 2.5 kg or < {fgr_band}%ile for {weeks} weeks"),
            },
        }
    }
}
