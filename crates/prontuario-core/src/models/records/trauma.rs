use serde::{Deserialize, Serialize};

use super::common::{TreatmentPlan, VitalSigns};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TraumaAnamnesis {
    pub chief_complaint: String,
    pub history_of_present_illness: String,
    pub mechanism_of_injury: String,
    pub injury_date: String,
    pub surgical_history: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pain {
    /// Visual analogue scale, 0-10.
    pub intensity: f64,
    pub location: String,
    pub character: String,
    pub aggravating_factors: String,
    pub relieving_factors: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Inspection {
    pub edema: bool,
    pub deformity: bool,
    pub scar: bool,
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Palpation {
    pub tenderness: bool,
    pub temperature_increase: bool,
    pub notes: String,
}

/// Goniometry of the assessed joint, degrees.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RangeOfMotion {
    pub joint: String,
    pub flexion: f64,
    pub extension: f64,
    pub abduction: f64,
    pub adduction: f64,
    pub internal_rotation: f64,
    pub external_rotation: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MuscleStrength {
    pub muscle_group: String,
    /// Oxford scale, 0-5.
    pub grade: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpecialTests {
    pub performed: String,
    pub findings: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FunctionalScales {
    /// Lower Extremity Functional Scale, 0-80.
    pub lower_extremity_functional_scale: f64,
    /// DASH, 0-100.
    pub dash_score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TraumaOrthopedicRecord {
    pub anamnesis: TraumaAnamnesis,
    #[serde(alias = "VitalSigns")]
    pub vital_signs: VitalSigns,
    pub pain: Pain,
    pub inspection: Inspection,
    pub palpation: Palpation,
    pub range_of_motion: RangeOfMotion,
    pub muscle_strength: MuscleStrength,
    pub special_tests: SpecialTests,
    pub functional_scales: FunctionalScales,
    pub treatment_plan: TreatmentPlan,
}
