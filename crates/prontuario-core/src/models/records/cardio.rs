use serde::{Deserialize, Serialize};

use super::common::{TreatmentPlan, VitalSigns};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardioAnamnesis {
    pub chief_complaint: String,
    pub history_of_present_illness: String,
    pub comorbidities: String,
    pub smoker: bool,
    pub pack_years: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Cough {
    pub present: bool,
    pub productive: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChestExam {
    pub thorax_type: String,
    pub breathing_pattern: String,
    pub chest_expansion: String,
    pub auscultation: String,
    pub cough: Cough,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RespiratoryMuscleStrength {
    /// PImax, cmH2O (stored as magnitude).
    pub maximal_inspiratory_pressure: f64,
    /// PEmax, cmH2O.
    pub maximal_expiratory_pressure: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Spirometry {
    pub fev1: f64,
    pub fvc: f64,
    pub fev1_fvc_ratio: f64,
    pub peak_expiratory_flow: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FunctionalCapacity {
    /// Six-minute walk test distance, metres.
    pub six_minute_walk_distance: f64,
    /// Borg CR10 dyspnea, 0-10.
    pub borg_dyspnea: f64,
    /// Borg CR10 leg fatigue, 0-10.
    pub borg_fatigue: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardiorespiratoryRecord {
    pub anamnesis: CardioAnamnesis,
    #[serde(alias = "VitalSigns")]
    pub vital_signs: VitalSigns,
    pub chest_exam: ChestExam,
    pub respiratory_muscle_strength: RespiratoryMuscleStrength,
    pub spirometry: Spirometry,
    pub functional_capacity: FunctionalCapacity,
    pub treatment_plan: TreatmentPlan,
}
