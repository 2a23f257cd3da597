use serde::{Deserialize, Serialize};

use super::common::{TreatmentPlan, VitalSigns};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NeuroAnamnesis {
    pub chief_complaint: String,
    pub history_of_present_illness: String,
    pub medical_diagnosis: String,
    pub onset_date: String,
    pub previous_treatments: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Consciousness {
    /// Glasgow Coma Scale, 3-15.
    pub glasgow_coma_scale: f64,
    pub orientation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MuscleTone {
    /// Modified Ashworth grade, 0-4.
    pub modified_ashworth: f64,
    pub affected_side: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Reflexes {
    pub biceps: String,
    pub patellar: String,
    pub achilles: String,
    pub babinski: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MotorFunction {
    /// MRC sum score, 0-60.
    pub mrc_sum_score: f64,
    pub coordination: String,
    pub involuntary_movements: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Sensitivity {
    pub superficial: String,
    pub deep: String,
    pub proprioception: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BalanceAndGait {
    /// Berg Balance Scale, 0-56.
    pub berg_balance_scale: f64,
    /// Timed Up and Go, seconds.
    pub timed_up_and_go: f64,
    pub gait_pattern: String,
    pub uses_assistive_device: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FunctionalIndependence {
    /// Barthel index, 0-100.
    pub barthel_index: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NeurofunctionalRecord {
    pub anamnesis: NeuroAnamnesis,
    #[serde(alias = "VitalSigns")]
    pub vital_signs: VitalSigns,
    pub consciousness: Consciousness,
    pub muscle_tone: MuscleTone,
    pub reflexes: Reflexes,
    pub motor_function: MotorFunction,
    pub sensitivity: Sensitivity,
    pub balance_and_gait: BalanceAndGait,
    pub functional_independence: FunctionalIndependence,
    pub treatment_plan: TreatmentPlan,
}
