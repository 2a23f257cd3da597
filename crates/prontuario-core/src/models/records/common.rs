use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BloodPressure {
    /// mmHg
    pub systolic: f64,
    /// mmHg
    pub diastolic: f64,
}

/// Vital signs shared by all three record types.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VitalSigns {
    pub blood_pressure: BloodPressure,
    /// Beats per minute.
    pub heart_rate: f64,
    /// Breaths per minute.
    pub respiratory_rate: f64,
    /// SpO2, percent.
    pub oxygen_saturation: f64,
    /// Degrees Celsius.
    pub temperature: f64,
}

/// Closing section shared by all three record types.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TreatmentPlan {
    pub physiotherapeutic_diagnosis: String,
    pub goals: String,
    pub conduct: String,
}
