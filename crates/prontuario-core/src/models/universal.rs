use serde::{Deserialize, Serialize};

use super::record_type::RecordType;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub relationship: String,
}

/// IDs of the specific records attached to a patient, keyed by record type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecificMedicalRecordIds {
    #[serde(default)]
    pub neurofunctional_record: Option<String>,
    #[serde(default)]
    pub cardiorespiratory_record: Option<String>,
    #[serde(default)]
    pub trauma_orthopedic_record: Option<String>,
}

impl SpecificMedicalRecordIds {
    pub fn get(&self, record_type: RecordType) -> Option<&str> {
        match record_type {
            RecordType::Neurofunctional => self.neurofunctional_record.as_deref(),
            RecordType::Cardiorespiratory => self.cardiorespiratory_record.as_deref(),
            RecordType::TraumaOrthopedic => self.trauma_orthopedic_record.as_deref(),
        }
    }

    /// Classify `record_id` by comparing it with each entry in
    /// [`RecordType::PRECEDENCE`] order. Empty IDs never match.
    pub fn classify(&self, record_id: &str) -> Option<RecordType> {
        if record_id.is_empty() {
            return None;
        }
        RecordType::PRECEDENCE
            .into_iter()
            .find(|t| self.get(*t) == Some(record_id))
    }

    /// Record types that have an ID attached, in precedence order.
    pub fn present(&self) -> Vec<(RecordType, &str)> {
        RecordType::PRECEDENCE
            .into_iter()
            .filter_map(|t| self.get(t).filter(|id| !id.is_empty()).map(|id| (t, id)))
            .collect()
    }
}

/// The patient's shared record ("prontuario"). One per patient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniversalMedicalRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<String>,
    #[serde(default)]
    pub profession: String,
    #[serde(default)]
    pub emergency_contact: EmergencyContact,
    #[serde(default)]
    pub allergies: Vec<String>,
    /// Centimetres.
    #[serde(default)]
    pub height: f64,
    /// Kilograms.
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub medications: Vec<String>,
    #[serde(default)]
    pub diagnoses: Vec<String>,
    #[serde(default)]
    pub specific_medical_records_ids: SpecificMedicalRecordIds,
}
