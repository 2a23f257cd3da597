use prontuario_core::api_paths::{self, envelope};
use prontuario_core::models::universal::UniversalMedicalRecord;

use crate::client::ApiClient;
use crate::error::ApiError;

pub fn by_patient(client: &ApiClient, patient_id: &str) -> Result<UniversalMedicalRecord, ApiError> {
    client.get(
        &api_paths::universal_record_by_patient(patient_id),
        envelope::RECORD,
    )
}

pub fn get(client: &ApiClient, id: &str) -> Result<UniversalMedicalRecord, ApiError> {
    client.get(&api_paths::universal_record(id), envelope::RECORD)
}

pub fn create(
    client: &ApiClient,
    patient_id: &str,
    record: &UniversalMedicalRecord,
) -> Result<UniversalMedicalRecord, ApiError> {
    client.post(
        &api_paths::universal_record_by_patient(patient_id),
        record,
        envelope::RECORD,
    )
}

pub fn update(
    client: &ApiClient,
    id: &str,
    record: &UniversalMedicalRecord,
) -> Result<UniversalMedicalRecord, ApiError> {
    client.put(&api_paths::universal_record(id), record, envelope::RECORD)
}
