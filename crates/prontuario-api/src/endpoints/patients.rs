use prontuario_core::api_paths::{self, envelope};
use prontuario_core::models::patient::Patient;

use crate::client::ApiClient;
use crate::error::ApiError;

pub fn list(client: &ApiClient) -> Result<Vec<Patient>, ApiError> {
    client.get(api_paths::PATIENTS, envelope::PATIENTS)
}

pub fn get(client: &ApiClient, id: &str) -> Result<Patient, ApiError> {
    client.get(&api_paths::patient(id), envelope::PATIENT)
}

/// Look a patient up by CPF. Unknown CPFs come back as `ApiError::NotFound`.
pub fn get_by_cpf(client: &ApiClient, cpf: &str) -> Result<Patient, ApiError> {
    let digits: String = cpf.chars().filter(char::is_ascii_digit).collect();
    client.get(&api_paths::patient_by_cpf(&digits), envelope::PATIENT)
}

pub fn update(client: &ApiClient, patient: &Patient) -> Result<Patient, ApiError> {
    client.put(&api_paths::patient(&patient.id), patient, envelope::PATIENT)
}
