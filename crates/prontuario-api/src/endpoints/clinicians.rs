use prontuario_core::api_paths::{self, envelope};
use prontuario_core::models::clinician::Clinician;

use crate::client::ApiClient;
use crate::error::ApiError;

pub fn list(client: &ApiClient) -> Result<Vec<Clinician>, ApiError> {
    client.get(api_paths::CLINICIANS, envelope::CLINICIANS)
}

pub fn get(client: &ApiClient, id: &str) -> Result<Clinician, ApiError> {
    client.get(&api_paths::clinician(id), envelope::CLINICIAN)
}

pub fn update(client: &ApiClient, clinician: &Clinician) -> Result<Clinician, ApiError> {
    client.put(
        &api_paths::clinician(&clinician.id),
        clinician,
        envelope::CLINICIAN,
    )
}
