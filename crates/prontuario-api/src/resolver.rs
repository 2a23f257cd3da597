//! Decide which specific record type a bare record ID belongs to.
//!
//! The answer always comes from the patient's `specificMedicalRecordsIds`
//! map, never from the shape of the record body.

use prontuario_core::models::record_type::RecordType;
use prontuario_core::models::universal::SpecificMedicalRecordIds;
use thiserror::Error;
use tracing::error;

use crate::client::ApiClient;
use crate::endpoints::universal;
use crate::error::ApiError;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("could not load the patient's records: {0}")]
    Lookup(#[from] ApiError),

    #[error("record type not recognized for record {record_id}")]
    Unrecognized { record_id: String },
}

/// Load the patient's record map, or `None` (logged) on any failure.
pub fn fetch_record_ids(client: &ApiClient, patient_id: &str) -> Option<SpecificMedicalRecordIds> {
    match universal::by_patient(client, patient_id) {
        Ok(record) => Some(record.specific_medical_records_ids),
        Err(e) => {
            error!(patient_id, error = %e, "failed to load record map");
            None
        }
    }
}

/// Match `record_id` against the map in neuro → cardio → trauma order.
pub fn classify(ids: &SpecificMedicalRecordIds, record_id: &str) -> Option<RecordType> {
    ids.classify(record_id)
}

pub fn resolve(
    client: &ApiClient,
    patient_id: &str,
    record_id: &str,
) -> Result<RecordType, ResolveError> {
    let ids = universal::by_patient(client, patient_id)
        .inspect_err(|e| error!(patient_id, error = %e, "failed to load record map"))?
        .specific_medical_records_ids;

    classify(&ids, record_id).ok_or_else(|| ResolveError::Unrecognized {
        record_id: record_id.to_string(),
    })
}
