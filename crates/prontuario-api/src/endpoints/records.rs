//! Create, read and update the three specific record types.
//!
//! Bodies travel as JSON objects so the schema-driven form engine can
//! produce them; [`SpecificRecord`] gives the typed view.

use prontuario_core::api_paths::{self, envelope};
use prontuario_core::models::record_type::RecordType;
use prontuario_core::models::records::{SpecificRecord, StoredRecord};
use serde_json::{Map, Value};
use tracing::info;

use crate::client::ApiClient;
use crate::error::ApiError;

pub type RecordBody = Map<String, Value>;

pub fn create(
    client: &ApiClient,
    record_type: RecordType,
    patient_id: &str,
    clinician_id: &str,
    body: &Value,
) -> Result<StoredRecord<RecordBody>, ApiError> {
    info!(record_type = %record_type, patient_id, clinician_id, "creating record");
    client.post(
        &api_paths::create_specific_record(record_type, patient_id, clinician_id),
        body,
        envelope::RECORD,
    )
}

pub fn get(
    client: &ApiClient,
    record_type: RecordType,
    id: &str,
) -> Result<StoredRecord<RecordBody>, ApiError> {
    client.get(&api_paths::specific_record(record_type, id), envelope::RECORD)
}

pub fn get_typed(
    client: &ApiClient,
    record_type: RecordType,
    id: &str,
) -> Result<SpecificRecord, ApiError> {
    let stored = get(client, record_type, id)?;
    Ok(SpecificRecord::from_value(
        record_type,
        Value::Object(stored.body),
    )?)
}

/// Replace the stored body. The full body is always sent.
pub fn update(
    client: &ApiClient,
    record_type: RecordType,
    id: &str,
    body: &Value,
) -> Result<StoredRecord<RecordBody>, ApiError> {
    info!(record_type = %record_type, id, "updating record");
    client.put(
        &api_paths::specific_record(record_type, id),
        body,
        envelope::RECORD,
    )
}
