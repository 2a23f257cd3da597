use prontuario_api::ApiError;
use prontuario_api::endpoints::access;
use prontuario_auth::storage::SessionStorage;
use prontuario_core::models::record_type::RecordType;

use super::gate;
use crate::navigation::Route;
use crate::state::App;

/// Ask a patient for access to one of their record types. A request that
/// already exists is reported, not treated as a failure.
pub fn request<S: SessionStorage>(
    app: &mut App<S>,
    patient_id: &str,
    record_type: RecordType,
) -> eyre::Result<String> {
    if let Some(blocked) = gate(
        app,
        Route::RequestAccess {
            patient_id: patient_id.to_string(),
        },
    ) {
        return Ok(blocked);
    }
    match access::request_access(&app.client, patient_id, record_type) {
        Ok(()) => Ok(format!(
            "Requested access to the {} record of patient {patient_id}.\n",
            record_type.label()
        )),
        Err(ApiError::Conflict(_)) => Ok(format!(
            "Access to the {} record of patient {patient_id} was already requested.\n",
            record_type.label()
        )),
        Err(e) => Err(e.into()),
    }
}
