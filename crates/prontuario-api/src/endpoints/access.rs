use prontuario_core::api_paths;
use prontuario_core::models::record_type::RecordType;
use tracing::info;

use crate::client::{ApiClient, Auth};
use crate::error::ApiError;
use crate::transport::Method;

/// Ask a patient for access to one of their records. A request that
/// already exists comes back as `ApiError::Conflict`.
pub fn request_access(
    client: &ApiClient,
    patient_id: &str,
    record_type: RecordType,
) -> Result<(), ApiError> {
    info!(patient_id, record_type = %record_type, "requesting record access");
    client.request::<()>(
        Method::Post,
        &api_paths::request_access(patient_id, record_type),
        None,
        Auth::Bearer,
    )?;
    Ok(())
}
