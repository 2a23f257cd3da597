//! REST path conventions.
//!
//! Pure string functions with no HTTP dependency. These define the paths the
//! backend exposes, relative to the configured base URL.

use crate::models::record_type::RecordType;
use crate::models::role::Role;

pub fn login(role: Role) -> String {
    format!("/auth/{role}")
}

/// Registration posts to the role's collection.
pub fn register(role: Role) -> String {
    format!("/{}", role.collection())
}

pub const PATIENTS: &str = "/patients";

pub fn patient(id: &str) -> String {
    format!("/patients/{id}")
}

pub fn patient_by_cpf(cpf: &str) -> String {
    format!("/patients/cpf/{cpf}")
}

pub const CLINICIANS: &str = "/clinicians";

pub fn clinician(id: &str) -> String {
    format!("/clinicians/{id}")
}

pub fn universal_record(id: &str) -> String {
    format!("/universal-medical-record/{id}")
}

pub fn universal_record_by_patient(patient_id: &str) -> String {
    format!("/universal-medical-record/patient-id/{patient_id}")
}

pub fn specific_record(record_type: RecordType, id: &str) -> String {
    format!("/{}/{id}", record_type.slug())
}

pub fn create_specific_record(
    record_type: RecordType,
    patient_id: &str,
    clinician_id: &str,
) -> String {
    format!(
        "/{}/patient-id/{patient_id}/clinician-id/{clinician_id}",
        record_type.slug()
    )
}

pub fn request_access(patient_id: &str, record_type: RecordType) -> String {
    format!(
        "/manage-access/request-access-by-patient-id/{patient_id}?recordType={}",
        record_type.query_value()
    )
}

/// Response envelope keys.
pub mod envelope {
    pub const TOKEN: &str = "token";
    pub const PATIENTS: &str = "patients";
    pub const PATIENT: &str = "patient";
    pub const CLINICIANS: &str = "clinicians";
    pub const CLINICIAN: &str = "clinician";
    pub const RECORD: &str = "record";
}
