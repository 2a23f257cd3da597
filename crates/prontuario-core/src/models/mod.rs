pub mod clinician;
pub mod patient;
pub mod record_type;
pub mod records;
pub mod role;
pub mod session;
pub mod universal;
