use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown role: {0}")]
    UnknownRole(String),

    #[error("unknown record type: {0}")]
    UnknownRecordType(String),
}
