use prontuario_core::models::record_type::RecordType;
use thiserror::Error;

use crate::schema::FieldError;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("unknown field '{path}' for {record_type} record")]
    UnknownField {
        record_type: RecordType,
        path: String,
    },

    #[error("invalid value '{value}' for '{path}': expected {expected}")]
    InvalidValue {
        path: String,
        value: String,
        expected: String,
    },

    #[error("validation failed: {0}")]
    Validation(#[from] FieldError),

    #[error("record body is not a JSON object")]
    NotAnObject,
}
