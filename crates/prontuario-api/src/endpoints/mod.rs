//! One module per backend resource.

pub mod access;
pub mod auth;
pub mod clinicians;
pub mod patients;
pub mod records;
pub mod universal;
