use prontuario_core::api_paths::{self, envelope};
use prontuario_core::models::clinician::NewClinician;
use prontuario_core::models::patient::NewPatient;
use prontuario_core::models::role::Role;
use prontuario_core::models::session::{Credentials, LoginResponse};
use serde_json::Value;
use tracing::info;

use crate::client::{ApiClient, Auth};
use crate::error::ApiError;
use crate::transport::Method;

/// A sign-up payload; the variant decides which collection it posts to.
#[derive(Debug, Clone, PartialEq)]
pub enum Registration {
    Patient(NewPatient),
    Clinician(NewClinician),
}

impl Registration {
    pub fn role(&self) -> Role {
        match self {
            Registration::Patient(_) => Role::Patient,
            Registration::Clinician(_) => Role::Clinician,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Registration::Patient(p) => &p.email,
            Registration::Clinician(c) => &c.email,
        }
    }
}

/// Exchange credentials for an access token.
pub fn login(client: &ApiClient, role: Role, credentials: &Credentials) -> Result<String, ApiError> {
    info!(role = %role, email = %credentials.email, "logging in");
    let value = client.request(
        Method::Post,
        &api_paths::login(role),
        Some(credentials),
        Auth::Public,
    )?;
    if value.get(envelope::TOKEN).is_none() {
        return Err(ApiError::MissingEnvelope(envelope::TOKEN.to_string()));
    }
    let response: LoginResponse = serde_json::from_value(value)?;
    Ok(response.token)
}

/// Create a patient or clinician account.
pub fn register(client: &ApiClient, registration: &Registration) -> Result<(), ApiError> {
    let role = registration.role();
    info!(role = %role, email = %registration.email(), "registering");
    let path = api_paths::register(role);
    let _: Value = match registration {
        Registration::Patient(p) => client.request(Method::Post, &path, Some(p), Auth::Public)?,
        Registration::Clinician(c) => {
            client.request(Method::Post, &path, Some(c), Auth::Public)?
        }
    };
    Ok(())
}
