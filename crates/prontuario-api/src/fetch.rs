//! Entity fetch hooks.
//!
//! Each hook holds the last requested ID and the outcome of loading it.
//! `Idle → Loading → Loaded | Failed`, re-entering `Loading` whenever a
//! different ID is set. No caching across hooks and no request dedupe.

use prontuario_core::api_paths::{self, envelope};
use prontuario_core::models::clinician::Clinician;
use prontuario_core::models::patient::Patient;
use prontuario_core::models::universal::UniversalMedicalRecord;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::client::ApiClient;
use crate::error::ApiError;

/// A resource that can be loaded by ID with one authorized GET.
pub trait Entity: DeserializeOwned {
    const NAME: &'static str;
    const ENVELOPE: &'static str;

    fn path(id: &str) -> String;
}

impl Entity for Patient {
    const NAME: &'static str = "patient";
    const ENVELOPE: &'static str = envelope::PATIENT;

    fn path(id: &str) -> String {
        api_paths::patient(id)
    }
}

impl Entity for Clinician {
    const NAME: &'static str = "clinician";
    const ENVELOPE: &'static str = envelope::CLINICIAN;

    fn path(id: &str) -> String {
        api_paths::clinician(id)
    }
}

impl Entity for UniversalMedicalRecord {
    const NAME: &'static str = "universal medical record";
    const ENVELOPE: &'static str = envelope::RECORD;

    fn path(id: &str) -> String {
        api_paths::universal_record(id)
    }
}

#[derive(Debug)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(ApiError),
}

#[derive(Debug)]
pub struct EntityFetch<T: Entity> {
    id: Option<String>,
    state: FetchState<T>,
}

pub type PatientFetch = EntityFetch<Patient>;
pub type ClinicianFetch = EntityFetch<Clinician>;
pub type UniversalRecordFetch = EntityFetch<UniversalMedicalRecord>;

impl<T: Entity> Default for EntityFetch<T> {
    fn default() -> Self {
        Self {
            id: None,
            state: FetchState::Idle,
        }
    }
}

impl<T: Entity> EntityFetch<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the hook its ID input.
    ///
    /// `None` never issues a request and leaves the current state alone.
    /// An ID equal to the last one is a no-op. Any other ID issues exactly
    /// one GET.
    pub fn set_id(&mut self, client: &ApiClient, id: Option<&str>) -> &FetchState<T> {
        let Some(id) = id else {
            return &self.state;
        };
        if self.id.as_deref() == Some(id) {
            return &self.state;
        }

        self.id = Some(id.to_string());
        self.state = FetchState::Loading;
        self.state = match client.get::<T>(&T::path(id), T::ENVELOPE) {
            Ok(value) => FetchState::Loaded(value),
            Err(e) => {
                warn!(entity = T::NAME, id, error = %e, "fetch failed");
                FetchState::Failed(e)
            }
        };
        &self.state
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub fn value(&self) -> Option<&T> {
        match &self.state {
            FetchState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match &self.state {
            FetchState::Failed(e) => Some(e),
            _ => None,
        }
    }
}
