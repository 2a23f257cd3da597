//! Client-side routes. Every ID a destination needs travels inside its
//! `Route`; there is no shared "currently selected" state.

use std::fmt;

use prontuario_api::ApiClient;
use prontuario_api::resolver::{self, ResolveError};
use prontuario_core::models::record_type::RecordType;
use prontuario_core::models::role::Role;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    ClinicianDashboard,
    PatientDashboard,
    PatientDetails {
        patient_id: String,
    },
    ClinicianDetails {
        clinician_id: String,
    },
    UniversalRecord {
        patient_id: String,
    },
    RecordCreate {
        record_type: RecordType,
        patient_id: String,
        clinician_id: String,
    },
    RecordView {
        record_type: RecordType,
        record_id: String,
        patient_id: String,
    },
    RecordEdit {
        record_type: RecordType,
        record_id: String,
        patient_id: String,
    },
    RequestAccess {
        patient_id: String,
    },
}

/// Who may open a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    Anyone,
    /// Any logged-in user; the backend decides what they may read.
    Authenticated,
    Only(Role),
}

impl Route {
    pub fn audience(&self) -> Audience {
        match self {
            Route::Login | Route::Register => Audience::Anyone,
            Route::ClinicianDashboard
            | Route::PatientDetails { .. }
            | Route::RecordCreate { .. }
            | Route::RequestAccess { .. } => Audience::Only(Role::Clinician),
            Route::PatientDashboard => Audience::Only(Role::Patient),
            Route::ClinicianDetails { .. } | Route::UniversalRecord { .. } => {
                Audience::Authenticated
            }
            Route::RecordView { .. } => RecordMode::View.audience(),
            Route::RecordEdit { .. } => RecordMode::Edit.audience(),
        }
    }

    /// Landing page after login.
    pub fn dashboard(role: Role) -> Self {
        match role {
            Role::Clinician => Route::ClinicianDashboard,
            Role::Patient => Route::PatientDashboard,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Login => write!(f, "/login"),
            Route::Register => write!(f, "/register"),
            Route::ClinicianDashboard => write!(f, "/clinician"),
            Route::PatientDashboard => write!(f, "/patient"),
            Route::PatientDetails { patient_id } => write!(f, "/patients/{patient_id}"),
            Route::ClinicianDetails { clinician_id } => write!(f, "/clinicians/{clinician_id}"),
            Route::UniversalRecord { patient_id } => write!(f, "/patients/{patient_id}/prontuario"),
            Route::RecordCreate {
                record_type,
                patient_id,
                clinician_id,
            } => write!(
                f,
                "/patients/{patient_id}/{}/new?clinician={clinician_id}",
                record_type.slug()
            ),
            Route::RecordView {
                record_type,
                record_id,
                patient_id,
            } => write!(f, "/patients/{patient_id}/{}/{record_id}", record_type.slug()),
            Route::RecordEdit {
                record_type,
                record_id,
                patient_id,
            } => write!(
                f,
                "/patients/{patient_id}/{}/{record_id}/edit",
                record_type.slug()
            ),
            Route::RequestAccess { patient_id } => write!(f, "/patients/{patient_id}/access"),
        }
    }
}

/// Navigation history. Never empty.
#[derive(Debug, Clone)]
pub struct Navigator {
    history: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::Login)
    }
}

impl Navigator {
    pub fn new(start: Route) -> Self {
        Self {
            history: vec![start],
        }
    }

    pub fn current(&self) -> &Route {
        // history always holds at least the start route
        &self.history[self.history.len() - 1]
    }

    pub fn navigate(&mut self, route: Route) {
        debug!(route = %route, "navigate");
        if self.current() != &route {
            self.history.push(route);
        }
    }

    /// Pop the current route. The first route is never popped.
    pub fn back(&mut self) -> &Route {
        if self.history.len() > 1 {
            self.history.pop();
        }
        self.current()
    }

    /// The route `back` would land on.
    pub fn previous(&self) -> Option<&Route> {
        self.history.iter().rev().nth(1)
    }

    /// Drop all history, carried IDs included.
    pub fn reset(&mut self, route: Route) {
        self.history.clear();
        self.history.push(route);
    }

    pub fn history(&self) -> &[Route] {
        &self.history
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordMode {
    View,
    Edit,
}

impl RecordMode {
    /// Same for every record type, so it is known before the type is.
    pub fn audience(self) -> Audience {
        match self {
            RecordMode::View => Audience::Authenticated,
            RecordMode::Edit => Audience::Only(Role::Clinician),
        }
    }
}

/// Route a bare record ID to the view or editor of its record type.
pub fn record_route(
    client: &ApiClient,
    patient_id: &str,
    record_id: &str,
    mode: RecordMode,
) -> Result<Route, ResolveError> {
    let record_type = resolver::resolve(client, patient_id, record_id)?;
    let (record_id, patient_id) = (record_id.to_string(), patient_id.to_string());
    Ok(match mode {
        RecordMode::View => Route::RecordView {
            record_type,
            record_id,
            patient_id,
        },
        RecordMode::Edit => Route::RecordEdit {
            record_type,
            record_id,
            patient_id,
        },
    })
}
