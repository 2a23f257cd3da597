use prontuario_api::endpoints::patients;
use prontuario_auth::storage::SessionStorage;
use prontuario_core::models::patient::Patient;
use prontuario_core::models::role::Role;

use super::{gate, or_dash, universal};
use crate::navigation::Route;
use crate::state::App;

/// The landing page for the logged-in role.
pub fn show<S: SessionStorage>(app: &mut App<S>, patient_id: Option<&str>) -> eyre::Result<String> {
    match app.role() {
        Some(Role::Clinician) => clinician(app),
        Some(Role::Patient) => patient(app, patient_id),
        None => Ok(gate(app, Route::PatientDashboard).unwrap_or_default()),
    }
}

/// Clinician dashboard: every patient the backend lets this clinician see.
pub fn clinician<S: SessionStorage>(app: &mut App<S>) -> eyre::Result<String> {
    if let Some(blocked) = gate(app, Route::ClinicianDashboard) {
        return Ok(blocked);
    }
    let patients = patients::list(&app.client)?;
    Ok(patient_table(&patients))
}

/// Patient dashboard: the patient's own universal record.
pub fn patient<S: SessionStorage>(app: &mut App<S>, patient_id: Option<&str>) -> eyre::Result<String> {
    if let Some(blocked) = gate(app, Route::PatientDashboard) {
        return Ok(blocked);
    }
    let id = match patient_id {
        Some(id) => id.to_string(),
        None => app
            .own_id()
            .ok_or_else(|| eyre::eyre!("could not tell which patient is logged in; pass --patient-id"))?,
    };
    universal::show(app, &id)
}

pub fn patient_table(patients: &[Patient]) -> String {
    if patients.is_empty() {
        return "No patients.\n".to_string();
    }
    let mut out = format!("{} patient(s)\n", patients.len());
    for p in patients {
        out.push_str(&format!(
            "- {} <{}> cpf {} id {}\n",
            p.name,
            p.email,
            or_dash(Some(&p.cpf)),
            p.id
        ));
    }
    out
}
