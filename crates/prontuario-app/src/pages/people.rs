use prontuario_api::endpoints::{clinicians, patients};
use prontuario_api::fetch::{ClinicianFetch, FetchState, PatientFetch};
use prontuario_auth::storage::SessionStorage;
use prontuario_core::models::clinician::Clinician;
use prontuario_core::models::patient::Patient;

use super::{gate, or_dash};
use crate::navigation::Route;
use crate::state::App;

/// Optional replacements for a person's editable contact fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactChanges {
    pub name: Option<String>,
    pub phone: Option<String>,
}

impl ContactChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none()
    }
}

pub fn patient_details<S: SessionStorage>(app: &mut App<S>, patient_id: &str) -> eyre::Result<String> {
    if let Some(blocked) = gate(
        app,
        Route::PatientDetails {
            patient_id: patient_id.to_string(),
        },
    ) {
        return Ok(blocked);
    }

    let mut fetch = PatientFetch::new();
    match fetch.set_id(&app.client, Some(patient_id)) {
        FetchState::Loaded(patient) => Ok(render_patient(patient)),
        FetchState::Failed(e) => Err(eyre::eyre!("could not load patient {patient_id}: {e}")),
        FetchState::Idle | FetchState::Loading => Ok(String::new()),
    }
}

/// Look a patient up by CPF, then show their details.
pub fn patient_by_cpf<S: SessionStorage>(app: &mut App<S>, cpf: &str) -> eyre::Result<String> {
    if let Some(blocked) = gate(app, Route::ClinicianDashboard) {
        return Ok(blocked);
    }
    let patient = patients::get_by_cpf(&app.client, cpf)?;
    app.open(Route::PatientDetails {
        patient_id: patient.id.clone(),
    });
    Ok(render_patient(&patient))
}

pub fn edit_patient<S: SessionStorage>(
    app: &mut App<S>,
    patient_id: &str,
    changes: &ContactChanges,
) -> eyre::Result<String> {
    if let Some(blocked) = gate(
        app,
        Route::PatientDetails {
            patient_id: patient_id.to_string(),
        },
    ) {
        return Ok(blocked);
    }
    let mut patient = patients::get(&app.client, patient_id)?;
    if let Some(name) = &changes.name {
        patient.name = name.clone();
    }
    if let Some(phone) = &changes.phone {
        patient.phone = Some(phone.clone());
    }
    let saved = patients::update(&app.client, &patient)?;
    Ok(render_patient(&saved))
}

pub fn clinician_details<S: SessionStorage>(
    app: &mut App<S>,
    clinician_id: &str,
) -> eyre::Result<String> {
    if let Some(blocked) = gate(
        app,
        Route::ClinicianDetails {
            clinician_id: clinician_id.to_string(),
        },
    ) {
        return Ok(blocked);
    }

    let mut fetch = ClinicianFetch::new();
    fetch.set_id(&app.client, Some(clinician_id));
    if let Some(e) = fetch.error() {
        return Err(eyre::eyre!("could not load clinician {clinician_id}: {e}"));
    }
    Ok(fetch.value().map(render_clinician).unwrap_or_default())
}

pub fn edit_clinician<S: SessionStorage>(
    app: &mut App<S>,
    clinician_id: &str,
    changes: &ContactChanges,
) -> eyre::Result<String> {
    if let Some(blocked) = gate(
        app,
        Route::ClinicianDetails {
            clinician_id: clinician_id.to_string(),
        },
    ) {
        return Ok(blocked);
    }
    let mut clinician = clinicians::get(&app.client, clinician_id)?;
    if let Some(name) = &changes.name {
        clinician.name = name.clone();
    }
    if let Some(phone) = &changes.phone {
        clinician.phone = Some(phone.clone());
    }
    let saved = clinicians::update(&app.client, &clinician)?;
    Ok(render_clinician(&saved))
}

pub fn render_patient(patient: &Patient) -> String {
    let mut out = format!("## {}\n", patient.name);
    out.push_str(&format!("- ID: {}\n", patient.id));
    out.push_str(&format!("- Email: {}\n", patient.email));
    out.push_str(&format!("- CPF: {}\n", or_dash(Some(&patient.cpf))));
    out.push_str(&format!("- Phone: {}\n", or_dash(patient.phone.as_deref())));
    out.push_str(&format!(
        "- Birth date: {}\n",
        or_dash(patient.birth_date.as_deref())
    ));
    out.push_str(&format!("- Gender: {}\n", or_dash(patient.gender.as_deref())));
    if let Some(address) = &patient.address {
        out.push_str(&format!(
            "- Address: {} {}, {} {} {}\n",
            address.street, address.number, address.city, address.state, address.zip_code
        ));
    }
    out
}

pub fn render_clinician(clinician: &Clinician) -> String {
    let mut out = format!("## {}\n", clinician.name);
    out.push_str(&format!("- ID: {}\n", clinician.id));
    out.push_str(&format!("- Email: {}\n", clinician.email));
    out.push_str(&format!("- CPF: {}\n", or_dash(clinician.cpf.as_deref())));
    out.push_str(&format!("- CREFITO: {}\n", or_dash(clinician.crefito.as_deref())));
    out.push_str(&format!(
        "- Specialty: {}\n",
        or_dash(clinician.specialty.as_deref())
    ));
    out.push_str(&format!("- Phone: {}\n", or_dash(clinician.phone.as_deref())));
    out
}
