//! The patient's universal record ("prontuario").

use prontuario_api::ApiError;
use prontuario_api::endpoints::universal;
use prontuario_auth::storage::SessionStorage;
use prontuario_core::models::universal::UniversalMedicalRecord;

use super::{gate, or_dash};
use crate::navigation::Route;
use crate::state::App;

/// Replacements for the record's fields. List fields replace the whole
/// list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UniversalChanges {
    pub profession: Option<String>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub allergies: Option<Vec<String>>,
    pub medications: Option<Vec<String>>,
    pub diagnoses: Option<Vec<String>>,
    pub emergency_name: Option<String>,
    pub emergency_phone: Option<String>,
    pub emergency_relationship: Option<String>,
}

impl UniversalChanges {
    pub fn apply(&self, record: &mut UniversalMedicalRecord) {
        if let Some(v) = &self.profession {
            record.profession = v.clone();
        }
        if let Some(v) = self.height {
            record.height = v;
        }
        if let Some(v) = self.weight {
            record.weight = v;
        }
        if let Some(v) = &self.allergies {
            record.allergies = v.clone();
        }
        if let Some(v) = &self.medications {
            record.medications = v.clone();
        }
        if let Some(v) = &self.diagnoses {
            record.diagnoses = v.clone();
        }
        if let Some(v) = &self.emergency_name {
            record.emergency_contact.name = v.clone();
        }
        if let Some(v) = &self.emergency_phone {
            record.emergency_contact.phone = v.clone();
        }
        if let Some(v) = &self.emergency_relationship {
            record.emergency_contact.relationship = v.clone();
        }
    }
}

pub fn show<S: SessionStorage>(app: &mut App<S>, patient_id: &str) -> eyre::Result<String> {
    if let Some(blocked) = gate(app, route(patient_id)) {
        return Ok(blocked);
    }
    match universal::by_patient(&app.client, patient_id) {
        Ok(record) => Ok(render(&record)),
        Err(ApiError::NotFound(_)) => Ok(format!(
            "Patient {patient_id} has no universal record yet.\n"
        )),
        Err(e) => Err(e.into()),
    }
}

/// Load the patient's record, apply `changes` and PUT the whole record.
pub fn edit<S: SessionStorage>(
    app: &mut App<S>,
    patient_id: &str,
    changes: &UniversalChanges,
) -> eyre::Result<String> {
    if let Some(blocked) = gate(app, route(patient_id)) {
        return Ok(blocked);
    }
    let mut record = universal::by_patient(&app.client, patient_id)?;
    let id = record
        .id
        .clone()
        .ok_or_else(|| eyre::eyre!("universal record for patient {patient_id} has no id"))?;
    changes.apply(&mut record);
    let saved = universal::update(&app.client, &id, &record)?;
    Ok(render(&saved))
}

pub fn create<S: SessionStorage>(
    app: &mut App<S>,
    patient_id: &str,
    changes: &UniversalChanges,
) -> eyre::Result<String> {
    if let Some(blocked) = gate(app, route(patient_id)) {
        return Ok(blocked);
    }
    let mut record = UniversalMedicalRecord::default();
    changes.apply(&mut record);
    let saved = universal::create(&app.client, patient_id, &record)?;
    Ok(render(&saved))
}

fn route(patient_id: &str) -> Route {
    Route::UniversalRecord {
        patient_id: patient_id.to_string(),
    }
}

fn list(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

fn number(value: f64, unit: &str) -> String {
    if value == 0.0 {
        "-".to_string()
    } else {
        format!("{value} {unit}")
    }
}

pub fn render(record: &UniversalMedicalRecord) -> String {
    let mut out = String::from("## Universal medical record\n");
    if let Some(id) = &record.id {
        out.push_str(&format!("- ID: {id}\n"));
    }
    out.push_str(&format!("- Profession: {}\n", or_dash(Some(&record.profession))));
    out.push_str(&format!("- Height: {}\n", number(record.height, "cm")));
    out.push_str(&format!("- Weight: {}\n", number(record.weight, "kg")));
    out.push_str(&format!("- Allergies: {}\n", list(&record.allergies)));
    out.push_str(&format!("- Medications: {}\n", list(&record.medications)));
    out.push_str(&format!("- Diagnoses: {}\n", list(&record.diagnoses)));

    let contact = &record.emergency_contact;
    out.push_str(&format!(
        "- Emergency contact: {} {} {}\n",
        or_dash(Some(&contact.name)),
        or_dash(Some(&contact.phone)),
        or_dash(Some(&contact.relationship))
    ));

    out.push_str("### Specific records\n");
    let present = record.specific_medical_records_ids.present();
    if present.is_empty() {
        out.push_str("- none\n");
    }
    for (record_type, id) in present {
        out.push_str(&format!("- {}: {id}\n", record_type.label()));
    }
    out
}
