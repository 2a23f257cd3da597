//! Create, view and edit specific records through the form engine.

use prontuario_api::endpoints::records;
use prontuario_api::resolver::ResolveError;
use prontuario_auth::storage::SessionStorage;
use prontuario_core::models::record_type::RecordType;
use prontuario_forms::schema::{FieldError, FieldKind};
use prontuario_forms::{RecordForm, form_for};
use serde_json::Value;
use tracing::info;

use super::{gate, precheck};
use crate::navigation::{RecordMode, Route, record_route};
use crate::state::App;

/// Parse `path=value`.
pub fn parse_assignment(raw: &str) -> eyre::Result<(String, String)> {
    let (path, value) = raw
        .split_once('=')
        .ok_or_else(|| eyre::eyre!("expected path=value, got '{raw}'"))?;
    let path = path.trim();
    if path.is_empty() {
        return Err(eyre::eyre!("missing field path in '{raw}'"));
    }
    Ok((path.to_string(), value.to_string()))
}

/// List the fields a record type accepts.
pub fn fields(record_type: RecordType) -> String {
    let form = form_for(record_type);
    let mut out = format!("## {}\n", form.name());
    for section in form.sections() {
        out.push_str(&format!("### {}\n", section.name));
        for field in &section.fields {
            let kind = match field.kind {
                FieldKind::Text => "text",
                FieldKind::LongText => "long text",
                FieldKind::Number => "number",
                FieldKind::Boolean => "yes/no",
                FieldKind::Choice => "choice",
            };
            out.push_str(&format!("- {} ({kind}", field.path));
            if field.required {
                out.push_str(", required");
            }
            if let Some(range) = field.range {
                out.push_str(&format!(", {}..={}", range.min, range.max));
            }
            if let Some(unit) = &field.unit {
                out.push_str(&format!(", {unit}"));
            }
            out.push(')');
            if !field.choices.is_empty() {
                out.push_str(&format!(": {}", field.choices.join(" | ")));
            }
            out.push_str(&format!("  {}\n", field.label));
        }
    }
    out
}

fn apply(form: &dyn RecordForm, body: &mut Value, sets: &[(String, String)]) -> eyre::Result<()> {
    for (path, raw) in sets {
        form.set_field(body, path, raw)?;
    }
    Ok(())
}

fn check(errors: Vec<FieldError>) -> eyre::Result<()> {
    if errors.is_empty() {
        return Ok(());
    }
    let lines: Vec<String> = errors.iter().map(|e| format!("  {}: {e}", e.path)).collect();
    Err(eyre::eyre!("the record has invalid fields:\n{}", lines.join("\n")))
}

/// Build a full body from the blank form plus `sets`, validate it and
/// POST it. The clinician defaults to the logged-in user.
pub fn create<S: SessionStorage>(
    app: &mut App<S>,
    record_type: RecordType,
    patient_id: &str,
    clinician_id: Option<&str>,
    sets: &[(String, String)],
) -> eyre::Result<String> {
    let clinician_id = match clinician_id {
        Some(id) => id.to_string(),
        None => app.own_id().unwrap_or_default(),
    };
    if let Some(blocked) = gate(
        app,
        Route::RecordCreate {
            record_type,
            patient_id: patient_id.to_string(),
            clinician_id: clinician_id.clone(),
        },
    ) {
        return Ok(blocked);
    }
    if clinician_id.is_empty() {
        return Err(eyre::eyre!(
            "could not tell which clinician is logged in; pass --clinician-id"
        ));
    }

    let form = form_for(record_type);
    let mut body = form.blank_body();
    apply(form.as_ref(), &mut body, sets)?;
    check(form.validate(&body))?;

    let stored = records::create(&app.client, record_type, patient_id, &clinician_id, &body)?;
    info!(record_type = %record_type, id = %stored.id, "record created");
    Ok(format!(
        "Created {} record {}.\n",
        record_type.label(),
        stored.id
    ))
}

/// Resolve a bare record ID through the patient's record map.
fn resolve<S: SessionStorage>(
    app: &App<S>,
    patient_id: &str,
    record_id: &str,
    mode: RecordMode,
) -> eyre::Result<Route> {
    match record_route(&app.client, patient_id, record_id, mode) {
        Ok(route) => Ok(route),
        Err(e @ ResolveError::Unrecognized { .. }) => Err(eyre::eyre!("{e}")),
        Err(ResolveError::Lookup(e)) => Err(eyre::eyre!(
            "could not load the record map for patient {patient_id}: {e}"
        )),
    }
}

/// Load a stored record as a full body in its canonical shape.
fn load_body<S: SessionStorage>(
    app: &App<S>,
    record_type: RecordType,
    record_id: &str,
) -> eyre::Result<Value> {
    let record = records::get_typed(&app.client, record_type, record_id)?;
    Ok(record.to_value()?)
}

pub fn view<S: SessionStorage>(
    app: &mut App<S>,
    patient_id: &str,
    record_id: &str,
) -> eyre::Result<String> {
    if let Some(blocked) = precheck(app, RecordMode::View.audience()) {
        return Ok(blocked);
    }
    let route = resolve(app, patient_id, record_id, RecordMode::View)?;
    let Route::RecordView { record_type, .. } = &route else {
        return Err(eyre::eyre!("unexpected route {route}"));
    };
    view_typed(app, *record_type, patient_id, record_id)
}

pub fn view_typed<S: SessionStorage>(
    app: &mut App<S>,
    record_type: RecordType,
    patient_id: &str,
    record_id: &str,
) -> eyre::Result<String> {
    if let Some(blocked) = gate(
        app,
        Route::RecordView {
            record_type,
            record_id: record_id.to_string(),
            patient_id: patient_id.to_string(),
        },
    ) {
        return Ok(blocked);
    }
    let body = load_body(app, record_type, record_id)?;
    Ok(form_for(record_type).render(&body))
}

/// Load the stored body, apply `sets` and PUT the whole body back.
pub fn edit<S: SessionStorage>(
    app: &mut App<S>,
    patient_id: &str,
    record_id: &str,
    sets: &[(String, String)],
) -> eyre::Result<String> {
    if let Some(blocked) = precheck(app, RecordMode::Edit.audience()) {
        return Ok(blocked);
    }
    let route = resolve(app, patient_id, record_id, RecordMode::Edit)?;
    let Route::RecordEdit { record_type, .. } = &route else {
        return Err(eyre::eyre!("unexpected route {route}"));
    };
    edit_typed(app, *record_type, patient_id, record_id, sets)
}

pub fn edit_typed<S: SessionStorage>(
    app: &mut App<S>,
    record_type: RecordType,
    patient_id: &str,
    record_id: &str,
    sets: &[(String, String)],
) -> eyre::Result<String> {
    if let Some(blocked) = gate(
        app,
        Route::RecordEdit {
            record_type,
            record_id: record_id.to_string(),
            patient_id: patient_id.to_string(),
        },
    ) {
        return Ok(blocked);
    }
    let form = form_for(record_type);
    let mut body = load_body(app, record_type, record_id)?;
    apply(form.as_ref(), &mut body, sets)?;
    check(form.validate(&body))?;

    records::update(&app.client, record_type, record_id, &body)?;
    Ok(form.render(&body))
}
