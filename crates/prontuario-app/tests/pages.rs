mod common;

use std::sync::Arc;

use prontuario_api::transport::{Method, ScriptedTransport};
use prontuario_app::navigation::Route;
use prontuario_app::pages::register::{self, RegisterForm};
use prontuario_app::pages::{access, dashboard, login, records};
use prontuario_core::models::record_type::RecordType;
use prontuario_core::models::records::SpecificRecord;
use prontuario_core::models::role::Role;
use serde_json::json;

fn patient_form() -> RegisterForm {
    RegisterForm {
        role: Some(Role::Patient),
        name: "Ana Souza".to_string(),
        email: "ana@x.org".to_string(),
        password: "secret".to_string(),
        cpf: "12345678900".to_string(),
        birth_date: "1990-04-01".to_string(),
        ..RegisterForm::default()
    }
}

#[test]
fn patient_registration_posts_to_patients_and_goes_to_login() {
    let transport = Arc::new(ScriptedTransport::new().respond(201, json!({ "patient": { "id": "p1" } })));
    let mut app = common::app(&transport);
    let mut form = patient_form();

    let text = register::submit(&mut app, &mut form).unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[0].path, "/patients");
    assert_eq!(requests[0].header("authorization"), None);
    let body = requests[0].json_body().unwrap();
    assert_eq!(body["email"], "ana@x.org");
    assert_eq!(body["birthDate"], "1990-04-01");

    assert_eq!(form, RegisterForm::default());
    assert_eq!(app.navigator.current(), &Route::Login);
    assert!(text.contains("ana@x.org"));
}

#[test]
fn failed_registration_keeps_the_form() {
    let transport = Arc::new(
        ScriptedTransport::new().respond(409, json!({ "message": "email already in use" })),
    );
    let mut app = common::app(&transport);
    let mut form = patient_form();

    let err = register::submit(&mut app, &mut form).unwrap_err();
    assert!(err.to_string().contains("email already in use"));
    assert_eq!(form, patient_form());
    assert_eq!(app.navigator.current(), &Route::Register);
}

#[test]
fn registration_without_role_makes_no_request() {
    let transport = Arc::new(ScriptedTransport::new());
    let mut app = common::app(&transport);
    let mut form = RegisterForm {
        role: None,
        ..patient_form()
    };

    assert!(register::submit(&mut app, &mut form).is_err());
    assert_eq!(transport.request_count(), 0);
}

#[test]
fn login_lands_on_the_role_dashboard() {
    let token = common::jwt("c1");
    let transport = Arc::new(ScriptedTransport::new().respond(200, json!({ "token": token })));
    let mut app = common::app(&transport);

    let credentials = prontuario_core::models::session::Credentials {
        email: "dr@x.org".to_string(),
        password: "pw".to_string(),
    };
    login::login(&mut app, Role::Clinician, &credentials).unwrap();

    assert_eq!(app.navigator.current(), &Route::ClinicianDashboard);
    assert_eq!(app.own_id().as_deref(), Some("c1"));
    assert!(login::whoami(&app).starts_with("dr@x.org (clinician)\nid: c1\n"));
}

#[test]
fn blank_cardio_record_posts_the_full_schema() {
    let transport = Arc::new(ScriptedTransport::new().respond(
        201,
        json!({ "record": { "id": "r9", "patientId": "p1", "clinicianId": "c1" } }),
    ));
    let mut app = common::logged_in(&transport, Role::Clinician, "c1");
    let sets = vec![
        ("anamnesis.chiefComplaint".to_string(), "Dyspnea".to_string()),
        (
            "treatmentPlan.physiotherapeuticDiagnosis".to_string(),
            "COPD".to_string(),
        ),
    ];

    let text = records::create(&mut app, RecordType::Cardiorespiratory, "p1", None, &sets).unwrap();
    assert!(text.contains("r9"));

    let request = &transport.requests()[0];
    assert_eq!(request.method, Method::Post);
    assert_eq!(
        request.path,
        "/cardiorespiratory-record/patient-id/p1/clinician-id/c1"
    );

    let mut expected = SpecificRecord::blank(RecordType::Cardiorespiratory)
        .to_value()
        .unwrap();
    expected["anamnesis"]["chiefComplaint"] = json!("Dyspnea");
    expected["treatmentPlan"]["physiotherapeuticDiagnosis"] = json!("COPD");
    assert_eq!(request.json_body().unwrap(), expected);
    assert_eq!(expected["vitalSigns"]["bloodPressure"]["systolic"], json!(0.0));
    assert_eq!(expected["spirometry"]["fev1"], json!(0.0));
}

#[test]
fn incomplete_record_is_not_sent() {
    let transport = Arc::new(ScriptedTransport::new());
    let mut app = common::logged_in(&transport, Role::Clinician, "c1");

    let err = records::create(&mut app, RecordType::Neurofunctional, "p1", None, &[]).unwrap_err();
    assert!(err.to_string().contains("anamnesis.chiefComplaint"));
    assert_eq!(transport.request_count(), 0);
}

#[test]
fn edit_puts_the_full_normalized_body() {
    let transport = Arc::new(
        ScriptedTransport::new()
            .respond(
                200,
                json!({ "record": {
                    "id": "r1",
                    "patientId": "p1",
                    "clinicianId": "c1",
                    "anamnesis": { "chiefComplaint": "Dyspnea" },
                    "VitalSigns": { "heartRate": 70.0 },
                    "treatmentPlan": { "physiotherapeuticDiagnosis": "COPD" }
                } }),
            )
            .respond(200, json!({ "record": { "id": "r1" } })),
    );
    let mut app = common::logged_in(&transport, Role::Clinician, "c1");
    let sets = vec![("vitalSigns.respiratoryRate".to_string(), "22".to_string())];

    let text =
        records::edit_typed(&mut app, RecordType::Cardiorespiratory, "p1", "r1", &sets).unwrap();
    assert!(text.contains("Dyspnea"));

    let requests = transport.requests();
    assert_eq!(requests[0].method, Method::Get);
    assert_eq!(requests[0].path, "/cardiorespiratory-record/r1");
    assert_eq!(requests[1].method, Method::Put);
    assert_eq!(requests[1].path, "/cardiorespiratory-record/r1");

    let mut expected = SpecificRecord::blank(RecordType::Cardiorespiratory)
        .to_value()
        .unwrap();
    expected["anamnesis"]["chiefComplaint"] = json!("Dyspnea");
    expected["vitalSigns"]["heartRate"] = json!(70.0);
    expected["vitalSigns"]["respiratoryRate"] = json!(22.0);
    expected["treatmentPlan"]["physiotherapeuticDiagnosis"] = json!("COPD");
    let sent = requests[1].json_body().unwrap();
    assert_eq!(sent, expected);
    assert!(sent.get("VitalSigns").is_none());
}

#[test]
fn repeated_access_request_is_reported() {
    let transport = Arc::new(
        ScriptedTransport::new().respond(409, json!({ "message": "request already exists" })),
    );
    let mut app = common::logged_in(&transport, Role::Clinician, "c1");

    let text = access::request(&mut app, "p1", RecordType::TraumaOrthopedic).unwrap();
    assert!(text.contains("already requested"));
    assert_eq!(
        transport.requests()[0].path,
        "/manage-access/request-access-by-patient-id/p1?recordType=traumaOrthopedic"
    );
}

#[test]
fn clinician_dashboard_lists_patients() {
    let transport = Arc::new(ScriptedTransport::new().respond(
        200,
        json!({ "patients": [
            { "id": "p1", "name": "Ana", "email": "ana@x.org", "cpf": "123" },
            { "id": "p2", "name": "Bruno", "email": "bruno@x.org", "cpf": "" }
        ] }),
    ));
    let mut app = common::logged_in(&transport, Role::Clinician, "c1");

    let text = dashboard::show(&mut app, None).unwrap();
    assert!(text.starts_with("2 patient(s)\n"));
    assert!(text.contains("- Ana <ana@x.org> cpf 123 id p1\n"));
    assert!(text.contains("- Bruno <bruno@x.org> cpf - id p2\n"));
    assert_eq!(
        transport.requests()[0].header("Authorization"),
        Some(format!("Bearer {}", common::jwt("c1")).as_str())
    );
}

#[test]
fn patient_dashboard_shows_own_universal_record() {
    let transport = Arc::new(ScriptedTransport::new().respond(
        200,
        json!({ "record": {
            "id": "u1",
            "patientId": "p1",
            "profession": "Teacher",
            "height": 170.0,
            "allergies": ["penicillin"],
            "specificMedicalRecordsIds": { "cardiorespiratoryRecord": "r1" }
        } }),
    ));
    let mut app = common::logged_in(&transport, Role::Patient, "p1");

    let text = dashboard::show(&mut app, None).unwrap();
    assert_eq!(
        transport.requests()[0].path,
        "/universal-medical-record/patient-id/p1"
    );
    assert!(text.contains("- Profession: Teacher\n"));
    assert!(text.contains("- Height: 170 cm\n"));
    assert!(text.contains("- Weight: -\n"));
    assert!(text.contains("- Allergies: penicillin\n"));
    assert!(text.contains(": r1\n"));
}
