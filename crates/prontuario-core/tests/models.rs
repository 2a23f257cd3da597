use prontuario_core::api_paths;
use prontuario_core::models::record_type::RecordType;
use prontuario_core::models::records::{
    CardiorespiratoryRecord, SpecificRecord, StoredRecord,
};
use prontuario_core::models::role::Role;
use prontuario_core::models::universal::{SpecificMedicalRecordIds, UniversalMedicalRecord};
use serde_json::json;

#[test]
fn role_parses_case_insensitively() {
    assert_eq!("Clinician".parse::<Role>().unwrap(), Role::Clinician);
    assert_eq!(" patient ".parse::<Role>().unwrap(), Role::Patient);
    assert!("admin".parse::<Role>().is_err());
    assert!("".parse::<Role>().is_err());
}

#[test]
fn registration_path_follows_role() {
    assert_eq!(api_paths::register(Role::Patient), "/patients");
    assert_eq!(api_paths::register(Role::Clinician), "/clinicians");
    assert_eq!(api_paths::login(Role::Clinician), "/auth/clinician");
}

#[test]
fn create_path_includes_patient_and_clinician() {
    assert_eq!(
        api_paths::create_specific_record(RecordType::Cardiorespiratory, "p1", "c1"),
        "/cardiorespiratory-record/patient-id/p1/clinician-id/c1"
    );
    assert_eq!(
        api_paths::request_access("p1", RecordType::TraumaOrthopedic),
        "/manage-access/request-access-by-patient-id/p1?recordType=traumaOrthopedic"
    );
}

#[test]
fn classify_uses_neuro_cardio_trauma_precedence() {
    let ids = SpecificMedicalRecordIds {
        neurofunctional_record: Some("same".to_string()),
        cardiorespiratory_record: Some("same".to_string()),
        trauma_orthopedic_record: Some("t".to_string()),
    };
    assert_eq!(ids.classify("same"), Some(RecordType::Neurofunctional));
    assert_eq!(ids.classify("t"), Some(RecordType::TraumaOrthopedic));
    assert_eq!(ids.classify("missing"), None);
    assert_eq!(ids.classify(""), None);
}

#[test]
fn universal_record_reads_backend_shape() {
    let record: UniversalMedicalRecord = serde_json::from_value(json!({
        "id": "u1",
        "patientId": "p1",
        "profession": "Teacher",
        "allergies": ["penicillin"],
        "height": 172.0,
        "weight": 70.5,
        "specificMedicalRecordsIds": {
            "cardiorespiratoryRecord": "c-9"
        }
    }))
    .unwrap();

    assert_eq!(record.profession, "Teacher");
    assert!(record.medications.is_empty());
    assert_eq!(
        record.specific_medical_records_ids.classify("c-9"),
        Some(RecordType::Cardiorespiratory)
    );
}

#[test]
fn blank_cardio_serializes_every_field() {
    let value = SpecificRecord::blank(RecordType::Cardiorespiratory)
        .to_value()
        .unwrap();
    assert_eq!(value["vitalSigns"]["bloodPressure"]["systolic"], json!(0.0));
    assert_eq!(value["anamnesis"]["smoker"], json!(false));
    assert_eq!(value["spirometry"]["fev1FvcRatio"], json!(0.0));
    assert_eq!(value["treatmentPlan"]["conduct"], json!(""));
}

#[test]
fn pascal_case_vital_signs_is_accepted() {
    let record: CardiorespiratoryRecord = serde_json::from_value(json!({
        "VitalSigns": { "bloodPressure": { "systolic": 120.0, "diastolic": 80.0 } }
    }))
    .unwrap();
    assert_eq!(record.vital_signs.blood_pressure.systolic, 120.0);

    let out = serde_json::to_value(&record).unwrap();
    assert!(out.get("vitalSigns").is_some());
    assert!(out.get("VitalSigns").is_none());
}

#[test]
fn stored_record_flattens_body() {
    let stored: StoredRecord<CardiorespiratoryRecord> = serde_json::from_value(json!({
        "id": "r1",
        "patientId": "p1",
        "clinicianId": "c1",
        "functionalCapacity": { "sixMinuteWalkDistance": 410.0 }
    }))
    .unwrap();
    assert_eq!(stored.id, "r1");
    assert_eq!(stored.body.functional_capacity.six_minute_walk_distance, 410.0);
}
