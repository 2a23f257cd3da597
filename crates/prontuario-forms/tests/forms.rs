use prontuario_core::models::record_type::RecordType;
use prontuario_core::models::records::{
    CardiorespiratoryRecord, NeurofunctionalRecord, SpecificRecord,
};
use prontuario_forms::error::FormError;
use prontuario_forms::{all_forms, form_for};
use serde_json::json;

#[test]
fn blank_body_matches_typed_defaults_for_every_type() {
    for form in all_forms() {
        let typed = SpecificRecord::blank(form.record_type()).to_value().unwrap();
        assert_eq!(
            form.blank_body(),
            typed,
            "{} schema drifted from its typed record",
            form.name()
        );
    }
}

#[test]
fn registry_follows_resolver_precedence() {
    let types: Vec<_> = all_forms().iter().map(|f| f.record_type()).collect();
    assert_eq!(types, RecordType::PRECEDENCE.to_vec());
}

#[test]
fn field_paths_are_unique_per_form() {
    for form in all_forms() {
        let mut paths: Vec<_> = form.fields().iter().map(|f| f.path.clone()).collect();
        let total = paths.len();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), total, "{} has duplicate paths", form.name());
    }
}

#[test]
fn set_field_parses_by_kind() {
    let form = form_for(RecordType::Cardiorespiratory);
    let mut body = form.blank_body();

    form.set_field(&mut body, "vitalSigns.heartRate", "72").unwrap();
    form.set_field(&mut body, "spirometry.fev1", "2,85").unwrap();
    form.set_field(&mut body, "anamnesis.smoker", "sim").unwrap();
    form.set_field(&mut body, "chestExam.thoraxType", "Barrel").unwrap();

    assert_eq!(body["vitalSigns"]["heartRate"], json!(72.0));
    assert_eq!(body["spirometry"]["fev1"], json!(2.85));
    assert_eq!(body["anamnesis"]["smoker"], json!(true));
    assert_eq!(body["chestExam"]["thoraxType"], json!("barrel"));

    let record: CardiorespiratoryRecord = serde_json::from_value(body).unwrap();
    assert_eq!(record.vital_signs.heart_rate, 72.0);
}

#[test]
fn set_field_rejects_bad_input() {
    let form = form_for(RecordType::Cardiorespiratory);
    let mut body = form.blank_body();

    assert!(matches!(
        form.set_field(&mut body, "vitalSigns.heartRate", "fast"),
        Err(FormError::InvalidValue { .. })
    ));
    assert!(matches!(
        form.set_field(&mut body, "chestExam.thoraxType", "round"),
        Err(FormError::InvalidValue { .. })
    ));
    assert!(matches!(
        form.set_field(&mut body, "consciousness.glasgowComaScale", "15"),
        Err(FormError::UnknownField { .. })
    ));
}

#[test]
fn blank_body_only_fails_required_fields() {
    let form = form_for(RecordType::Neurofunctional);
    let errors = form.validate(&form.blank_body());
    let paths: Vec<_> = errors.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(
        paths,
        vec!["anamnesis.chiefComplaint", "treatmentPlan.physiotherapeuticDiagnosis"]
    );
}

#[test]
fn out_of_range_numbers_are_reported() {
    let form = form_for(RecordType::Neurofunctional);
    let mut body = form.blank_body();
    form.set_field(&mut body, "anamnesis.chiefComplaint", "Hemiparesis").unwrap();
    form.set_field(&mut body, "treatmentPlan.physiotherapeuticDiagnosis", "Post-stroke").unwrap();
    form.set_field(&mut body, "consciousness.glasgowComaScale", "2").unwrap();

    let errors = form.validate(&body);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].path, "consciousness.glasgowComaScale");

    form.set_field(&mut body, "consciousness.glasgowComaScale", "14").unwrap();
    assert!(form.validate(&body).is_empty());

    let record: NeurofunctionalRecord = serde_json::from_value(body).unwrap();
    assert_eq!(record.consciousness.glasgow_coma_scale, 14.0);
}

#[test]
fn render_lists_sections_and_values() {
    let form = form_for(RecordType::TraumaOrthopedic);
    let mut body = form.blank_body();
    form.set_field(&mut body, "pain.intensity", "7").unwrap();
    form.set_field(&mut body, "rangeOfMotion.flexion", "95").unwrap();
    form.set_field(&mut body, "inspection.edema", "yes").unwrap();

    let text = form.render(&body);
    assert!(text.starts_with("## Trauma-orthopedic assessment"));
    assert!(text.contains("### Pain\n- Intensity (VAS): 7\n"));
    assert!(text.contains("- Flexion: 95 °"));
    assert!(text.contains("- Edema: yes"));
    assert!(text.contains("- Chief complaint: -"));
}
