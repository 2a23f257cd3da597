use std::sync::Arc;

use prontuario_api::resolver::{self, ResolveError};
use prontuario_api::transport::ScriptedTransport;
use prontuario_api::ApiClient;
use prontuario_core::models::record_type::RecordType;
use serde_json::json;

fn client(transport: &Arc<ScriptedTransport>) -> ApiClient {
    ApiClient::with_transport(transport.clone(), Arc::new(|| Some("tok".to_string())))
}

fn record_map(ids: serde_json::Value) -> serde_json::Value {
    json!({ "record": { "id": "u1", "patientId": "p1", "specificMedicalRecordsIds": ids } })
}

#[test]
fn resolves_cardio_record() {
    let transport = Arc::new(ScriptedTransport::new().respond(
        200,
        record_map(json!({ "neurofunctionalRecord": "n1", "cardiorespiratoryRecord": "c1" })),
    ));
    let client = client(&transport);

    let record_type = resolver::resolve(&client, "p1", "c1").unwrap();
    assert_eq!(record_type, RecordType::Cardiorespiratory);
    assert_eq!(
        transport.requests()[0].path,
        "/universal-medical-record/patient-id/p1"
    );
}

#[test]
fn unknown_record_is_an_explicit_error() {
    let transport = Arc::new(
        ScriptedTransport::new().respond(200, record_map(json!({ "traumaOrthopedicRecord": "t1" }))),
    );
    let client = client(&transport);

    match resolver::resolve(&client, "p1", "zzz") {
        Err(ResolveError::Unrecognized { record_id }) => assert_eq!(record_id, "zzz"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn lookup_failure_returns_none_without_retry() {
    let transport = Arc::new(ScriptedTransport::new().respond(401, json!({ "message": "expired" })));
    let client = client(&transport);

    assert!(resolver::fetch_record_ids(&client, "p1").is_none());
    assert_eq!(transport.request_count(), 1);
}

#[test]
fn lookup_failure_is_distinguished_from_unrecognized() {
    let transport = Arc::new(ScriptedTransport::new().respond(500, json!({})));
    let client = client(&transport);

    assert!(matches!(
        resolver::resolve(&client, "p1", "c1"),
        Err(ResolveError::Lookup(_))
    ));
}
