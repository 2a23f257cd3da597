use std::sync::Arc;

use prontuario_api::fetch::{FetchState, PatientFetch, UniversalRecordFetch};
use prontuario_api::transport::{Method, ScriptedTransport};
use prontuario_api::ApiClient;
use serde_json::json;

fn client(transport: &Arc<ScriptedTransport>) -> ApiClient {
    ApiClient::with_transport(transport.clone(), Arc::new(|| Some("tok".to_string())))
}

fn patient_json(id: &str) -> serde_json::Value {
    json!({ "patient": { "id": id, "name": "Ana", "email": "ana@x.org", "cpf": "1" } })
}

#[test]
fn null_id_issues_no_request() {
    let transport = Arc::new(ScriptedTransport::new());
    let client = client(&transport);
    let mut hook = PatientFetch::new();

    hook.set_id(&client, None);
    hook.set_id(&client, None);

    assert_eq!(transport.request_count(), 0);
    assert!(matches!(hook.state(), FetchState::Idle));
    assert!(hook.value().is_none());
}

#[test]
fn concrete_id_issues_exactly_one_get() {
    let transport = Arc::new(ScriptedTransport::new().respond(200, patient_json("p1")));
    let client = client(&transport);
    let mut hook = PatientFetch::new();

    hook.set_id(&client, Some("p1"));
    hook.set_id(&client, Some("p1"));

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Get);
    assert_eq!(requests[0].path, "/patients/p1");
    assert_eq!(hook.value().unwrap().id, "p1");
}

#[test]
fn changing_id_reloads() {
    let transport = Arc::new(
        ScriptedTransport::new()
            .respond(200, patient_json("p1"))
            .respond(200, patient_json("p2")),
    );
    let client = client(&transport);
    let mut hook = PatientFetch::new();

    hook.set_id(&client, Some("p1"));
    hook.set_id(&client, Some("p2"));
    hook.set_id(&client, None);

    assert_eq!(transport.request_count(), 2);
    assert_eq!(hook.value().unwrap().id, "p2");
}

#[test]
fn failure_leaves_value_empty_and_keeps_error() {
    let transport = Arc::new(ScriptedTransport::new().respond(404, json!({ "message": "gone" })));
    let client = client(&transport);
    let mut hook = UniversalRecordFetch::new();

    hook.set_id(&client, Some("u1"));

    assert!(hook.value().is_none());
    assert_eq!(hook.error().and_then(|e| e.status()), Some(404));
    assert_eq!(transport.requests()[0].path, "/universal-medical-record/u1");
}
