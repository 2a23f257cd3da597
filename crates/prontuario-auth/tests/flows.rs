use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use prontuario_api::transport::ScriptedTransport;
use prontuario_api::{ApiClient, ApiError};
use prontuario_auth::context::{AuthContext, SessionService};
use prontuario_auth::error::AuthError;
use prontuario_auth::flows;
use prontuario_auth::storage::MemorySessionStorage;
use prontuario_core::models::role::Role;
use prontuario_core::models::session::Credentials;
use serde_json::json;

fn credentials() -> Credentials {
    Credentials {
        email: "ana@x.org".to_string(),
        password: "secret".to_string(),
    }
}

#[test]
fn login_stores_role_token_and_email() {
    let transport = Arc::new(ScriptedTransport::new().respond(200, json!({ "token": "opaque" })));
    let context = Arc::new(AuthContext::restore(MemorySessionStorage::new()));
    let client = ApiClient::with_transport(transport.clone(), context.clone());

    let session = flows::login(&client, context.as_ref(), Role::Patient, &credentials()).unwrap();

    assert_eq!(session.role, Some(Role::Patient));
    assert_eq!(session.token.as_deref(), Some("opaque"));
    assert_eq!(session.user_email.as_deref(), Some("ana@x.org"));
    assert_eq!(transport.requests()[0].path, "/auth/patient");
}

#[test]
fn login_prefers_email_from_token_claims() {
    let payload = URL_SAFE_NO_PAD.encode(json!({ "email": "canonical@x.org" }).to_string());
    let token = format!("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.{payload}.sig");
    let transport = Arc::new(ScriptedTransport::new().respond(200, json!({ "token": token })));
    let context = Arc::new(AuthContext::restore(MemorySessionStorage::new()));
    let client = ApiClient::with_transport(transport, context.clone());

    let session = flows::login(&client, context.as_ref(), Role::Clinician, &credentials()).unwrap();
    assert_eq!(session.user_email.as_deref(), Some("canonical@x.org"));
}

#[test]
fn rejected_login_leaves_session_empty() {
    let transport = Arc::new(
        ScriptedTransport::new().respond(401, json!({ "message": "invalid credentials" })),
    );
    let context = Arc::new(AuthContext::restore(MemorySessionStorage::new()));
    let client = ApiClient::with_transport(transport, context.clone());

    let err = flows::login(&client, context.as_ref(), Role::Patient, &credentials()).unwrap_err();
    assert!(matches!(err, AuthError::Api(ApiError::Unauthorized(_))));
    assert_eq!(context.role(), None);
}
