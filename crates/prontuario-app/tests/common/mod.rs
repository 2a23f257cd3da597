#![allow(dead_code)]

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use prontuario_api::transport::ScriptedTransport;
use prontuario_app::state::App;
use prontuario_auth::storage::{MemorySessionStorage, SessionStorage, keys};
use prontuario_core::models::role::Role;
use serde_json::json;

/// An unsigned JWT whose `sub` is `user_id`.
pub fn jwt(user_id: &str) -> String {
    let payload = URL_SAFE_NO_PAD.encode(json!({ "sub": user_id }).to_string());
    format!("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.{payload}.sig")
}

pub fn app(transport: &Arc<ScriptedTransport>) -> App<MemorySessionStorage> {
    App::with_transport(MemorySessionStorage::new(), transport.clone())
}

pub fn logged_in(
    transport: &Arc<ScriptedTransport>,
    role: Role,
    user_id: &str,
) -> App<MemorySessionStorage> {
    let storage = MemorySessionStorage::new();
    storage.set(keys::ROLE, role.as_str()).unwrap();
    storage.set(keys::ACCESS_TOKEN, &jwt(user_id)).unwrap();
    storage.set(keys::USER_EMAIL, "user@x.org").unwrap();
    App::with_transport(storage, transport.clone())
}
