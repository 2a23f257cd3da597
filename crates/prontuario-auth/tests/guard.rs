use std::sync::Arc;

use prontuario_api::ApiClient;
use prontuario_api::transport::ScriptedTransport;
use prontuario_auth::context::{AuthContext, SessionService};
use prontuario_auth::guard::{Access, Guarded, RouteGuard, decide};
use prontuario_auth::storage::MemorySessionStorage;
use prontuario_core::models::role::Role;

#[test]
fn decide_only_allows_exact_role() {
    for required in Role::ALL {
        assert_eq!(decide(None, required), Access::Denied);
        for role in Role::ALL {
            let expected = if role == required {
                Access::Allowed
            } else {
                Access::Denied
            };
            assert_eq!(decide(Some(role), required), expected);
        }
    }
}

#[test]
fn pending_until_context_is_ready() {
    let context = AuthContext::new(MemorySessionStorage::new());
    let mut guard = RouteGuard::new(Role::Patient);

    let mut rendered = false;
    let view = guard.render(&context, || rendered = true);
    assert_eq!(view, Guarded::Pending);
    assert!(!rendered);

    context.initialize();
    assert_eq!(guard.evaluate(&context), Access::Denied);
}

#[test]
fn denied_never_builds_children() {
    let context = AuthContext::restore(MemorySessionStorage::new());
    context.login(Role::Patient, "t", None).unwrap();

    let mut guard = RouteGuard::new(Role::Clinician);
    let mut rendered = false;
    let view = guard.render(&context, || rendered = true);
    assert_eq!(view, Guarded::Denied);
    assert!(!rendered);
}

#[test]
fn re_evaluates_when_role_changes() {
    let context = AuthContext::restore(MemorySessionStorage::new());
    let mut guard = RouteGuard::new(Role::Clinician);
    assert_eq!(guard.evaluate(&context), Access::Denied);

    context.login(Role::Clinician, "t", None).unwrap();
    assert_eq!(guard.evaluate(&context), Access::Allowed);

    guard.set_required(Role::Patient);
    assert_eq!(guard.evaluate(&context), Access::Denied);
}

#[test]
fn logout_denies_next_visit_without_network() {
    let transport = Arc::new(ScriptedTransport::new());
    let context = Arc::new(AuthContext::restore(MemorySessionStorage::new()));
    let _client = ApiClient::with_transport(transport.clone(), context.clone());

    context.login(Role::Clinician, "t", None).unwrap();
    let mut guard = RouteGuard::new(Role::Clinician);
    assert_eq!(guard.evaluate(context.as_ref()), Access::Allowed);

    context.logout().unwrap();
    assert_eq!(guard.evaluate(context.as_ref()), Access::Denied);
    assert_eq!(transport.request_count(), 0);
}
