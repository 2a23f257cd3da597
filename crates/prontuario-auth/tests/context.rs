use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use prontuario_api::TokenSource;
use prontuario_auth::context::{AuthContext, SessionService};
use prontuario_auth::error::StorageError;
use prontuario_auth::storage::{FileSessionStorage, MemorySessionStorage, SessionStorage, keys};
use prontuario_core::models::role::Role;

fn jwt(payload: serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.signature")
}

#[test]
fn not_ready_until_initialized() {
    let context = AuthContext::new(MemorySessionStorage::new());
    assert!(!context.is_ready());
    context.initialize();
    assert!(context.is_ready());
    assert_eq!(context.role(), None);
}

#[test]
fn login_updates_memory_and_storage() {
    let context = AuthContext::restore(MemorySessionStorage::new());
    context
        .login(Role::Clinician, "tok", Some("dr@x.org"))
        .unwrap();

    assert_eq!(context.role(), Some(Role::Clinician));
    assert_eq!(context.session().user_email.as_deref(), Some("dr@x.org"));
    assert_eq!(context.storage().get(keys::ROLE).as_deref(), Some("clinician"));
    assert_eq!(context.storage().get(keys::ACCESS_TOKEN).as_deref(), Some("tok"));
    assert_eq!(context.access_token().as_deref(), Some("tok"));
}

#[test]
fn logout_clears_role_token_and_selection() {
    let storage = MemorySessionStorage::new();
    storage.set("patientId", "p-stale").unwrap();
    let context = AuthContext::restore(storage);
    context.login(Role::Patient, "tok", None).unwrap();

    context.logout().unwrap();

    assert_eq!(context.role(), None);
    assert!(!context.session().is_authenticated());
    assert_eq!(context.access_token(), None);
    assert_eq!(context.storage().get(keys::ROLE), None);
    assert_eq!(context.storage().get("patientId"), None);
}

#[test]
fn reload_restores_session_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let first = AuthContext::restore(FileSessionStorage::new(&path));
    first.login(Role::Patient, "tok-9", Some("ana@x.org")).unwrap();

    let second = AuthContext::restore(FileSessionStorage::new(&path));
    assert_eq!(second.role(), Some(Role::Patient));
    assert_eq!(second.session().token.as_deref(), Some("tok-9"));

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}

#[test]
fn logout_in_one_process_is_seen_by_token_reads_in_another() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let a = AuthContext::restore(FileSessionStorage::new(&path));
    a.login(Role::Clinician, "tok", None).unwrap();
    let b = AuthContext::restore(FileSessionStorage::new(&path));

    a.logout().unwrap();
    assert_eq!(b.access_token(), None);
}

#[test]
fn expired_jwt_is_discarded_on_initialize() {
    let storage = MemorySessionStorage::new();
    storage.set(keys::ROLE, "patient").unwrap();
    storage
        .set(keys::ACCESS_TOKEN, &jwt(serde_json::json!({ "sub": "p1", "exp": 1_000 })))
        .unwrap();

    let context = AuthContext::restore(storage);
    assert!(context.is_ready());
    assert_eq!(context.role(), None);
    assert_eq!(context.storage().get(keys::ACCESS_TOKEN), None);
}

#[test]
fn opaque_and_unexpired_tokens_are_kept() {
    let far_future = jiff::Timestamp::now().as_second() + 3_600;
    for token in [
        "opaque-token".to_string(),
        jwt(serde_json::json!({ "sub": "p1", "exp": far_future })),
    ] {
        let storage = MemorySessionStorage::new();
        storage.set(keys::ROLE, "patient").unwrap();
        storage.set(keys::ACCESS_TOKEN, &token).unwrap();

        let context = AuthContext::restore(storage);
        assert_eq!(context.role(), Some(Role::Patient));
    }
}

#[test]
fn unknown_persisted_role_is_ignored() {
    let storage = MemorySessionStorage::new();
    storage.set(keys::ROLE, "admin").unwrap();
    let context = AuthContext::restore(storage);
    assert_eq!(context.role(), None);
}

/// Fails every write of one key.
struct FailingStorage {
    inner: MemorySessionStorage,
    broken_key: &'static str,
}

impl SessionStorage for FailingStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if key == self.broken_key {
            return Err(StorageError::Io(std::io::Error::other("disk full")));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }
}

#[test]
fn failed_login_write_stores_no_token() {
    let context = AuthContext::restore(FailingStorage {
        inner: MemorySessionStorage::new(),
        broken_key: keys::USER_EMAIL,
    });

    assert!(context.login(Role::Patient, "tok", Some("ana@x.org")).is_err());
    assert_eq!(context.access_token(), None);
    assert_eq!(context.role(), None);
    assert!(!context.session().is_authenticated());
}

#[test]
fn session_file_is_private_and_replaced_whole() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("session.json");
    let storage = FileSessionStorage::new(&path);
    storage.set(keys::ROLE, "patient").unwrap();
    storage.set(keys::ROLE, "clinician").unwrap();

    assert_eq!(storage.get(keys::ROLE).as_deref(), Some("clinician"));
    assert!(!path.with_extension("json.tmp").exists());

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
