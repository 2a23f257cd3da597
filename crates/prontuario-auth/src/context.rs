//! The auth/role context.
//!
//! Constructed once at the application root and handed to everything that
//! needs the current role. Mutations update memory and storage together.

use std::sync::RwLock;

use prontuario_api::TokenSource;
use prontuario_core::models::role::Role;
use prontuario_core::models::session::Session;
use tracing::{info, warn};

use crate::error::AuthError;
use crate::storage::{SessionStorage, keys};
use crate::token;

/// Session operations the rest of the client depends on.
pub trait SessionService: Send + Sync {
    /// False until persisted state has been read. Guards render nothing
    /// while this is false.
    fn is_ready(&self) -> bool;

    fn role(&self) -> Option<Role>;

    fn session(&self) -> Session;

    fn login(&self, role: Role, token: &str, email: Option<&str>) -> Result<(), AuthError>;

    fn logout(&self) -> Result<(), AuthError>;
}

#[derive(Debug, Default)]
struct ContextState {
    ready: bool,
    session: Session,
}

pub struct AuthContext<S: SessionStorage> {
    storage: S,
    state: RwLock<ContextState>,
}

impl<S: SessionStorage> AuthContext<S> {
    /// A context that has not read storage yet.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            state: RwLock::new(ContextState::default()),
        }
    }

    /// Build and initialize in one step.
    pub fn restore(storage: S) -> Self {
        let context = Self::new(storage);
        context.initialize();
        context
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Read the persisted session once. Later calls are no-ops.
    ///
    /// A stored JWT whose `exp` has passed is discarded, leaving the
    /// context logged out.
    pub fn initialize(&self) {
        if self.is_ready() {
            return;
        }

        let role = self.storage.get(keys::ROLE).and_then(|r| match r.parse::<Role>() {
            Ok(role) => Some(role),
            Err(e) => {
                warn!(error = %e, "ignoring persisted role");
                None
            }
        });
        let token = self.storage.get(keys::ACCESS_TOKEN);
        let user_email = self.storage.get(keys::USER_EMAIL);

        let expired = token
            .as_deref()
            .and_then(|t| token::decode_claims(t).ok())
            .is_some_and(|claims| claims.is_expired(jiff::Timestamp::now()));

        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        state.ready = true;
        if expired {
            drop(state);
            info!("stored token has expired, clearing session");
            if let Err(e) = self.logout() {
                warn!(error = %e, "failed to clear expired session");
            }
            return;
        }
        state.session = Session {
            role,
            token,
            user_email,
        };
    }
}

impl<S: SessionStorage> SessionService for AuthContext<S> {
    fn is_ready(&self) -> bool {
        self.state.read().unwrap_or_else(|e| e.into_inner()).ready
    }

    fn role(&self) -> Option<Role> {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .session
            .role
    }

    fn session(&self) -> Session {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .session
            .clone()
    }

    fn login(&self, role: Role, token: &str, email: Option<&str>) -> Result<(), AuthError> {
        // Token last: a failed write must leave nothing to authorize with.
        self.storage.set(keys::ROLE, role.as_str())?;
        match email {
            Some(email) => self.storage.set(keys::USER_EMAIL, email)?,
            None => self.storage.remove(keys::USER_EMAIL)?,
        }
        self.storage.set(keys::ACCESS_TOKEN, token)?;

        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        state.ready = true;
        state.session = Session {
            role: Some(role),
            token: Some(token.to_string()),
            user_email: email.map(str::to_string),
        };
        info!(role = %role, "session started");
        Ok(())
    }

    /// Memory is cleared first so a storage failure still logs the
    /// process out.
    fn logout(&self) -> Result<(), AuthError> {
        {
            let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
            state.session = Session::default();
        }

        for key in [keys::ACCESS_TOKEN, keys::ROLE, keys::USER_EMAIL]
            .into_iter()
            .chain(keys::LEGACY_SELECTION)
        {
            self.storage.remove(key)?;
        }
        info!("session cleared");
        Ok(())
    }
}

/// The bearer token is read from storage on every request.
impl<S: SessionStorage> TokenSource for AuthContext<S> {
    fn access_token(&self) -> Option<String> {
        self.storage.get(keys::ACCESS_TOKEN)
    }
}
