use prontuario_api::ApiClient;
use prontuario_api::endpoints::auth::{self, Registration};
use prontuario_core::models::role::Role;
use prontuario_core::models::session::{Credentials, Session};
use tracing::info;

use crate::context::SessionService;
use crate::error::AuthError;
use crate::token;

/// Authenticate and start a session for `role`.
pub fn login(
    client: &ApiClient,
    session: &dyn SessionService,
    role: Role,
    credentials: &Credentials,
) -> Result<Session, AuthError> {
    let token = auth::login(client, role, credentials)?;
    if token.is_empty() {
        return Err(AuthError::AuthFailed("server returned an empty token".to_string()));
    }

    // Prefer the address the server put in the token, if any.
    let email = token::decode_claims(&token)
        .ok()
        .and_then(|claims| claims.email)
        .unwrap_or_else(|| credentials.email.clone());

    session.login(role, &token, Some(&email))?;
    Ok(session.session())
}

pub fn register(client: &ApiClient, registration: &Registration) -> Result<(), AuthError> {
    auth::register(client, registration)?;
    info!(role = %registration.role(), "account created");
    Ok(())
}

pub fn logout(session: &dyn SessionService) -> Result<(), AuthError> {
    session.logout()
}
