use prontuario_auth::context::SessionService;
use prontuario_auth::flows;
use prontuario_auth::storage::SessionStorage;
use prontuario_auth::token;
use prontuario_core::models::role::Role;
use prontuario_core::models::session::Credentials;

use crate::navigation::Route;
use crate::state::App;

pub fn login<S: SessionStorage>(
    app: &mut App<S>,
    role: Role,
    credentials: &Credentials,
) -> eyre::Result<String> {
    app.open(Route::Login);
    let session = flows::login(&app.client, app.context.as_ref(), role, credentials)?;
    app.open(Route::dashboard(role));
    Ok(format!(
        "Logged in as {} ({role}).\n",
        session.user_email.as_deref().unwrap_or(&credentials.email)
    ))
}

/// End the session and drop all navigation state.
pub fn logout<S: SessionStorage>(app: &mut App<S>) -> eyre::Result<String> {
    flows::logout(app.context.as_ref())?;
    app.navigator.reset(Route::Login);
    Ok("Logged out.\n".to_string())
}

pub fn whoami<S: SessionStorage>(app: &App<S>) -> String {
    let session = app.context.session();
    let Some(role) = session.role.filter(|_| session.is_authenticated()) else {
        return "Not logged in.\n".to_string();
    };

    let mut out = format!(
        "{} ({role})\n",
        session.user_email.as_deref().unwrap_or("unknown email")
    );
    if let Some(id) = app.own_id() {
        out.push_str(&format!("id: {id}\n"));
    }
    let expires = session
        .token
        .as_deref()
        .and_then(|t| token::decode_claims(t).ok())
        .and_then(|claims| claims.expires_at());
    if let Some(at) = expires {
        out.push_str(&format!("token expires: {at}\n"));
    }
    out
}
