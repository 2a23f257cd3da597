//! Each page is a function that opens its route, does its work through
//! the API client and returns the text to show.

pub mod access;
pub mod dashboard;
pub mod login;
pub mod people;
pub mod records;
pub mod register;
pub mod universal;

use prontuario_auth::guard::Access;
use prontuario_auth::storage::SessionStorage;
use tracing::warn;

use crate::navigation::{Audience, Route};
use crate::state::App;

/// Open `route`. `Some(text)` replaces the page when it may not render.
pub(crate) fn gate<S: SessionStorage>(app: &mut App<S>, route: Route) -> Option<String> {
    let shown = route.to_string();
    match app.open(route) {
        Access::Allowed => None,
        Access::Pending => Some(String::new()),
        Access::Denied => {
            warn!(route = %shown, role = ?app.role(), "access denied");
            Some(app.denied_view())
        }
    }
}

/// Like [`gate`], for pages that must look something up before they know
/// their route. Nothing is navigated or fetched when refused.
pub(crate) fn precheck<S: SessionStorage>(app: &App<S>, audience: Audience) -> Option<String> {
    match app.access(audience) {
        Access::Allowed => None,
        Access::Pending => Some(String::new()),
        Access::Denied => {
            warn!(audience = ?audience, role = ?app.role(), "access denied");
            Some(app.denied_view_here())
        }
    }
}

/// `-` for values that were never filled in.
pub(crate) fn or_dash(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => "-",
    }
}
