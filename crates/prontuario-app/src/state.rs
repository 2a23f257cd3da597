use std::sync::Arc;

use prontuario_api::ApiClient;
use prontuario_api::transport::Transport;
use prontuario_auth::context::{AuthContext, SessionService};
use prontuario_auth::guard::{Access, DENIED_MESSAGE, RouteGuard};
use prontuario_auth::storage::{FileSessionStorage, SessionStorage};
use prontuario_auth::token;
use prontuario_core::models::role::Role;

use crate::config::AppConfig;
use crate::navigation::{Audience, Navigator, Route};

/// Everything a page needs: the session, the REST client and navigation.
/// Built once at startup.
pub struct App<S: SessionStorage> {
    pub context: Arc<AuthContext<S>>,
    pub client: ApiClient,
    pub navigator: Navigator,
}

impl App<FileSessionStorage> {
    pub fn from_config(config: &AppConfig) -> eyre::Result<Self> {
        let storage = FileSessionStorage::new(FileSessionStorage::default_location()?);
        let context = Arc::new(AuthContext::new(storage));
        let client = ApiClient::new(&config.http_config(), context.clone());
        Ok(Self::new(context, client))
    }
}

impl<S: SessionStorage + 'static> App<S> {
    /// Wire a context to an arbitrary transport; the client reads its
    /// token from the same context.
    pub fn with_transport(storage: S, transport: Arc<dyn Transport>) -> Self {
        let context = Arc::new(AuthContext::new(storage));
        let client = ApiClient::with_transport(transport, context.clone());
        Self::new(context, client)
    }
}

impl<S: SessionStorage> App<S> {
    pub fn new(context: Arc<AuthContext<S>>, client: ApiClient) -> Self {
        context.initialize();
        let navigator = match context.role() {
            Some(role) => Navigator::new(Route::dashboard(role)),
            None => Navigator::default(),
        };
        Self {
            context,
            client,
            navigator,
        }
    }

    pub fn session(&self) -> &dyn SessionService {
        self.context.as_ref()
    }

    /// Decide whether a page for `audience` may render. Issues no requests.
    pub fn access(&self, audience: Audience) -> Access {
        match audience {
            Audience::Anyone => Access::Allowed,
            Audience::Authenticated if !self.context.is_ready() => Access::Pending,
            Audience::Authenticated => {
                if self.context.session().is_authenticated() {
                    Access::Allowed
                } else {
                    Access::Denied
                }
            }
            Audience::Only(role) => RouteGuard::new(role).evaluate(self.context.as_ref()),
        }
    }

    /// Navigate to `route` and decide whether it may render.
    pub fn open(&mut self, route: Route) -> Access {
        let access = self.access(route.audience());
        self.navigator.navigate(route);
        access
    }

    /// Text shown in place of a page the user may not open, after
    /// navigating to it.
    pub fn denied_view(&self) -> String {
        denied_text(self.navigator.previous().unwrap_or(&Route::Login))
    }

    /// Like [`App::denied_view`], for a page refused before navigation.
    pub fn denied_view_here(&self) -> String {
        denied_text(self.navigator.current())
    }

    /// The logged-in user's own ID, taken from the token's `sub` claim.
    pub fn own_id(&self) -> Option<String> {
        self.context
            .session()
            .token
            .and_then(|t| token::decode_claims(&t).ok())
            .and_then(|claims| claims.sub)
    }

    pub fn role(&self) -> Option<Role> {
        self.context.role()
    }
}

fn denied_text(back: &Route) -> String {
    format!("Access denied. {DENIED_MESSAGE}\n← Go back: {back}\n")
}
