//! Role gate for restricted views.
//!
//! This only decides what to render. The backend authorizes every request
//! by token on its own.

use prontuario_core::models::role::Role;
use tracing::debug;

use crate::context::SessionService;

pub const DENIED_MESSAGE: &str = "You do not have permission to view this page.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Session not read yet; render nothing.
    Pending,
    Allowed,
    /// Render the "go back" view instead of the children.
    Denied,
}

/// What a guarded view renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guarded<T> {
    Pending,
    Content(T),
    Denied,
}

pub fn decide(role: Option<Role>, required: Role) -> Access {
    match role {
        Some(role) if role == required => Access::Allowed,
        _ => Access::Denied,
    }
}

#[derive(Debug, Clone)]
pub struct RouteGuard {
    required: Role,
    last_inputs: Option<(Option<Role>, Role)>,
    access: Access,
}

impl RouteGuard {
    pub fn new(required: Role) -> Self {
        Self {
            required,
            last_inputs: None,
            access: Access::Pending,
        }
    }

    pub fn required(&self) -> Role {
        self.required
    }

    pub fn set_required(&mut self, required: Role) {
        self.required = required;
    }

    pub fn access(&self) -> Access {
        self.access
    }

    /// Re-evaluate if the current role or the required role changed
    /// since the last call.
    pub fn evaluate(&mut self, session: &dyn SessionService) -> Access {
        if !session.is_ready() {
            self.last_inputs = None;
            self.access = Access::Pending;
            return self.access;
        }

        let inputs = (session.role(), self.required);
        if self.last_inputs != Some(inputs) {
            self.access = decide(inputs.0, inputs.1);
            self.last_inputs = Some(inputs);
            debug!(
                role = ?inputs.0,
                required = %inputs.1,
                access = ?self.access,
                "route guard evaluated"
            );
        }
        self.access
    }

    /// Build the children only when access is allowed.
    pub fn render<T>(
        &mut self,
        session: &dyn SessionService,
        children: impl FnOnce() -> T,
    ) -> Guarded<T> {
        match self.evaluate(session) {
            Access::Pending => Guarded::Pending,
            Access::Allowed => Guarded::Content(children()),
            Access::Denied => Guarded::Denied,
        }
    }
}
