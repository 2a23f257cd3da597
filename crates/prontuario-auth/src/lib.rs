//! prontuario-auth
//!
//! Session persistence, the role context, login/registration flows and
//! the route guard.

pub mod context;
pub mod error;
pub mod flows;
pub mod guard;
pub mod storage;
pub mod token;
