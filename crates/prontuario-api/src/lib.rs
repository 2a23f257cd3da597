//! prontuario-api
//!
//! REST access to the Prontuario backend. Thin wrapper around `ureq`
//! plus the entity fetch hooks and the record-type resolver built on it.

pub mod client;
pub mod config;
pub mod endpoints;
pub mod envelope;
pub mod error;
pub mod fetch;
pub mod resolver;
pub mod transport;

pub use client::{ApiClient, TokenSource};
pub use error::ApiError;
