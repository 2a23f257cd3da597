//! prontuario-core
//!
//! Pure domain types and REST path conventions.
//! No HTTP dependency. This is the shared vocabulary of the Prontuario client.

pub mod api_paths;
pub mod error;
pub mod models;
