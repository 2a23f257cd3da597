//! prontuario-app library root.
//!
//! Exposes the navigation, state and page modules so integration tests
//! can drive whole flows without going through the CLI layer.

pub mod config;
pub mod navigation;
pub mod pages;
pub mod state;
