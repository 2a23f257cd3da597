pub mod cardio;
mod common;
pub mod neuro;
pub mod trauma;
