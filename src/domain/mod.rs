//! Domain layer for the project assigner
//!
//! This module contains the configuration models, the error taxonomy, and the
//! port the service layer drives.

pub mod error;
pub mod models;
pub mod ports;

// Re-export core types for convenient access
pub use error::AssignError;
pub use models::{AssignerConfig, Credentials};
pub use ports::ProjectsApi;
