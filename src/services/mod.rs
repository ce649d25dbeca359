//! Service layer: run orchestration over the domain ports.

pub mod assigner;

pub use assigner::Assigner;
