//! Error handling for the apprentice engine.

pub mod domain;

pub use domain::DomainError;
