//! Error handling shared below the HTTP layer.

pub mod domain;

pub use domain::{DomainError, InfraErrorKind};
