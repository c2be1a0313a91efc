//! Domain-level error type used across repositories and services.
//!
//! This error type is HTTP-agnostic. Handlers return
//! `Result<T, crate::error::AppError>` and pick the status for a failed
//! store call themselves (see [`crate::error::AppError::store`]).

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use sea_orm::DbErr;

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    DbUnavailable,
    DataCorruption,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input that the store cannot accept
    Validation(String),
    /// Missing resource in domain terms
    NotFound(String),
    /// Infrastructure/operational failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(d) => write!(f, "validation error: {d}"),
            DomainError::NotFound(d) => write!(f, "not found: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation(detail.into())
    }
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::NotFound(detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    /// The raw detail, without the kind prefix. This is what clients see in
    /// the `error` member of a failed response.
    pub fn detail(&self) -> &str {
        match self {
            DomainError::Validation(d) | DomainError::NotFound(d) | DomainError::Infra(_, d) => d,
        }
    }
}

impl From<DbErr> for DomainError {
    fn from(e: DbErr) -> Self {
        match e {
            DbErr::RecordNotFound(detail) => DomainError::not_found(detail),
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => {
                DomainError::infra(InfraErrorKind::DbUnavailable, e.to_string())
            }
            DbErr::Json(_) | DbErr::Type(_) => {
                DomainError::infra(InfraErrorKind::DataCorruption, e.to_string())
            }
            DbErr::RecordNotInserted => {
                DomainError::validation("document was not inserted".to_string())
            }
            other => DomainError::infra(InfraErrorKind::Other("db".into()), other.to_string()),
        }
    }
}
