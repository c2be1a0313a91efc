use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

use crate::errors::domain::DomainError;
use crate::http::envelope::ApiResponse;
use crate::trace_ctx;

/// Message every gate rejection carries.
pub const UNAUTHORIZED_MESSAGE: &str = "User is not authorized";

#[derive(Error, Debug)]
pub enum AppError {
    /// The request gate rejected the request. The reason is deliberately
    /// not part of the error.
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Bad request: {message}")]
    BadRequest {
        message: String,
        detail: Option<String>,
    },
    /// A store call failed; `status` is chosen by the handler.
    #[error("Store error ({message}): {detail}")]
    Store {
        status: StatusCode,
        message: String,
        detail: String,
    },
    #[error("Database unavailable: {detail}")]
    DbUnavailable { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Store { status, .. } => *status,
            AppError::DbUnavailable { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message
    fn message(&self) -> String {
        match self {
            AppError::Unauthorized => UNAUTHORIZED_MESSAGE.to_string(),
            AppError::InvalidCredentials => "Invalid username or password".to_string(),
            AppError::BadRequest { message, .. } => message.clone(),
            AppError::Store { message, .. } => message.clone(),
            AppError::DbUnavailable { .. } => "Database unavailable".to_string(),
            AppError::Internal { .. } => "Internal server error".to_string(),
            AppError::Config { .. } => "Server misconfigured".to_string(),
        }
    }

    /// Raw error payload echoed in the `error` member. Only store and body
    /// errors carry one.
    fn client_detail(&self) -> Option<String> {
        match self {
            AppError::BadRequest { detail, .. } => detail.clone(),
            AppError::Store { detail, .. } => Some(detail.clone()),
            _ => None,
        }
    }

    pub fn unauthorized() -> Self {
        Self::Unauthorized
    }

    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            detail: None,
        }
    }

    pub fn bad_request_with_detail(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            detail: Some(detail.into()),
        }
    }

    /// Wrap a failed store call with the status and message the route
    /// reports for it.
    pub fn store(status: StatusCode, message: impl Into<String>, err: DomainError) -> Self {
        Self::Store {
            status,
            message: message.into(),
            detail: err.detail().to_string(),
        }
    }

    pub fn db_unavailable(detail: impl Into<String>) -> Self {
        Self::DbUnavailable {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let trace_id = trace_ctx::trace_id();

        if status.is_server_error() {
            tracing::error!(trace_id = %trace_id, error = %self, "request_failed");
        }

        HttpResponse::build(status)
            .insert_header(("x-trace-id", trace_id))
            .json(ApiResponse::failure(self.message()).with_error(self.client_detail()))
    }
}
