use actix_web::error::{JsonPayloadError, PathError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use log::{error, warn};
use serde::Serialize;
use sqlx::error::ErrorKind as DbErrorKind;
use thiserror::Error;
use validator::ValidationErrors;

/// Failure raised by a handler.
///
/// The variant tags where the failure came from. Every variant is answered
/// with the same 500 status; the tag only shows up in logs and as `kind` in
/// the body.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed request, or a value the store rejects (not-null, length).
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    /// Foreign-key or uniqueness violation.
    #[error("{0}")]
    Conflict(String),
    /// The store could not be reached.
    #[error("{0}")]
    Unavailable(String),
    #[error("{0}")]
    Database(String),
    #[error("Not Found")]
    UnknownRoute,
}

#[derive(Serialize)]
struct ErrorResponse<'a> {
    error: String,
    kind: &'a str,
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation",
            AppError::NotFound(_) | AppError::UnknownRoute => "not_found",
            AppError::Conflict(_) => "conflict",
            AppError::Unavailable(_) => "unavailable",
            AppError::Database(_) => "database",
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        let message = match &err {
            sqlx::Error::Database(db) => db.message().to_string(),
            other => other.to_string(),
        };
        match &err {
            sqlx::Error::Database(db) => match db.kind() {
                DbErrorKind::ForeignKeyViolation | DbErrorKind::UniqueViolation => {
                    AppError::Conflict(message)
                }
                DbErrorKind::NotNullViolation | DbErrorKind::CheckViolation => {
                    AppError::Validation(message)
                }
                // 22001 string_data_right_truncation: value too long for the column
                _ if db.code().as_deref() == Some("22001") => AppError::Validation(message),
                _ => AppError::Database(message),
            },
            sqlx::Error::RowNotFound => AppError::NotFound(message),
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => AppError::Unavailable(message),
            _ => AppError::Database(message),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(err: ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::UnknownRoute => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Unavailable(msg) | AppError::Database(msg) => {
                error!("{} error: {}", self.kind(), msg)
            }
            AppError::Validation(msg) | AppError::Conflict(msg) | AppError::NotFound(msg) => {
                warn!("{} error: {}", self.kind(), msg)
            }
            AppError::UnknownRoute => {}
        }
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            kind: self.kind(),
        })
    }
}

pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::Validation(err.to_string()).into()
}

pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    AppError::Validation(err.to_string()).into()
}

/// Answer for any method+path the router does not know.
pub async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::UnknownRoute)
}
