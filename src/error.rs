use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use compute::ComputeError;
use sea_orm::DbErr;
use thiserror::Error;
use tracing::{error, warn};

use crate::schemas::ErrorResponse;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors returned by the HTTP handlers.
///
/// Every variant maps to one status code and one stable `code` string.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing or invalid access token")]
    Unauthorized,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Username '{0}' is already taken")]
    UsernameTaken(String),

    #[error("Unknown hero id: {0}")]
    InvalidHeroId(i32),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Account {0} not found")]
    AccountNotFound(i32),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(DbErr),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("Password hashing error: {0}")]
    Password(#[from] bcrypt::BcryptError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized | ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::UsernameTaken(_) => StatusCode::CONFLICT,
            ApiError::InvalidHeroId(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) | ApiError::AccountNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Database(_) | ApiError::Token(_) | ApiError::Password(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Unauthorized => "UNAUTHORIZED",
            ApiError::InvalidCredentials => "INVALID_CREDENTIALS",
            ApiError::UsernameTaken(_) => "USERNAME_ALREADY_EXISTS",
            ApiError::InvalidHeroId(_) => "INVALID_HERO_ID",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            ApiError::StorageUnavailable(_) => "STORAGE_UNAVAILABLE",
            ApiError::Database(_) => "DATABASE_ERROR",
            ApiError::Token(_) | ApiError::Password(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<ComputeError> for ApiError {
    fn from(error: ComputeError) -> Self {
        match error {
            ComputeError::UnknownAccount(id) => ApiError::AccountNotFound(id),
            ComputeError::StorageUnavailable(e) => ApiError::StorageUnavailable(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        // Internal details stay in the logs
        let message = if status.is_server_error() {
            error!("Request failed: {}", self);
            if matches!(self, ApiError::StorageUnavailable(_)) {
                "Storage is currently unavailable".to_string()
            } else {
                "Internal server error".to_string()
            }
        } else {
            warn!("Request rejected: {}", self);
            self.to_string()
        };

        let body = ErrorResponse {
            error: message,
            code: self.code().to_string(),
            success: false,
        };
        (status, Json(body)).into_response()
    }
}
