use thiserror::Error;

use crate::error::AppError;

/// Why a presented token was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRejection {
    Expired,
    BadSignature,
    Malformed,
}

/// Failures of the authentication and authorization flow.
///
/// All are caller errors scoped to a single request and never retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No `Authorization` header, or not of the form `Bearer <token>`
    #[error("missing or malformed bearer credentials")]
    MissingAuth,
    #[error("invalid token: {0:?}")]
    InvalidToken(TokenRejection),
    /// An ownership check ran without a verified subject
    #[error("no authenticated subject")]
    Unauthenticated,
    #[error("subject does not own the resource")]
    Forbidden,
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingAuth => AppError::unauthorized_missing_bearer(),
            AuthError::InvalidToken(TokenRejection::Expired) => AppError::unauthorized_expired_jwt(),
            AuthError::InvalidToken(_) => AppError::unauthorized_invalid_jwt(),
            AuthError::Unauthenticated => AppError::unauthorized(),
            AuthError::Forbidden => AppError::forbidden("Access denied"),
        }
    }
}
