//! Error codes for the Taskline API.
//!
//! Every code that can appear in a problem-details body is declared here.
//! Handlers and services never pass ad-hoc strings as codes.

use core::fmt;

/// Canonical error codes. Each maps to one SCREAMING_SNAKE_CASE string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & authorization
    /// Authentication required
    Unauthorized,
    /// Missing or malformed Bearer token
    UnauthorizedMissingBearer,
    /// Signature or structure of the JWT did not verify
    UnauthorizedInvalidJwt,
    /// JWT is past its expiry
    UnauthorizedExpiredJwt,
    /// Login rejected
    InvalidCredentials,
    /// Caller does not own the resource
    Forbidden,
    /// Token subject has no backing user record
    ForbiddenUserNotFound,

    // Request validation
    InvalidEmail,
    /// Body does not match the expected shape
    InvalidFormat,
    BadRequest,
    /// Body exceeds the configured JSON limit
    PayloadTooLarge,

    // Not found
    UserNotFound,
    TaskNotFound,
    NotFound,

    // Conflicts
    UserAlreadyExists,
    UniqueViolation,
    FkViolation,
    Conflict,

    // Infrastructure
    DbError,
    DbUnavailable,
    Internal,
    ConfigError,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            Self::UnauthorizedInvalidJwt => "UNAUTHORIZED_INVALID_JWT",
            Self::UnauthorizedExpiredJwt => "UNAUTHORIZED_EXPIRED_JWT",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Forbidden => "FORBIDDEN",
            Self::ForbiddenUserNotFound => "FORBIDDEN_USER_NOT_FOUND",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidFormat => "INVALID_FORMAT",
            Self::BadRequest => "BAD_REQUEST",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::TaskNotFound => "TASK_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",
            Self::UniqueViolation => "UNIQUE_VIOLATION",
            Self::FkViolation => "FK_VIOLATION",
            Self::Conflict => "CONFLICT",
            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
