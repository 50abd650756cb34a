//! Error types for the Taskline backend.

pub mod domain;
pub mod error_code;

pub use domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
pub use error_code::ErrorCode;
