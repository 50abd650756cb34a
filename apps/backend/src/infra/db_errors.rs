//! `sea_orm::DbErr` -> `DomainError` translation.
//!
//! Adapters surface raw `DbErr`; repos call [`map_db_err`] so services only
//! ever see domain errors with PII-free detail.

use sea_orm::DbErr;
use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::logging::pii::Redacted;
use crate::trace_ctx;

const SQLITE_UNIQUE: &str = "UNIQUE constraint failed: ";
const SQLITE_FOREIGN_KEY: &str = "FOREIGN KEY constraint failed";

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(&format!("SQLSTATE({code})")) || msg.contains(&format!("code: {code}"))
}

/// `table.column` from SQLite's `UNIQUE constraint failed: table.column`.
fn sqlite_unique_target(msg: &str) -> Option<&str> {
    let start = msg.find(SQLITE_UNIQUE)? + SQLITE_UNIQUE.len();
    msg[start..].split_whitespace().next()
}

fn is_unique_violation(msg: &str) -> bool {
    msg.contains(SQLITE_UNIQUE)
        || msg.contains("duplicate key value violates unique constraint")
        || mentions_sqlstate(msg, "23505")
}

fn is_email_conflict(msg: &str) -> bool {
    sqlite_unique_target(msg) == Some("users.email") || msg.contains("users_email_key")
}

fn is_fk_violation(msg: &str) -> bool {
    msg.contains(SQLITE_FOREIGN_KEY)
        || msg.contains("violates foreign key constraint")
        || mentions_sqlstate(msg, "23503")
}

pub fn map_db_err(e: DbErr) -> DomainError {
    let trace_id = trace_ctx::trace_id();

    match &e {
        DbErr::RecordNotFound(_) => {
            return DomainError::not_found(NotFoundKind::Other("Record".into()), "Record not found");
        }
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&e.to_string()), "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    let msg = e.to_string();

    if is_unique_violation(&msg) {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&msg), "Unique constraint violation");
        if is_email_conflict(&msg) {
            return DomainError::conflict(ConflictKind::UniqueEmail, "User already exists");
        }
        return DomainError::conflict(
            ConflictKind::Other("Unique".into()),
            "Unique constraint violation",
        );
    }

    if is_fk_violation(&msg) {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&msg), "Foreign key constraint violation");
        return DomainError::conflict(
            ConflictKind::MissingReference,
            "Referenced record does not exist",
        );
    }

    if msg.contains("timed out") || msg.contains("timeout") {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&msg), "Database timeout");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %Redacted(&msg), "Unhandled database error");
    DomainError::infra(InfraErrorKind::Other("DbErr".into()), "Database operation failed")
}
