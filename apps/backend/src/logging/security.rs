//! Security audit events. Emails are always redacted.

use tracing::warn;

use crate::auth::{AuthError, TokenRejection};
use crate::logging::pii::Redacted;
use crate::trace_ctx;

pub fn login_failed(reason: &str, email: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_LOGIN_FAILED",
        %trace_id,
        email = %Redacted(email),
        reason,
        "Authentication failure"
    );
}

pub fn token_rejected(err: &AuthError) {
    let trace_id = trace_ctx::trace_id();
    let reason = match err {
        AuthError::MissingAuth => "missing_bearer",
        AuthError::InvalidToken(TokenRejection::Expired) => "token_expired",
        AuthError::InvalidToken(TokenRejection::BadSignature) => "invalid_signature",
        AuthError::InvalidToken(TokenRejection::Malformed) => "malformed_token",
        AuthError::Unauthenticated => "unauthenticated",
        AuthError::Forbidden => "forbidden",
    };

    warn!(
        event = "SECURITY_TOKEN_REJECTED",
        %trace_id,
        reason,
        "Bearer credentials rejected"
    );
}

/// Ownership guard denied `subject` access to `resource`.
pub fn access_denied(subject: &str, resource: &str, action: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_ACCESS_DENIED",
        %trace_id,
        subject,
        resource,
        action,
        "Ownership check failed"
    );
}
