use std::time::SystemTime;

use lazy_regex::regex_is_match;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use tracing::{debug, info};

use crate::auth::jwt::mint_access_token;
use crate::auth::ownership::ensure_owner;
use crate::auth::AuthError;
use crate::error::AppError;
use crate::errors::{DomainError, ErrorCode, NotFoundKind};
use crate::logging::pii::Redacted;
use crate::logging::security;
use crate::repos::tasks as tasks_repo;
use crate::repos::users::{self as users_repo, User};
use crate::state::security_config::SecurityConfig;

/// `local@domain.tld` with no whitespace and exactly one `@` per part.
pub fn is_valid_email(email: &str) -> bool {
    regex_is_match!(r"^[^\s@]+@[^\s@]+\.[^\s@]+$", email)
}

fn validate_email(email: &str) -> Result<(), AppError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(AppError::invalid(ErrorCode::InvalidEmail, "Invalid email format"))
    }
}

fn user_not_found() -> AppError {
    DomainError::not_found(NotFoundKind::User, "User not found").into()
}

pub async fn create_user<C: ConnectionTrait>(conn: &C, email: &str) -> Result<User, AppError> {
    validate_email(email)?;

    if users_repo::find_by_email(conn, email).await?.is_some() {
        return Err(AppError::conflict(ErrorCode::UserAlreadyExists, "User already exists"));
    }

    let user = users_repo::create_user(conn, email).await?;
    info!(user_id = %user.id, email = %Redacted(email), "User created");
    Ok(user)
}

pub async fn get_user_by_email<C: ConnectionTrait>(conn: &C, email: &str) -> Result<User, AppError> {
    validate_email(email)?;
    users_repo::find_by_email(conn, email)
        .await?
        .ok_or_else(user_not_found)
}

/// Delete the account behind `email` together with its tasks.
///
/// Only the account holder may do this. Tasks and user go in one transaction.
pub async fn delete_user(
    conn: &DatabaseConnection,
    subject: Option<&str>,
    email: &str,
) -> Result<(), AppError> {
    validate_email(email)?;

    let user = users_repo::find_by_email(conn, email)
        .await?
        .ok_or_else(user_not_found)?;

    ensure_owner(subject, &user.id).map_err(|err| match err {
        AuthError::Forbidden => {
            security::access_denied(subject.unwrap_or_default(), "user", "delete");
            AppError::forbidden("Unauthorized to delete this user")
        }
        other => other.into(),
    })?;

    let txn = conn.begin().await?;
    let removed_tasks = tasks_repo::delete_all_for_user(&txn, &user.id).await?;
    if !users_repo::delete_user(&txn, &user.id).await? {
        return Err(user_not_found());
    }
    txn.commit().await?;

    info!(user_id = %user.id, removed_tasks, "User deleted");
    Ok(())
}

/// Exchange an email for an access token.
///
/// Unknown accounts get the same 401 as any other credential failure.
pub async fn login<C: ConnectionTrait>(
    conn: &C,
    security_config: &SecurityConfig,
    email: &str,
    now: SystemTime,
) -> Result<String, AppError> {
    validate_email(email)?;

    let Some(user) = users_repo::find_by_email(conn, email).await? else {
        security::login_failed("unknown_email", email);
        return Err(AppError::invalid_credentials());
    };

    let token = mint_access_token(&user.id, &user.email, now, security_config)?;
    debug!(user_id = %user.id, "Access token issued");
    Ok(token)
}
