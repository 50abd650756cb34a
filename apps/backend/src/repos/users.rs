use sea_orm::ConnectionTrait;

use crate::adapters::users_sea::{self as users_adapter, UserCreate};
use crate::entities::users;
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

pub async fn find_by_email<C: ConnectionTrait>(
    conn: &C,
    email: &str,
) -> Result<Option<User>, DomainError> {
    let user = users_adapter::find_by_email(conn, email)
        .await
        .map_err(map_db_err)?;
    Ok(user.map(User::from))
}

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    id: &str,
) -> Result<Option<User>, DomainError> {
    let user = users_adapter::find_by_id(conn, id)
        .await
        .map_err(map_db_err)?;
    Ok(user.map(User::from))
}

/// Insert a user. A duplicate email surfaces as `Conflict(UniqueEmail)`.
pub async fn create_user<C: ConnectionTrait>(conn: &C, email: &str) -> Result<User, DomainError> {
    let user = users_adapter::create_user(conn, UserCreate::new(email))
        .await
        .map_err(map_db_err)?;
    Ok(User::from(user))
}

/// Returns whether a row was removed.
pub async fn delete_user<C: ConnectionTrait>(conn: &C, id: &str) -> Result<bool, DomainError> {
    let res = users_adapter::delete_by_id(conn, id)
        .await
        .map_err(map_db_err)?;
    Ok(res.rows_affected > 0)
}
