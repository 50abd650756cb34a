//! SeaORM adapter for the users table.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DeleteResult, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use crate::entities::users;

pub mod dto;

pub use dto::UserCreate;

pub async fn find_by_email<C: ConnectionTrait>(
    conn: &C,
    email: &str,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find()
        .filter(users::Column::Email.eq(email))
        .one(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    id: &str,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find_by_id(id.to_owned()).one(conn).await
}

pub async fn create_user<C: ConnectionTrait>(
    conn: &C,
    dto: UserCreate,
) -> Result<users::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let active = users::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        email: Set(dto.email),
        created_at: Set(now),
        updated_at: Set(now),
    };

    active.insert(conn).await
}

pub async fn delete_by_id<C: ConnectionTrait>(
    conn: &C,
    id: &str,
) -> Result<DeleteResult, sea_orm::DbErr> {
    users::Entity::delete_by_id(id.to_owned()).exec(conn).await
}
