//! SeaORM adapter for the tasks table.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DeleteResult, EntityTrait, NotSet,
    QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::tasks;

pub mod dto;

pub use dto::{TaskCreate, TaskUpdate};

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    id: &str,
) -> Result<Option<tasks::Model>, sea_orm::DbErr> {
    tasks::Entity::find_by_id(id.to_owned()).one(conn).await
}

/// Oldest first; id breaks ties between tasks created in the same instant.
pub async fn find_all_by_user<C: ConnectionTrait>(
    conn: &C,
    user_id: &str,
) -> Result<Vec<tasks::Model>, sea_orm::DbErr> {
    tasks::Entity::find()
        .filter(tasks::Column::UserId.eq(user_id))
        .order_by_asc(tasks::Column::CreatedAt)
        .order_by_asc(tasks::Column::Id)
        .all(conn)
        .await
}

pub async fn create_task<C: ConnectionTrait>(
    conn: &C,
    dto: TaskCreate,
) -> Result<tasks::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let active = tasks::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        user_id: Set(dto.user_id),
        title: Set(dto.title),
        description: Set(dto.description),
        completed: Set(dto.completed),
        created_at: Set(now),
        updated_at: Set(now),
    };

    active.insert(conn).await
}

pub async fn update_task<C: ConnectionTrait>(
    conn: &C,
    dto: TaskUpdate,
) -> Result<tasks::Model, sea_orm::DbErr> {
    let active = tasks::ActiveModel {
        id: Set(dto.id),
        user_id: NotSet,
        title: Set(dto.title),
        description: Set(dto.description),
        completed: Set(dto.completed),
        created_at: NotSet,
        updated_at: Set(time::OffsetDateTime::now_utc()),
    };

    active.update(conn).await
}

pub async fn delete_by_id<C: ConnectionTrait>(
    conn: &C,
    id: &str,
) -> Result<DeleteResult, sea_orm::DbErr> {
    tasks::Entity::delete_by_id(id.to_owned()).exec(conn).await
}

pub async fn delete_all_by_user<C: ConnectionTrait>(
    conn: &C,
    user_id: &str,
) -> Result<DeleteResult, sea_orm::DbErr> {
    tasks::Entity::delete_many()
        .filter(tasks::Column::UserId.eq(user_id))
        .exec(conn)
        .await
}
