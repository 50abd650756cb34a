use sea_orm::ConnectionTrait;

use crate::adapters::tasks_sea::{self as tasks_adapter, TaskCreate, TaskUpdate};
use crate::auth::ownership::OwnedResource;
use crate::entities::tasks;
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

impl From<tasks::Model> for Task {
    fn from(model: tasks::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            description: model.description,
            completed: model.completed,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl OwnedResource for Task {
    fn owner_id(&self) -> &str {
        &self.user_id
    }
}

/// Caller-editable task fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFields {
    pub title: String,
    pub description: String,
    pub completed: bool,
}

pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    id: &str,
) -> Result<Option<Task>, DomainError> {
    let task = tasks_adapter::find_by_id(conn, id)
        .await
        .map_err(map_db_err)?;
    Ok(task.map(Task::from))
}

pub async fn list_for_user<C: ConnectionTrait>(
    conn: &C,
    user_id: &str,
) -> Result<Vec<Task>, DomainError> {
    let rows = tasks_adapter::find_all_by_user(conn, user_id)
        .await
        .map_err(map_db_err)?;
    Ok(rows.into_iter().map(Task::from).collect())
}

pub async fn create_task<C: ConnectionTrait>(
    conn: &C,
    owner_id: &str,
    fields: TaskFields,
) -> Result<Task, DomainError> {
    let dto = TaskCreate {
        user_id: owner_id.to_string(),
        title: fields.title,
        description: fields.description,
        completed: fields.completed,
    };
    let task = tasks_adapter::create_task(conn, dto)
        .await
        .map_err(map_db_err)?;
    Ok(Task::from(task))
}

/// Overwrite the editable fields of task `id`. The owner is left untouched.
pub async fn update_task<C: ConnectionTrait>(
    conn: &C,
    id: &str,
    fields: TaskFields,
) -> Result<Task, DomainError> {
    let dto = TaskUpdate {
        id: id.to_string(),
        title: fields.title,
        description: fields.description,
        completed: fields.completed,
    };
    let task = tasks_adapter::update_task(conn, dto)
        .await
        .map_err(map_db_err)?;
    Ok(Task::from(task))
}

pub async fn delete_task<C: ConnectionTrait>(conn: &C, id: &str) -> Result<bool, DomainError> {
    let res = tasks_adapter::delete_by_id(conn, id)
        .await
        .map_err(map_db_err)?;
    Ok(res.rows_affected > 0)
}

/// Returns the number of tasks removed.
pub async fn delete_all_for_user<C: ConnectionTrait>(
    conn: &C,
    user_id: &str,
) -> Result<u64, DomainError> {
    let res = tasks_adapter::delete_all_by_user(conn, user_id)
        .await
        .map_err(map_db_err)?;
    Ok(res.rows_affected)
}
