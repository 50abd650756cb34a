use sea_orm::ConnectionTrait;
use tracing::info;

use crate::auth::ownership::{ensure_owner, ensure_owns};
use crate::auth::AuthError;
use crate::error::AppError;
use crate::errors::{DomainError, NotFoundKind};
use crate::logging::security;
use crate::repos::tasks::{self as tasks_repo, Task, TaskFields};
use crate::repos::users as users_repo;

#[derive(Debug, Clone, Copy)]
enum Action {
    Create,
    View,
    Update,
    Delete,
}

impl Action {
    fn as_str(self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::View => "view",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }
}

/// Turn a guard failure into the HTTP error for `action`.
fn denied(err: AuthError, subject: Option<&str>, action: Action) -> AppError {
    match err {
        AuthError::Forbidden => {
            security::access_denied(subject.unwrap_or_default(), "task", action.as_str());
            AppError::forbidden(format!("Unauthorized to {} this task", action.as_str()))
        }
        other => other.into(),
    }
}

fn task_not_found() -> AppError {
    DomainError::not_found(NotFoundKind::Task, "Task not found").into()
}

/// Load a task and check `subject` owns it: 404 before 403.
async fn load_owned<C: ConnectionTrait>(
    conn: &C,
    subject: Option<&str>,
    task_id: &str,
    action: Action,
) -> Result<Task, AppError> {
    let task = tasks_repo::find_by_id(conn, task_id)
        .await?
        .ok_or_else(task_not_found)?;
    ensure_owns(subject, &task).map_err(|e| denied(e, subject, action))?;
    Ok(task)
}

/// Create a task owned by `subject`.
///
/// A `claimed_owner` from the body must name the caller; the owner's account must exist.
pub async fn create_task<C: ConnectionTrait>(
    conn: &C,
    subject: Option<&str>,
    claimed_owner: Option<&str>,
    fields: TaskFields,
) -> Result<Task, AppError> {
    let owner = subject.ok_or_else(|| AppError::from(AuthError::Unauthenticated))?;

    if let Some(claimed) = claimed_owner {
        ensure_owner(Some(owner), claimed).map_err(|e| denied(e, subject, Action::Create))?;
    }

    if users_repo::find_by_id(conn, owner).await?.is_none() {
        return Err(AppError::forbidden_user_not_found());
    }

    let task = tasks_repo::create_task(conn, owner, fields).await?;
    info!(task_id = %task.id, user_id = %owner, "Task created");
    Ok(task)
}

/// All tasks of `user_id`, oldest first. Callers may only list their own.
pub async fn list_tasks_for_user<C: ConnectionTrait>(
    conn: &C,
    subject: Option<&str>,
    user_id: &str,
) -> Result<Vec<Task>, AppError> {
    ensure_owner(subject, user_id).map_err(|err| match err {
        AuthError::Forbidden => {
            security::access_denied(subject.unwrap_or_default(), "task_list", "view");
            AppError::forbidden("Unauthorized to view these tasks")
        }
        other => other.into(),
    })?;

    Ok(tasks_repo::list_for_user(conn, user_id).await?)
}

pub async fn get_task<C: ConnectionTrait>(
    conn: &C,
    subject: Option<&str>,
    task_id: &str,
) -> Result<Task, AppError> {
    load_owned(conn, subject, task_id, Action::View).await
}

/// Replace the editable fields of a task the caller owns.
///
/// A `claimed_owner` that differs from the stored owner is refused; ownership never moves.
pub async fn update_task<C: ConnectionTrait>(
    conn: &C,
    subject: Option<&str>,
    task_id: &str,
    claimed_owner: Option<&str>,
    fields: TaskFields,
) -> Result<Task, AppError> {
    let task = load_owned(conn, subject, task_id, Action::Update).await?;

    if let Some(claimed) = claimed_owner {
        ensure_owner(Some(claimed), &task.user_id)
            .map_err(|e| denied(e, subject, Action::Update))?;
    }

    let updated = tasks_repo::update_task(conn, &task.id, fields).await?;
    info!(task_id = %updated.id, "Task updated");
    Ok(updated)
}

pub async fn delete_task<C: ConnectionTrait>(
    conn: &C,
    subject: Option<&str>,
    task_id: &str,
) -> Result<(), AppError> {
    let task = load_owned(conn, subject, task_id, Action::Delete).await?;

    if !tasks_repo::delete_task(conn, &task.id).await? {
        return Err(task_not_found());
    }
    info!(task_id = %task.id, "Task deleted");
    Ok(())
}
