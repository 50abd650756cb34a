use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::response;
use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::{AuthContext, ValidatedJson};
use crate::repos::tasks::{Task, TaskFields};
use crate::services::tasks as tasks_service;
use crate::state::app_state::AppState;

/// Create/update body. `userId` is optional and only ever checked, never trusted.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskBody {
    #[serde(default)]
    pub user_id: Option<String>,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl TaskBody {
    fn into_parts(self) -> (Option<String>, TaskFields) {
        (
            self.user_id,
            TaskFields {
                title: self.title,
                description: self.description,
                completed: self.completed,
            },
        )
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            user_id: task.user_id,
            title: task.title,
            description: task.description,
            completed: task.completed,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}

async fn create_task(
    auth: AuthContext,
    app_state: web::Data<AppState>,
    body: ValidatedJson<TaskBody>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let (claimed_owner, fields) = body.into_inner().into_parts();
    let task =
        tasks_service::create_task(db, auth.subject(), claimed_owner.as_deref(), fields).await?;
    Ok(response::payload(
        StatusCode::CREATED,
        vec![TaskResponse::from(task)],
    ))
}

async fn list_user_tasks(
    auth: AuthContext,
    app_state: web::Data<AppState>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let tasks = tasks_service::list_tasks_for_user(db, auth.subject(), &user_id).await?;
    let payload: Vec<TaskResponse> = tasks.into_iter().map(TaskResponse::from).collect();
    Ok(response::payload(StatusCode::OK, payload))
}

async fn get_task(
    auth: AuthContext,
    app_state: web::Data<AppState>,
    task_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let task = tasks_service::get_task(db, auth.subject(), &task_id).await?;
    Ok(response::payload(StatusCode::OK, vec![TaskResponse::from(task)]))
}

async fn update_task(
    auth: AuthContext,
    app_state: web::Data<AppState>,
    task_id: web::Path<String>,
    body: ValidatedJson<TaskBody>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let (claimed_owner, fields) = body.into_inner().into_parts();
    let task = tasks_service::update_task(
        db,
        auth.subject(),
        &task_id,
        claimed_owner.as_deref(),
        fields,
    )
    .await?;
    Ok(response::payload(StatusCode::OK, vec![TaskResponse::from(task)]))
}

async fn delete_task(
    auth: AuthContext,
    app_state: web::Data<AppState>,
    task_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    tasks_service::delete_task(db, auth.subject(), &task_id).await?;
    Ok(response::message("Task successfully deleted"))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(create_task))
        .route("/users/{user_id}", web::get().to(list_user_tasks))
        .route("/{task_id}", web::get().to(get_task))
        .route("/{task_id}", web::put().to(update_task))
        .route("/{task_id}", web::delete().to(delete_task));
}
