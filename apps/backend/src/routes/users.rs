use std::time::SystemTime;

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use super::response;
use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::{AuthContext, ValidatedJson};
use crate::repos::users::User;
use crate::services::users as users_service;
use crate::state::app_state::AppState;

/// `{ email }`; a missing email is treated as an invalid one.
#[derive(Debug, Deserialize)]
pub struct EmailBody {
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

async fn create_user(
    app_state: web::Data<AppState>,
    body: ValidatedJson<EmailBody>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let user = users_service::create_user(db, &body.email).await?;
    Ok(response::payload(
        StatusCode::CREATED,
        vec![UserResponse::from(user)],
    ))
}

async fn get_user(
    app_state: web::Data<AppState>,
    email: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let user = users_service::get_user_by_email(db, &email).await?;
    Ok(response::payload(StatusCode::OK, vec![UserResponse::from(user)]))
}

async fn delete_user(
    auth: AuthContext,
    app_state: web::Data<AppState>,
    email: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    users_service::delete_user(db, auth.subject(), &email).await?;
    Ok(response::message("User successfully deleted"))
}

async fn login(
    app_state: web::Data<AppState>,
    body: ValidatedJson<EmailBody>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let token = users_service::login(db, &app_state.security, &body.email, SystemTime::now()).await?;
    Ok(response::payload(StatusCode::OK, TokenResponse { token }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(create_user))
        .route("/login", web::post().to(login))
        .route("/{email}", web::get().to(get_user))
        .route("/{email}", web::delete().to(delete_user));
}
