use actix_web::web;

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod health;
pub mod response;
pub mod tasks;
pub mod users;

/// Register every route. Shared by `main` and the test app builder.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").configure(health::configure_routes))
        .route("/api/health-check", web::get().to(health::health_check))
        .service(web::scope("/api/users").configure(users::configure_routes))
        .service(web::scope("/api/tasks").configure(tasks::configure_routes))
        .default_service(web::to(not_found));
}

async fn not_found() -> Result<actix_web::HttpResponse, AppError> {
    Err(AppError::not_found(ErrorCode::NotFound, "Route not found"))
}
