//! Success envelope: `{ status, message?, payload? }`.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<T>,
}

/// Respond with `payload` under `status`.
pub fn payload<T: Serialize>(status: StatusCode, payload: T) -> HttpResponse {
    HttpResponse::build(status).json(ApiResponse {
        status: status.as_u16(),
        message: None,
        payload: Some(payload),
    })
}

/// Respond with a bare message under 200.
pub fn message(message: impl Into<String>) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::<()> {
        status: StatusCode::OK.as_u16(),
        message: Some(message.into()),
        payload: None,
    })
}
