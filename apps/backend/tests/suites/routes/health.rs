use actix_web::test;
use serde_json::{json, Value};
use taskline_backend::AppError;

use crate::support::test_state::{build_state_without_db, build_test_state};
use crate::support::create_test_app;

#[actix_web::test]
async fn greeting_endpoint() -> Result<(), AppError> {
    let state = build_state_without_db().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/api/health-check").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "status": 200, "message": "API - 👋🌎🌍🌏" }));
    Ok(())
}

#[actix_web::test]
async fn readiness_reports_db_and_migrations() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "ok");
    assert!(body.get("db_error").is_none());
    assert!(!body["app_version"].as_str().unwrap_or_default().is_empty());
    let migrations = body["migrations"].as_str().expect("migrations string");
    assert!(migrations.starts_with('m'), "latest migration name, got {migrations}");
    assert!(body["time"].is_string());
    Ok(())
}

#[actix_web::test]
async fn readiness_degrades_without_db() -> Result<(), AppError> {
    let state = build_state_without_db().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["db"], "error");
    assert!(body["db_error"].is_string());
    assert_eq!(body["migrations"], "unknown");
    Ok(())
}
