use actix_web::test;
use backend_test_support::unique_helpers::unique_email;
use serde_json::json;
use taskline_backend::AppError;

use crate::common::{assert_problem_details_structure, read_envelope};
use crate::support::test_state::{build_test_state, build_test_state_with_body_limit};
use crate::support::create_test_app;

#[actix_web::test]
async fn oversized_body_is_413_before_validation() -> Result<(), AppError> {
    let state = build_test_state_with_body_limit(1024).await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    // Would be a 422 INVALID_EMAIL if the body were read and parsed.
    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({ "email": "a".repeat(4096) }))
        .to_request();
    assert_problem_details_structure(
        test::call_service(&app, req).await,
        413,
        "PAYLOAD_TOO_LARGE",
        "Request body exceeds the 1024 byte limit",
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({ "email": unique_email("small") }))
        .to_request();
    read_envelope(test::call_service(&app, req).await, 201).await;
    Ok(())
}

#[actix_web::test]
async fn default_limit_guards_login() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/users/login")
        .set_json(json!({ "email": "a".repeat(3 * 1024 * 1024) }))
        .to_request();
    assert_problem_details_structure(
        test::call_service(&app, req).await,
        413,
        "PAYLOAD_TOO_LARGE",
        "Request body exceeds the 2097152 byte limit",
    )
    .await;
    Ok(())
}
