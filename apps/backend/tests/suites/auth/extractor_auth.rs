use actix_web::http::header::{AUTHORIZATION, WWW_AUTHENTICATE};
use actix_web::{test, web, HttpResponse};
use serde_json::json;
use taskline_backend::{AppError, AuthContext, SecurityConfig};

use crate::common::assert_problem_details_structure;
use crate::support::auth::{bearer_header, mint_expired_token, mint_test_token};
use crate::support::create_test_app;
use crate::support::test_state::{build_state_without_db, test_security};

async fn whoami(auth: AuthContext) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(json!({
        "sub": auth.subject_id,
        "email": auth.email,
    })))
}

fn whoami_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/whoami", web::get().to(whoami));
}

#[actix_web::test]
async fn missing_header_is_401() -> Result<(), AppError> {
    let state = build_state_without_db().await?;
    let app = create_test_app(state).with_routes(whoami_routes).build().await;

    let req = test::TestRequest::get().uri("/whoami").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.headers().get(WWW_AUTHENTICATE).unwrap(), "Bearer");

    assert_problem_details_structure(
        resp,
        401,
        "UNAUTHORIZED_MISSING_BEARER",
        "Missing or malformed Bearer token",
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn malformed_headers_are_401_missing_bearer() -> Result<(), AppError> {
    let state = build_state_without_db().await?;
    let app = create_test_app(state).with_routes(whoami_routes).build().await;

    for value in ["Bearer", "Basic dXNlcjpwYXNz", "Token abc", "Bearer a b"] {
        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header((AUTHORIZATION, value))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details_structure(
            resp,
            401,
            "UNAUTHORIZED_MISSING_BEARER",
            "Missing or malformed Bearer token",
        )
        .await;
    }
    Ok(())
}

#[actix_web::test]
async fn foreign_secret_is_401_invalid_jwt() -> Result<(), AppError> {
    let state = build_state_without_db().await?;
    let app = create_test_app(state).with_routes(whoami_routes).build().await;

    let other = SecurityConfig::new("some-other-deployment-secret");
    let req = test::TestRequest::get()
        .uri("/whoami")
        .insert_header((AUTHORIZATION, bearer_header("u-1", "u@x.io", &other)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_structure(resp, 401, "UNAUTHORIZED_INVALID_JWT", "Invalid JWT").await;
    Ok(())
}

#[actix_web::test]
async fn expired_token_is_401_expired() -> Result<(), AppError> {
    let security = test_security();
    let state = crate::support::test_state::build_test_state_with(security.clone()).await?;
    let app = create_test_app(state).with_routes(whoami_routes).build().await;

    let token = mint_expired_token("u-1", "u@x.io", &security);
    let req = test::TestRequest::get()
        .uri("/whoami")
        .insert_header((AUTHORIZATION, format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_structure(resp, 401, "UNAUTHORIZED_EXPIRED_JWT", "Token expired").await;
    Ok(())
}

#[actix_web::test]
async fn garbage_token_is_401_invalid_jwt() -> Result<(), AppError> {
    let state = build_state_without_db().await?;
    let app = create_test_app(state).with_routes(whoami_routes).build().await;

    let req = test::TestRequest::get()
        .uri("/whoami")
        .insert_header((AUTHORIZATION, "Bearer not-a-jwt"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_structure(resp, 401, "UNAUTHORIZED_INVALID_JWT", "Invalid JWT").await;
    Ok(())
}

#[actix_web::test]
async fn valid_token_yields_issuing_subject() -> Result<(), AppError> {
    let security = test_security();
    let state = crate::support::test_state::build_test_state_with(security.clone()).await?;
    let app = create_test_app(state).with_routes(whoami_routes).build().await;

    let token = mint_test_token("subject-42", "s42@example.test", &security);
    let req = test::TestRequest::get()
        .uri("/whoami")
        .insert_header((AUTHORIZATION, format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["sub"], "subject-42");
    assert_eq!(body["email"], "s42@example.test");
    Ok(())
}
