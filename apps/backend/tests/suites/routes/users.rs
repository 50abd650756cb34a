use actix_web::http::header::AUTHORIZATION;
use actix_web::test;
use backend_test_support::unique_helpers::unique_email;
use serde_json::json;
use taskline_backend::repos::tasks as tasks_repo;
use taskline_backend::AppError;

use crate::common::{assert_problem_details_structure, read_envelope};
use crate::support::auth::bearer_header;
use crate::support::factory::{create_test_task, create_test_user};
use crate::support::test_state::{build_test_state, build_test_state_with, test_security};
use crate::support::create_test_app;

#[actix_web::test]
async fn create_then_fetch_user() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;
    let email = unique_email("create");

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({ "email": email }))
        .to_request();
    let created = read_envelope(test::call_service(&app, req).await, 201).await;
    let user = &created["payload"][0];
    assert_eq!(user["email"], email.as_str());
    let id = user["id"].as_str().expect("id string");
    assert_eq!(id.len(), 36, "ids are hyphenated uuids");

    let req = test::TestRequest::get()
        .uri(&format!("/api/users/{email}"))
        .to_request();
    let fetched = read_envelope(test::call_service(&app, req).await, 200).await;
    assert_eq!(fetched["payload"], json!([{ "id": id, "email": email }]));
    Ok(())
}

#[actix_web::test]
async fn duplicate_email_is_409() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let existing = create_test_user(&state, "dup").await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({ "email": existing.email }))
        .to_request();
    assert_problem_details_structure(
        test::call_service(&app, req).await,
        409,
        "USER_ALREADY_EXISTS",
        "User already exists",
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn invalid_email_is_422_on_create_and_get() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({ "email": "nope" }))
        .to_request();
    assert_problem_details_structure(
        test::call_service(&app, req).await,
        422,
        "INVALID_EMAIL",
        "Invalid email format",
    )
    .await;

    let req = test::TestRequest::get().uri("/api/users/nope").to_request();
    assert_problem_details_structure(
        test::call_service(&app, req).await,
        422,
        "INVALID_EMAIL",
        "Invalid email format",
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn unknown_user_is_404() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/users/{}", unique_email("ghost")))
        .to_request();
    assert_problem_details_structure(
        test::call_service(&app, req).await,
        404,
        "USER_NOT_FOUND",
        "User not found",
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn delete_requires_token() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let user = create_test_user(&state, "anon").await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/users/{}", user.email))
        .to_request();
    assert_problem_details_structure(
        test::call_service(&app, req).await,
        401,
        "UNAUTHORIZED_MISSING_BEARER",
        "Missing or malformed Bearer token",
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn self_delete_removes_user_and_tasks() -> Result<(), AppError> {
    let security = test_security();
    let state = build_test_state_with(security.clone()).await?;
    let user = create_test_user(&state, "leaver").await;
    create_test_task(&state, &user).await;
    create_test_task(&state, &user).await;
    let db = state.db.clone().expect("db");
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/users/{}", user.email))
        .insert_header((AUTHORIZATION, bearer_header(&user.id, &user.email, &security)))
        .to_request();
    let body = read_envelope(test::call_service(&app, req).await, 200).await;
    assert_eq!(body["message"], "User successfully deleted");
    assert!(body.get("payload").is_none());

    let remaining = tasks_repo::list_for_user(&db, &user.id).await?;
    assert!(remaining.is_empty(), "tasks go with their owner");

    let req = test::TestRequest::get()
        .uri(&format!("/api/users/{}", user.email))
        .to_request();
    assert_problem_details_structure(
        test::call_service(&app, req).await,
        404,
        "USER_NOT_FOUND",
        "User not found",
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn deleting_missing_user_is_404_before_403() -> Result<(), AppError> {
    let security = test_security();
    let state = build_test_state_with(security.clone()).await?;
    let caller = create_test_user(&state, "caller").await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/users/{}", unique_email("ghost")))
        .insert_header((AUTHORIZATION, bearer_header(&caller.id, &caller.email, &security)))
        .to_request();
    assert_problem_details_structure(
        test::call_service(&app, req).await,
        404,
        "USER_NOT_FOUND",
        "User not found",
    )
    .await;
    Ok(())
}
