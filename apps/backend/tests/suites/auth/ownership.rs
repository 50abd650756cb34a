//! Token of subject A against resources owned by B.

use actix_web::http::header::AUTHORIZATION;
use actix_web::test;
use serde_json::json;
use taskline_backend::AppError;

use crate::common::{assert_problem_details_structure, read_envelope};
use crate::support::auth::bearer_header;
use crate::support::factory::{create_test_task, create_test_user};
use crate::support::test_state::{build_test_state_with, test_security};
use crate::support::create_test_app;

#[actix_web::test]
async fn non_owner_cannot_mutate_or_read_task() -> Result<(), AppError> {
    let security = test_security();
    let state = build_test_state_with(security.clone()).await?;
    let alice = create_test_user(&state, "alice").await;
    let bob = create_test_user(&state, "bob").await;
    let task = create_test_task(&state, &bob).await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let auth = bearer_header(&alice.id, &alice.email, &security);
    let uri = format!("/api/tasks/{}", task.id);

    let req = test::TestRequest::put()
        .uri(&uri)
        .insert_header((AUTHORIZATION, auth.clone()))
        .set_json(json!({ "title": "hijack", "description": "", "completed": true }))
        .to_request();
    assert_problem_details_structure(
        test::call_service(&app, req).await,
        403,
        "FORBIDDEN",
        "Unauthorized to update this task",
    )
    .await;

    let req = test::TestRequest::delete()
        .uri(&uri)
        .insert_header((AUTHORIZATION, auth.clone()))
        .to_request();
    assert_problem_details_structure(
        test::call_service(&app, req).await,
        403,
        "FORBIDDEN",
        "Unauthorized to delete this task",
    )
    .await;

    let req = test::TestRequest::get()
        .uri(&uri)
        .insert_header((AUTHORIZATION, auth))
        .to_request();
    assert_problem_details_structure(
        test::call_service(&app, req).await,
        403,
        "FORBIDDEN",
        "Unauthorized to view this task",
    )
    .await;

    // The task is untouched and still readable by its owner.
    let req = test::TestRequest::get()
        .uri(&uri)
        .insert_header((AUTHORIZATION, bearer_header(&bob.id, &bob.email, &security)))
        .to_request();
    let body = read_envelope(test::call_service(&app, req).await, 200).await;
    assert_eq!(body["payload"][0]["title"], task.title);
    assert_eq!(body["payload"][0]["completed"], false);
    Ok(())
}

#[actix_web::test]
async fn owner_passes_guard() -> Result<(), AppError> {
    let security = test_security();
    let state = build_test_state_with(security.clone()).await?;
    let alice = create_test_user(&state, "alice").await;
    let task = create_test_task(&state, &alice).await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/tasks/{}", task.id))
        .insert_header((AUTHORIZATION, bearer_header(&alice.id, &alice.email, &security)))
        .set_json(json!({ "title": "renamed", "description": "d", "completed": true }))
        .to_request();
    let body = read_envelope(test::call_service(&app, req).await, 200).await;
    assert_eq!(body["payload"][0]["title"], "renamed");
    assert_eq!(body["payload"][0]["userId"], alice.id);
    Ok(())
}

#[actix_web::test]
async fn body_user_id_cannot_reassign_ownership() -> Result<(), AppError> {
    let security = test_security();
    let state = build_test_state_with(security.clone()).await?;
    let alice = create_test_user(&state, "alice").await;
    let bob = create_test_user(&state, "bob").await;
    let task = create_test_task(&state, &alice).await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/tasks/{}", task.id))
        .insert_header((AUTHORIZATION, bearer_header(&alice.id, &alice.email, &security)))
        .set_json(json!({
            "userId": bob.id,
            "title": "give away",
            "description": "",
            "completed": false
        }))
        .to_request();
    assert_problem_details_structure(
        test::call_service(&app, req).await,
        403,
        "FORBIDDEN",
        "Unauthorized to update this task",
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn cannot_create_task_for_someone_else() -> Result<(), AppError> {
    let security = test_security();
    let state = build_test_state_with(security.clone()).await?;
    let alice = create_test_user(&state, "alice").await;
    let bob = create_test_user(&state, "bob").await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/tasks")
        .insert_header((AUTHORIZATION, bearer_header(&alice.id, &alice.email, &security)))
        .set_json(json!({
            "userId": bob.id,
            "title": "for bob",
            "description": "",
            "completed": false
        }))
        .to_request();
    assert_problem_details_structure(
        test::call_service(&app, req).await,
        403,
        "FORBIDDEN",
        "Unauthorized to create this task",
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn cannot_list_or_delete_another_users_data() -> Result<(), AppError> {
    let security = test_security();
    let state = build_test_state_with(security.clone()).await?;
    let alice = create_test_user(&state, "alice").await;
    let bob = create_test_user(&state, "bob").await;
    let app = create_test_app(state).with_prod_routes().build().await;
    let auth = bearer_header(&alice.id, &alice.email, &security);

    let req = test::TestRequest::get()
        .uri(&format!("/api/tasks/users/{}", bob.id))
        .insert_header((AUTHORIZATION, auth.clone()))
        .to_request();
    assert_problem_details_structure(
        test::call_service(&app, req).await,
        403,
        "FORBIDDEN",
        "Unauthorized to view these tasks",
    )
    .await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/users/{}", bob.email))
        .insert_header((AUTHORIZATION, auth))
        .to_request();
    assert_problem_details_structure(
        test::call_service(&app, req).await,
        403,
        "FORBIDDEN",
        "Unauthorized to delete this user",
    )
    .await;
    Ok(())
}
