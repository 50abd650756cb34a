use std::time::{Duration, SystemTime};

use actix_web::http::StatusCode;
use backend_test_support::unique_helpers::unique_email;
use taskline_backend::errors::ErrorCode;
use taskline_backend::repos::{tasks as tasks_repo, users as users_repo};
use taskline_backend::services::users as users_service;
use taskline_backend::{verify_access_token, AppError};

use crate::support::factory::{create_test_task, create_test_user};
use crate::support::test_state::{build_test_state, build_test_state_with, test_security};

#[tokio::test]
async fn create_rejects_duplicates() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = state.db.as_ref().expect("db");
    let email = unique_email("svc");

    let user = users_service::create_user(db, &email).await?;
    assert_eq!(user.email, email);

    let err = users_service::create_user(db, &email).await.unwrap_err();
    assert_eq!(err.status(), StatusCode::CONFLICT);
    assert_eq!(err.code(), ErrorCode::UserAlreadyExists);
    Ok(())
}

#[tokio::test]
async fn unique_index_backs_the_precheck() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = state.db.as_ref().expect("db");
    let email = unique_email("race");

    users_repo::create_user(db, &email).await?;
    let err: AppError = users_repo::create_user(db, &email).await.unwrap_err().into();
    assert_eq!(err.status(), StatusCode::CONFLICT);
    assert_eq!(err.code(), ErrorCode::UserAlreadyExists);
    Ok(())
}

#[tokio::test]
async fn login_token_expires_after_ttl() -> Result<(), AppError> {
    let security = test_security().with_token_ttl(Duration::from_secs(60));
    let state = build_test_state_with(security.clone()).await?;
    let db = state.db.as_ref().expect("db");
    let user = create_test_user(&state, "ttl").await;

    let now = SystemTime::now();
    let token = users_service::login(db, &security, &user.email, now).await?;
    let claims = verify_access_token(&token, &security).expect("fresh token verifies");
    assert_eq!(claims.exp - claims.iat, 60);

    let stale = users_service::login(db, &security, &user.email, now - Duration::from_secs(61)).await?;
    assert!(verify_access_token(&stale, &security).is_err());
    Ok(())
}

#[tokio::test]
async fn delete_is_refused_for_other_subject_and_keeps_data() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = state.db.as_ref().expect("db");
    let owner = create_test_user(&state, "owner").await;
    let intruder = create_test_user(&state, "intruder").await;
    create_test_task(&state, &owner).await;

    let err = users_service::delete_user(db, Some(&intruder.id), &owner.email)
        .await
        .unwrap_err();
    assert_eq!(err.status(), StatusCode::FORBIDDEN);

    assert!(users_repo::find_by_id(db, &owner.id).await?.is_some());
    assert_eq!(tasks_repo::list_for_user(db, &owner.id).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn delete_without_subject_is_401() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = state.db.as_ref().expect("db");
    let user = create_test_user(&state, "nosub").await;

    let err = users_service::delete_user(db, None, &user.email).await.unwrap_err();
    assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}
