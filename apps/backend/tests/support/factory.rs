use backend_test_support::unique_helpers::{unique_email, unique_str};
use taskline_backend::repos::tasks::{self as tasks_repo, Task, TaskFields};
use taskline_backend::repos::users::{self as users_repo, User};
use taskline_backend::AppState;

fn db(state: &AppState) -> &sea_orm::DatabaseConnection {
    state.db.as_ref().expect("test state should have a database")
}

pub async fn create_test_user(state: &AppState, prefix: &str) -> User {
    users_repo::create_user(db(state), &unique_email(prefix))
        .await
        .expect("should create user")
}

pub async fn create_test_task(state: &AppState, owner: &User) -> Task {
    tasks_repo::create_task(
        db(state),
        &owner.id,
        TaskFields {
            title: unique_str("task"),
            description: "seeded by factory".to_string(),
            completed: false,
        },
    )
    .await
    .expect("should create task")
}
