//! DTOs for users_sea adapter.

#[derive(Debug, Clone)]
pub struct UserCreate {
    pub email: String,
}

impl UserCreate {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}
