//! DTOs for tasks_sea adapter.

#[derive(Debug, Clone)]
pub struct TaskCreate {
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

/// Mutable fields only; the owner column is never part of an update.
#[derive(Debug, Clone)]
pub struct TaskUpdate {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
}
