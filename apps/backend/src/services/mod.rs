//! Application services: validation, lookups and the ownership guard
//! wrapped around the repositories. Everything returns `AppError`.

pub mod tasks;
pub mod users;
