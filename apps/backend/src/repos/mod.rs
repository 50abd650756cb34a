//! Repositories: domain models over the SeaORM adapters.
//!
//! Generic over `ConnectionTrait`; every `DbErr` leaves as a `DomainError`.

pub mod tasks;
pub mod users;
