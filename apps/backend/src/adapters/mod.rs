//! SeaORM adapters. Functions take any `ConnectionTrait` so they run on a
//! pool or inside a transaction, and return raw `DbErr`.

pub mod tasks_sea;
pub mod users_sea;
