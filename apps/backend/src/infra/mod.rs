//! Infrastructure: connection bootstrap, state building, DB error translation.

pub mod db;
pub mod db_errors;
pub mod state;
