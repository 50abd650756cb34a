pub mod auth_context;
pub mod validated_json;

pub use auth_context::AuthContext;
pub use validated_json::ValidatedJson;
