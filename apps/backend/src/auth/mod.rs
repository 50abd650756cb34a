//! Credential issuer, token verifier and ownership guard.

pub mod bearer;
pub mod claims;
pub mod error;
pub mod jwt;
pub mod ownership;

pub use claims::Claims;
pub use error::{AuthError, TokenRejection};
pub use jwt::{mint_access_token, verify_access_token};
pub use ownership::{ensure_owner, ensure_owns, OwnedResource};
