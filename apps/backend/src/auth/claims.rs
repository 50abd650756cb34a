//! Identity claim carried inside access tokens.

use serde::{Deserialize, Serialize};

/// Wire form of the identity claim. Immutable once signed.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Subject: `users.id`
    pub sub: String,
    pub email: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}
