//! Ownership guard: a subject may only touch resources it owns.

use super::error::AuthError;

/// A persisted resource with exactly one owner.
pub trait OwnedResource {
    fn owner_id(&self) -> &str;
}

/// Compare the authenticated subject to the persisted owner.
///
/// Pure comparison. `owner` must come from storage, never from the request body.
pub fn ensure_owner(subject: Option<&str>, owner: &str) -> Result<(), AuthError> {
    let subject = subject.ok_or(AuthError::Unauthenticated)?;
    if subject == owner {
        Ok(())
    } else {
        Err(AuthError::Forbidden)
    }
}

/// [`ensure_owner`] against a loaded resource.
pub fn ensure_owns<R: OwnedResource + ?Sized>(
    subject: Option<&str>,
    resource: &R,
) -> Result<(), AuthError> {
    ensure_owner(subject, resource.owner_id())
}
