//! Unique test data built from ULIDs so tests sharing a database never collide.

use ulid::Ulid;

/// `{prefix}-{ulid}`
///
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("task");
/// let b = unique_str("task");
/// assert_ne!(a, b);
/// assert!(a.starts_with("task-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Lower-case `{prefix}-{ulid}@example.test`, valid under the backend's email rule.
///
/// ```
/// use backend_test_support::unique_helpers::unique_email;
///
/// let email = unique_email("owner");
/// assert!(email.starts_with("owner-"));
/// assert!(email.ends_with("@example.test"));
/// ```
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.test", prefix, Ulid::new().to_string().to_lowercase())
}
