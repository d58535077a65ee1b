//! Unique identity fixtures so tests sharing a database never collide.

use ulid::Ulid;

/// An identity-provider style user id, e.g. `user_01HV...`.
///
/// ```
/// use backend_test_support::unique_helpers::unique_user_id;
///
/// let a = unique_user_id();
/// let b = unique_user_id();
/// assert_ne!(a, b);
/// assert!(a.starts_with("user_"));
/// ```
pub fn unique_user_id() -> String {
    format!("user_{}", Ulid::new())
}

/// A unique address on a reserved test domain.
///
/// ```
/// use backend_test_support::unique_helpers::unique_email;
///
/// let email = unique_email("diner");
/// assert!(email.starts_with("diner-"));
/// assert!(email.ends_with("@example.test"));
/// ```
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.test", prefix, Ulid::new().to_string().to_lowercase())
}
