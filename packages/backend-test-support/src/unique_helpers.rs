//! Test helpers for generating unique test data
//!
//! ULID-suffixed values keep tests isolated from each other even when they
//! share a store.

use ulid::Ulid;

/// Generate a unique string with the given prefix
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let id1 = unique_str("user");
/// let id2 = unique_str("user");
/// assert_ne!(id1, id2);
/// assert!(id1.starts_with("user-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique quote/user name with the given prefix, lowercase so it
/// is safe to embed in a URL path segment.
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_name;
///
/// let name = unique_name("yoda");
/// assert!(name.starts_with("yoda-"));
/// assert_eq!(name, name.to_lowercase());
/// ```
pub fn unique_name(prefix: &str) -> String {
    unique_str(prefix).to_lowercase()
}
