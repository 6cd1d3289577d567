use crate::DEFAULT_READONLY_ROLES;

/// True if any of `roles` is a configured read-only role or a built-in one.
///
/// Comparison is exact. Read-only users never get a private tenant.
pub fn is_readonly<R: AsRef<str>>(roles: &[R], configured: &[String]) -> bool {
    roles.iter().map(AsRef::as_ref).any(|role| {
        configured.iter().any(|readonly| readonly == role) || DEFAULT_READONLY_ROLES.contains(&role)
    })
}
