use std::fmt;

/// A wrapper that prevents accidental exposure of credential material.
///
/// Account records keep their password hash in a `Secret<String>`. The hash
/// is opaque and must never reach logs or rendered responses, so the wrapped
/// value can only be read through [`expose_secret`](Self::expose_secret).
///
/// # Security Properties
///
/// - Does NOT implement `Deref`, `AsRef`, `Borrow`, `Serialize` or `Copy`
/// - Debug and Display output is always `[REDACTED]`
/// - No type information is leaked in formatted output
///
/// # Examples
///
/// ```
/// use account_core::Secret;
///
/// let hash = Secret::new("$argon2id$v=19$m=19456,t=2,p=1$...".to_string());
///
/// assert_eq!(format!("{:?}", hash), "[REDACTED]");
/// assert_eq!(format!("{}", hash), "[REDACTED]");
/// assert!(hash.expose_secret().starts_with("$argon2id$"));
/// ```
// BREAKING CHANGE WARNING: Do NOT derive Serialize or Default.
// A serialized Secret would put the credential hash on the wire (CWE-200).
#[derive(Clone)]
pub struct Secret<T> {
    // BREAKING CHANGE WARNING: This field MUST remain private.
    inner: T,
}

impl<T> Secret<T> {
    /// Wraps a sensitive value in a `Secret`.
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }

    /// Explicitly exposes the secret value.
    ///
    /// # Security Warning
    ///
    /// The verbose name is intentional. Never log or render the returned value.
    pub fn expose_secret(&self) -> &T {
        &self.inner
    }

    /// Replaces the wrapped value, dropping the previous one.
    pub fn replace(&mut self, value: T) {
        self.inner = value;
    }
}

impl<T: PartialEq> Secret<T> {
    /// Compares the wrapped value without exposing it.
    pub fn matches(&self, other: &T) -> bool {
        &self.inner == other
    }
}

// BREAKING CHANGE WARNING: Debug and Display MUST unconditionally return "[REDACTED]".
// Account records are logged with `{:?}` on failure paths (CWE-532).

impl<T> fmt::Debug for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl<T> fmt::Display for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_redacts_debug() {
        let hash = Secret::new("$argon2id$hunter2".to_string());
        let debug_output = format!("{:?}", hash);

        assert_eq!(debug_output, "[REDACTED]");
        assert!(!debug_output.contains("hunter2"));
        assert!(!debug_output.contains("String")); // No type leak
    }

    #[test]
    fn secret_redacts_display() {
        let hash = Secret::new("$2a$10$onMfkmQZtlkOfnZJe7Gaie");
        let display_output = format!("{}", hash);

        assert_eq!(display_output, "[REDACTED]");
        assert!(!display_output.contains("$2a$"));
    }

    #[test]
    fn secret_exposes_when_explicit() {
        let secret = Secret::new(42);
        assert_eq!(*secret.expose_secret(), 42);
    }

    #[test]
    fn secret_replace_swaps_value() {
        let mut secret = Secret::new("old".to_string());
        secret.replace("new".to_string());

        assert_eq!(secret.expose_secret(), "new");
        assert!(secret.matches(&"new".to_string()));
        assert!(!secret.matches(&"old".to_string()));
    }

    #[test]
    fn cloned_secret_stays_redacted() {
        let secret = Secret::new("acme".to_string());
        let copy = secret.clone();

        assert_eq!(format!("{:?}", copy), "[REDACTED]");
        assert_eq!(copy.expose_secret(), secret.expose_secret());
    }
}
