//! Shared-secret access gate.

/// Checks caller credentials against the single configured secret.
///
/// The expected secret is fixed at construction and never changes.
#[derive(Clone)]
pub struct AccessGate {
    expected: Box<[u8]>,
}

impl AccessGate {
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into().into_bytes().into_boxed_slice(),
        }
    }

    /// Returns true iff `credential` equals the configured secret.
    ///
    /// Runs in time dependent only on the credential length, not on where the
    /// first mismatching byte is. An empty secret never authorizes anything.
    pub fn authorize(&self, credential: Option<&str>) -> bool {
        let Some(credential) = credential else {
            return false;
        };
        if self.expected.is_empty() {
            return false;
        }
        constant_time_eq(credential.as_bytes(), &self.expected)
    }
}

impl std::fmt::Debug for AccessGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessGate").finish_non_exhaustive()
    }
}

fn constant_time_eq(candidate: &[u8], expected: &[u8]) -> bool {
    let mut diff = candidate.len() ^ expected.len();
    for (i, byte) in candidate.iter().enumerate() {
        // Wraps around so every candidate byte is compared against something
        let other = expected[i % expected.len()];
        diff |= usize::from(byte ^ other);
    }
    diff == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorize_exact_match() {
        let gate = AccessGate::new("s3cret");
        assert!(gate.authorize(Some("s3cret")));
    }

    #[test]
    fn test_authorize_rejects_mismatch() {
        let gate = AccessGate::new("s3cret");
        assert!(!gate.authorize(Some("s3creT")));
        assert!(!gate.authorize(Some("s3cret ")));
        assert!(!gate.authorize(Some("s3cre")));
        assert!(!gate.authorize(Some("")));
    }

    #[test]
    fn test_authorize_missing_credential() {
        let gate = AccessGate::new("s3cret");
        assert!(!gate.authorize(None));
    }

    #[test]
    fn test_empty_secret_never_authorizes() {
        let gate = AccessGate::new("");
        assert!(!gate.authorize(Some("")));
        assert!(!gate.authorize(Some("anything")));
    }

    #[test]
    fn test_prefix_of_secret_is_rejected() {
        // Same bytes repeated: length check must still fail
        let gate = AccessGate::new("ab");
        assert!(!gate.authorize(Some("abab")));
    }

    #[test]
    fn test_debug_does_not_print_secret() {
        let gate = AccessGate::new("s3cret");
        assert!(!format!("{:?}", gate).contains("s3cret"));
    }
}
