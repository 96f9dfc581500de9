use std::fmt::{Debug, Formatter};

use jcs_sbs_core::SigningCredential;

/// Credential for the SBS API.
#[derive(Clone)]
pub struct Credential {
    /// The JCS access key, sent as `JCSAccessKeyId` on every request.
    pub access_key: String,
    /// The JCS secret key. Never transmitted; only used to sign.
    pub secret_key: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("access_key", &redact(&self.access_key))
            .field("secret_key", &redact(&self.secret_key))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.access_key.is_empty() && !self.secret_key.is_empty()
    }
}

fn redact(value: &str) -> &str {
    if value.is_empty() {
        "EMPTY"
    } else {
        "***"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_never_prints_keys() {
        let cred = Credential::new("AK123", "very-secret");
        let out = format!("{cred:?}");

        assert!(!out.contains("AK123"));
        assert!(!out.contains("very-secret"));
    }

    #[test]
    fn test_validity_requires_both_keys() {
        assert!(Credential::new("ak", "sk").is_valid());
        assert!(!Credential::new("", "sk").is_valid());
        assert!(!Credential::new("ak", "").is_valid());
    }
}
