use jcs_sbs_core::{Context, ProvideCredential, Result};

use crate::credential::Credential;

/// StaticCredentialProvider serves a fixed credential.
///
/// Mostly useful in tests and in custom chains where the keys come from
/// somewhere the SDK knows nothing about.
#[derive(Debug)]
pub struct StaticCredentialProvider {
    credential: Credential,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider.
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            credential: Credential::new(access_key, secret_key),
        }
    }
}

impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(self.credential.clone()))
    }
}
