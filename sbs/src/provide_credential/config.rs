use std::sync::Arc;

use jcs_sbs_core::{Context, ProvideCredential, Result};

use crate::config::Config;
use crate::credential::Credential;

/// ConfigCredentialProvider resolves a credential from a [`Config`],
/// filling each unset field from the environment and then from the
/// properties file.
///
/// The precedence is per field, first non-empty wins: an explicit access
/// key combined with a secret key from the environment is a valid outcome.
#[derive(Debug)]
pub struct ConfigCredentialProvider {
    config: Arc<Config>,
}

impl ConfigCredentialProvider {
    /// Create a new loader via config.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let config = self
            .config
            .as_ref()
            .clone()
            .from_env(ctx)
            .from_config_file(ctx)?;

        if let (Some(ak), Some(sk)) = (&config.access_key, &config.secret_key) {
            return Ok(Some(Credential::new(ak.clone(), sk.clone())));
        }

        Ok(None)
    }
}
