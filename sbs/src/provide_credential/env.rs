use log::debug;

use jcs_sbs_core::{Context, ProvideCredential, Result};

use crate::constants::{ENV_ACCESS_KEY, ENV_SECRET_KEY};
use crate::credential::Credential;

/// EnvCredentialProvider loads credentials from environment variables.
///
/// This provider looks for:
/// - `ACCESS_KEY`: the JCS access key
/// - `SECRET_KEY`: the JCS secret key
///
/// Both must be present; otherwise the provider yields nothing.
#[derive(Debug, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let access_key = ctx.env_var(ENV_ACCESS_KEY);
        let secret_key = ctx.env_var(ENV_SECRET_KEY);

        match (access_key, secret_key) {
            (Some(ak), Some(sk)) => {
                debug!("loaded credential from environment variables");
                Ok(Some(Credential::new(ak, sk)))
            }
            _ => Ok(None),
        }
    }
}
