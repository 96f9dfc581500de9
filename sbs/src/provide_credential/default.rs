use std::sync::Arc;

use jcs_sbs_core::{Context, ProvideCredential, ProvideCredentialChain, Result};

use crate::config::Config;
use crate::credential::Credential;
use crate::provide_credential::ConfigCredentialProvider;

/// DefaultCredentialProvider is what the client constructs with.
///
/// Resolution order, per field, first non-empty wins:
///
/// 1. Explicit [`Config`] values
/// 2. Environment variables (`ACCESS_KEY`, `SECRET_KEY`)
/// 3. The properties file
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain<Credential>,
}

impl DefaultCredentialProvider {
    /// Create a new DefaultCredentialProvider.
    pub fn new(config: Config) -> Self {
        let chain =
            ProvideCredentialChain::new().push(ConfigCredentialProvider::new(Arc::new(config)));

        Self { chain }
    }

    /// Add a credential provider in front of the default resolution.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use jcs_sbs::{Config, DefaultCredentialProvider, StaticCredentialProvider};
    ///
    /// let provider = DefaultCredentialProvider::new(Config::default())
    ///     .push_front(StaticCredentialProvider::new("access_key", "secret_key"));
    /// ```
    pub fn push_front(
        mut self,
        provider: impl ProvideCredential<Credential = Credential> + 'static,
    ) -> Self {
        self.chain = self.chain.push_front(provider);
        self
    }
}

impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx)
    }
}
