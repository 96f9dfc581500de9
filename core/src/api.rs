use std::fmt::Debug;

use log::debug;

use crate::{Context, Result};

/// A credential usable for signing.
pub trait SigningCredential: Clone + Debug + Send + Sync + 'static {
    /// Check whether the credential is complete enough to sign with.
    fn is_valid(&self) -> bool;
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(cred) = self else {
            return false;
        };

        cred.is_valid()
    }
}

/// ProvideCredential resolves a credential from some source: caller-supplied
/// values, environment variables, a configuration file.
///
/// Returning `Ok(None)` means "this source has nothing", which lets a chain
/// move on to the next provider; errors abort resolution.
pub trait ProvideCredential: Debug + Send + Sync + 'static {
    /// Credential returned by this provider.
    type Credential: SigningCredential;

    /// Resolve a credential from this source.
    fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}

/// A chain of credential providers, queried in order; the first provider
/// that yields a credential wins.
pub struct ProvideCredentialChain<C: SigningCredential> {
    providers: Vec<Box<dyn ProvideCredential<Credential = C>>>,
}

impl<C: SigningCredential> Debug for ProvideCredentialChain<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProvideCredentialChain")
            .field("providers", &self.providers)
            .finish()
    }
}

impl<C: SigningCredential> Default for ProvideCredentialChain<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: SigningCredential> ProvideCredentialChain<C> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Append a provider to the end of the chain.
    pub fn push(mut self, provider: impl ProvideCredential<Credential = C> + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Insert a provider at the front of the chain, to be tried first.
    pub fn push_front(
        mut self,
        provider: impl ProvideCredential<Credential = C> + 'static,
    ) -> Self {
        self.providers.insert(0, Box::new(provider));
        self
    }
}

impl<C: SigningCredential> ProvideCredential for ProvideCredentialChain<C> {
    type Credential = C;

    fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        for provider in &self.providers {
            debug!("trying credential provider: {provider:?}");
            if let Some(cred) = provider.provide_credential(ctx)? {
                return Ok(Some(cred));
            }
        }

        Ok(None)
    }
}
