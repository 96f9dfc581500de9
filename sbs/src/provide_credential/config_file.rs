use log::debug;

use jcs_sbs_core::{Context, ProvideCredential, Result};

use crate::config::read_properties;
use crate::constants::{DEFAULT_CONFIG_FILE, ENV_CONFIG_FILE};
use crate::credential::Credential;

/// ConfigFileCredentialProvider loads credentials from a properties file.
///
/// The file location is the explicit path if one was given, then the
/// `JCS_CONFIG_FILE` env value, then `fixtures/config.properties`. A file
/// that does not exist yields nothing; a malformed file is an error.
#[derive(Debug, Default)]
pub struct ConfigFileCredentialProvider {
    path: Option<String>,
}

impl ConfigFileCredentialProvider {
    /// Create a provider using the default file location.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit file location.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl ProvideCredential for ConfigFileCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let path = self
            .path
            .clone()
            .or_else(|| ctx.env_var(ENV_CONFIG_FILE))
            .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());

        let Some(values) = read_properties(&path)? else {
            return Ok(None);
        };

        match (values.access_key, values.secret_key) {
            (Some(ak), Some(sk)) => {
                debug!("loaded credential from properties file {path}");
                Ok(Some(Credential::new(ak, sk)))
            }
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_loads_branch_selected_section() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[branch]\nenv = prod\n\n[prod]\nACCESS_KEY = file_ak\nSECRET_KEY = file_sk\n\n[staging]\nACCESS_KEY = other"
        )
        .unwrap();

        let ctx = Context::new();
        let cred = ConfigFileCredentialProvider::new()
            .with_path(file.path().to_string_lossy())
            .provide_credential(&ctx)
            .unwrap()
            .unwrap();

        assert_eq!(cred.access_key, "file_ak");
        assert_eq!(cred.secret_key, "file_sk");
    }

    #[test]
    fn test_missing_file_yields_nothing() {
        let ctx = Context::new();
        let cred = ConfigFileCredentialProvider::new()
            .with_path("/definitely/not/here.properties")
            .provide_credential(&ctx)
            .unwrap();

        assert!(cred.is_none());
    }
}
