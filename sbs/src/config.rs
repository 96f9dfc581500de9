use std::fmt::{Debug, Formatter};
use std::path::Path;
use std::time::Duration;

use ini::Ini;
use log::debug;

use jcs_sbs_core::{Context, Error, Result};

use crate::constants::*;

/// Config carries all the configuration for the SBS client.
///
/// Every field follows the same precedence: an explicit value set here wins,
/// then the environment, then the properties file. Resolution happens once
/// at client construction.
#[derive(Clone, Default)]
pub struct Config {
    /// `access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `ACCESS_KEY`
    /// - the properties file
    pub access_key: Option<String>,
    /// `secret_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `SECRET_KEY`
    /// - the properties file
    pub secret_key: Option<String>,
    /// `base_url` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: `BASE_URL`
    /// - the properties file
    pub base_url: Option<String>,
    /// Location of the properties file. Defaults to the
    /// `JCS_CONFIG_FILE` env value, then `fixtures/config.properties`.
    pub config_file: Option<String>,
    /// Timeout applied to every network call. The underlying client's
    /// default applies when unset.
    pub timeout: Option<Duration>,
}

impl Config {
    /// Create a new Config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set access_key.
    pub fn with_access_key(mut self, access_key: impl Into<String>) -> Self {
        self.access_key = Some(access_key.into());
        self
    }

    /// Set secret_key.
    pub fn with_secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key = Some(secret_key.into());
        self
    }

    /// Set base_url.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the properties file location.
    pub fn with_config_file(mut self, config_file: impl Into<String>) -> Self {
        self.config_file = Some(config_file.into());
        self
    }

    /// Set the network timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Fill unset fields from the environment.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(ENV_ACCESS_KEY) {
            self.access_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(ENV_SECRET_KEY) {
            self.secret_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(ENV_BASE_URL) {
            self.base_url.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(ENV_CONFIG_FILE) {
            self.config_file.get_or_insert(v);
        }

        self
    }

    /// Fill unset fields from the properties file.
    ///
    /// A missing file is not an error, the source is simply skipped. An
    /// unreadable or malformed file is a configuration error.
    pub fn from_config_file(mut self, ctx: &Context) -> Result<Self> {
        let path = self
            .config_file
            .clone()
            .or_else(|| ctx.env_var(ENV_CONFIG_FILE))
            .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());

        let Some(values) = read_properties(&path)? else {
            return Ok(self);
        };

        if let Some(v) = values.access_key {
            self.access_key.get_or_insert(v);
        }
        if let Some(v) = values.secret_key {
            self.secret_key.get_or_insert(v);
        }
        if let Some(v) = values.base_url {
            self.base_url.get_or_insert(v);
        }

        Ok(self)
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("access_key", &self.access_key.as_ref().map(|_| "***"))
            .field("secret_key", &self.secret_key.as_ref().map(|_| "***"))
            .field("base_url", &self.base_url)
            .field("config_file", &self.config_file)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// The values a properties file can contribute.
#[derive(Debug, Default)]
pub(crate) struct FileValues {
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    pub base_url: Option<String>,
}

/// Read the branch-selected section out of a properties file.
///
/// Returns `Ok(None)` when the file does not exist.
pub(crate) fn read_properties(path: &str) -> Result<Option<FileValues>> {
    if !Path::new(path).exists() {
        debug!("properties file {path} not found, skipping");
        return Ok(None);
    }

    let ini = Ini::load_from_file(path)
        .map_err(|e| Error::config_invalid(format!("failed to read properties file {path}")).with_source(e))?;

    let branch = ini
        .section(Some(CONFIG_BRANCH_SECTION))
        .and_then(|s| s.get(CONFIG_BRANCH_KEY))
        .ok_or_else(|| {
            Error::config_invalid(format!(
                "properties file {path} has no [{CONFIG_BRANCH_SECTION}] {CONFIG_BRANCH_KEY} selector"
            ))
        })?
        .to_string();

    let section = ini.section(Some(branch.as_str())).ok_or_else(|| {
        Error::config_invalid(format!("properties file {path} has no [{branch}] section"))
    })?;

    debug!("using properties file {path}, branch {branch}");

    Ok(Some(FileValues {
        access_key: section.get(ENV_ACCESS_KEY).map(str::to_string),
        secret_key: section.get(ENV_SECRET_KEY).map(str::to_string),
        base_url: section.get(ENV_BASE_URL).map(str::to_string),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jcs_sbs_core::StaticEnv;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_explicit_value_wins_over_env() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([
                (ENV_ACCESS_KEY.to_string(), "env_ak".to_string()),
                (ENV_SECRET_KEY.to_string(), "env_sk".to_string()),
            ]),
        });

        let config = Config::new().with_access_key("explicit_ak").from_env(&ctx);

        assert_eq!(config.access_key.as_deref(), Some("explicit_ak"));
        assert_eq!(config.secret_key.as_deref(), Some("env_sk"));
    }

    #[test]
    fn test_from_config_file_fills_missing_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[branch]\nenv = staging\n\n[staging]\nACCESS_KEY = file_ak\nSECRET_KEY = file_sk\nBASE_URL = https://sbs.example.com"
        )
        .unwrap();

        let ctx = Context::new();
        let config = Config::new()
            .with_secret_key("explicit_sk")
            .with_config_file(file.path().to_string_lossy())
            .from_config_file(&ctx)
            .unwrap();

        assert_eq!(config.access_key.as_deref(), Some("file_ak"));
        assert_eq!(config.secret_key.as_deref(), Some("explicit_sk"));
        assert_eq!(config.base_url.as_deref(), Some("https://sbs.example.com"));
    }

    #[test]
    fn test_missing_config_file_is_skipped() {
        let ctx = Context::new();
        let config = Config::new()
            .with_config_file("/definitely/not/here.properties")
            .from_config_file(&ctx)
            .unwrap();

        assert!(config.access_key.is_none());
    }

    #[test]
    fn test_config_file_without_branch_selector_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[staging]\nACCESS_KEY = ak").unwrap();

        let ctx = Context::new();
        let err = Config::new()
            .with_config_file(file.path().to_string_lossy())
            .from_config_file(&ctx)
            .unwrap_err();

        assert_eq!(err.kind(), jcs_sbs_core::ErrorKind::ConfigInvalid);
    }

    #[test]
    fn test_debug_redacts_keys() {
        let config = Config::new()
            .with_access_key("AK123")
            .with_secret_key("very-secret")
            .with_base_url("https://sbs.example.com");
        let out = format!("{config:?}");

        assert!(!out.contains("AK123"));
        assert!(!out.contains("very-secret"));
        assert!(out.contains("https://sbs.example.com"));
    }
}
