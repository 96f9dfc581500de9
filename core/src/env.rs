use std::collections::HashMap;
use std::fmt::Debug;

/// Permits interacting with environment variables.
///
/// The client never reads `std::env` directly; everything goes through this
/// trait so that tests can inject a fixed environment.
pub trait Env: Debug + Send + Sync + 'static {
    /// Returns the environment variable `key` from the current process.
    fn var(&self, key: &str) -> Option<String>;

    /// Returns a snapshot of all environment variables.
    fn vars(&self) -> HashMap<String, String>;
}

/// Implements `Env` using the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEnv;

impl Env for OsEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|v| v.to_string_lossy().to_string())
    }

    fn vars(&self) -> HashMap<String, String> {
        std::env::vars().collect()
    }
}

/// A fixed environment, for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    /// The environment variables to serve.
    pub envs: HashMap<String, String>,
}

impl Env for StaticEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.envs.get(key).cloned()
    }

    fn vars(&self) -> HashMap<String, String> {
        self.envs.clone()
    }
}
