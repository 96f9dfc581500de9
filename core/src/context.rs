use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

use bytes::Bytes;

use crate::env::Env;
use crate::http::HttpSend;
use crate::{Error, Result};

/// Context carries the environment and transport implementations the client
/// runs against.
///
/// ## Important
///
/// There are no live default implementations. Any unconfigured component is
/// a no-op that returns errors or empty values when called, so every
/// capability a client has is one that was configured explicitly.
///
/// ## Example
///
/// ```
/// use jcs_sbs_core::{Context, OsEnv};
///
/// let ctx = Context::new().with_env(OsEnv);
/// ```
#[derive(Clone)]
pub struct Context {
    http: Arc<dyn HttpSend>,
    env: Arc<dyn Env>,
}

impl Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("http", &self.http)
            .field("env", &self.env)
            .finish()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Create a new Context with no-op implementations.
    pub fn new() -> Self {
        Self {
            http: Arc::new(NoopHttpSend),
            env: Arc::new(NoopEnv),
        }
    }

    /// Replace the HTTP client implementation.
    pub fn with_http_send(mut self, http: impl HttpSend) -> Self {
        self.http = Arc::new(http);
        self
    }

    /// Replace the environment implementation.
    pub fn with_env(mut self, env: impl Env) -> Self {
        self.env = Arc::new(env);
        self
    }

    /// Send an http request and return the response.
    #[inline]
    pub fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        self.http.http_send(req)
    }

    /// Get the environment variable `key`.
    #[inline]
    pub fn env_var(&self, key: &str) -> Option<String> {
        self.env.var(key)
    }

    /// Get a snapshot of all environment variables.
    #[inline]
    pub fn env_vars(&self) -> HashMap<String, String> {
        self.env.vars()
    }
}

/// NoopHttpSend is a no-op implementation that always returns an error.
///
/// This is used when no HTTP client is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHttpSend;

impl HttpSend for NoopHttpSend {
    fn http_send(&self, _req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        Err(Error::unexpected(
            "HTTP sending not supported: no HTTP client configured",
        ))
    }
}

/// NoopEnv is a no-op implementation that always returns None/empty.
///
/// This is used when no environment is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEnv;

impl Env for NoopEnv {
    fn var(&self, _key: &str) -> Option<String> {
        None
    }

    fn vars(&self) -> HashMap<String, String> {
        HashMap::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StaticEnv;

    #[test]
    fn test_unconfigured_context_is_inert() {
        let ctx = Context::new();

        assert!(ctx.env_var("ACCESS_KEY").is_none());
        assert!(ctx.env_vars().is_empty());

        let req = http::Request::builder()
            .uri("http://localhost/")
            .body(Bytes::new())
            .unwrap();
        assert!(ctx.http_send(req).is_err());
    }

    #[test]
    fn test_with_env_replaces_implementation() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([("ACCESS_KEY".to_string(), "ak".to_string())]),
        });

        assert_eq!(ctx.env_var("ACCESS_KEY").as_deref(), Some("ak"));
    }
}
