//! Client SDK for the JCS Simple Block Storage API.
//!
//! Every call goes through the same pipeline: typed request → query
//! parameters → canonicalized string-to-sign → HMAC-SHA256 signature →
//! signed URL → one blocking HTTP call → XML response mapped into a typed
//! result that also carries the raw body.
//!
//! ## Example
//!
//! ```no_run
//! use jcs_sbs::{Config, SbsClient};
//! use jcs_sbs::model::CreateVolumeRequest;
//!
//! # fn main() -> jcs_sbs::Result<()> {
//! let config = Config::new()
//!     .with_access_key("my-access-key")
//!     .with_secret_key("my-secret-key")
//!     .with_base_url("https://sbs.example.com");
//!
//! let client = SbsClient::new(config)?;
//! let created = client.create_volume(CreateVolumeRequest::new().with_size(10))?;
//! println!("created {}", created.volume.volume_id);
//! # Ok(())
//! # }
//! ```
//!
//! Credentials left unset in [`Config`] are resolved from the `ACCESS_KEY` /
//! `SECRET_KEY` environment variables and then from a properties file; the
//! endpoint follows the same rule via `BASE_URL`.

mod client;
pub use client::SbsClient;

mod config;
pub use config::Config;

mod constants;

mod credential;
pub use credential::Credential;

mod endpoint;
pub use endpoint::Endpoint;

pub mod model;

mod provide_credential;
pub use provide_credential::{
    ConfigCredentialProvider, ConfigFileCredentialProvider, DefaultCredentialProvider,
    EnvCredentialProvider, StaticCredentialProvider,
};

mod sign_request;
pub use sign_request::RequestSigner;

mod transport;
pub use transport::{ReqwestHttpSend, TransportResult};

mod xml;

pub use jcs_sbs_core::sign::{ParamValue, QueryParams};
pub use jcs_sbs_core::{
    Context, Env, Error, ErrorKind, HttpSend, OsEnv, ProvideCredential, ProvideCredentialChain,
    Result, SigningCredential, StaticEnv,
};
