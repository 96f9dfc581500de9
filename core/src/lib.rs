//! Core components for the JCS Simple Block Storage SDK.
//!
//! This crate provides the service-independent pieces of the SDK: the error
//! type, the signing pipeline primitives, and the pluggable environment and
//! HTTP seams the client is built on.
//!
//! ## Overview
//!
//! - **Canonicalization and signing** ([`sign`]): a [`sign::QueryParams`] set
//!   is serialized with sorted keys and URL-query escaping into a canonical
//!   string-to-sign, then signed with HMAC-SHA256 and encoded for URL
//!   embedding.
//! - **Context** ([`Context`]): a container holding the [`Env`] and
//!   [`HttpSend`] implementations in use. The defaults are no-ops so that
//!   every capability is an explicit choice.
//! - **Credential traits** ([`ProvideCredential`], [`SigningCredential`],
//!   [`ProvideCredentialChain`]): how credentials are resolved from the
//!   environment, configuration files, or caller-supplied values.
//!
//! All operations are synchronous: the only blocking point in the whole
//! pipeline is the network call behind [`HttpSend`].

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod sign;
pub mod time;

mod error;
pub use error::{Error, ErrorKind, Result};
mod context;
pub use context::Context;
mod env;
pub use env::{Env, OsEnv, StaticEnv};
mod http;
pub use http::HttpSend;
mod api;
pub use api::{ProvideCredential, ProvideCredentialChain, SigningCredential};
