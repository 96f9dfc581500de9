use http::StatusCode;
use std::fmt;
use thiserror::Error;

/// The error type for SDK operations.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    status: Option<StatusCode>,
    body: Option<String>,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Credentials are missing or malformed.
    CredentialInvalid,

    /// Configuration error (missing fields, invalid values, bad endpoint).
    ConfigInvalid,

    /// Request cannot be built (failed validation, missing required fields).
    RequestInvalid,

    /// The service response could not be decoded.
    ResponseInvalid,

    /// The service could not be reached (connection refused, DNS failure,
    /// timeout).
    TransportFailed,

    /// The service answered with a non-2xx status.
    ApiRejected,

    /// Unexpected errors.
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            body: None,
            source: None,
        }
    }

    /// Add a source error.
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The HTTP status the service answered with, for [`ErrorKind::ApiRejected`].
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    /// The raw response body the service answered with, for
    /// [`ErrorKind::ApiRejected`]. Kept verbatim as diagnostic payload; the
    /// SDK never inspects it.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Check if this error is a service-side rejection (non-2xx response).
    pub fn is_api_rejection(&self) -> bool {
        self.kind == ErrorKind::ApiRejected
    }
}

// Convenience constructors
impl Error {
    /// Create a credential invalid error.
    pub fn credential_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CredentialInvalid, message)
    }

    /// Create a config invalid error.
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create a request invalid error.
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// Create a response invalid error.
    pub fn response_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ResponseInvalid, message)
    }

    /// Create a transport failed error.
    pub fn transport_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TransportFailed, message)
    }

    /// Create an api rejected error carrying the status and the raw body.
    pub fn api_rejected(status: StatusCode, body: impl Into<String>) -> Self {
        let mut err = Self::new(
            ErrorKind::ApiRejected,
            format!("service rejected request with status {status}"),
        );
        err.status = Some(status);
        err.body = Some(body.into());
        err
    }

    /// Create an unexpected error.
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::CredentialInvalid => write!(f, "invalid credentials"),
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
            ErrorKind::RequestInvalid => write!(f, "invalid request"),
            ErrorKind::ResponseInvalid => write!(f, "invalid response"),
            ErrorKind::TransportFailed => write!(f, "transport failed"),
            ErrorKind::ApiRejected => write!(f, "api rejected"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, Error>;

// Common From implementations
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(err)
    }
}

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUri> for Error {
    fn from(err: http::uri::InvalidUri) -> Self {
        Self::config_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_rejection_carries_status_and_body() {
        let err = Error::api_rejected(StatusCode::INTERNAL_SERVER_ERROR, "<Error>boom</Error>");

        assert_eq!(err.kind(), ErrorKind::ApiRejected);
        assert!(err.is_api_rejection());
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(err.body(), Some("<Error>boom</Error>"));
    }

    #[test]
    fn test_other_kinds_carry_no_response() {
        let err = Error::transport_failed("connection refused");

        assert_eq!(err.kind(), ErrorKind::TransportFailed);
        assert!(!err.is_api_rejection());
        assert!(err.status().is_none());
        assert!(err.body().is_none());
    }
}
