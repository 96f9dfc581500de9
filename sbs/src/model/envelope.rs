use http::header::{HeaderName, HeaderValue};
use http::HeaderMap;

use jcs_sbs_core::{Error, Result};

/// Request-side fields shared by every operation, composed by value.
#[derive(Debug, Clone, Default)]
pub struct RequestEnvelope {
    /// Custom headers to send alongside the fixed ones. The fixed
    /// `Content-Type` and `Accept-Encoding` values always win on conflict.
    pub custom_headers: HeaderMap,
}

impl RequestEnvelope {
    /// Add a custom header.
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self> {
        let name: HeaderName = name
            .parse()
            .map_err(|e| Error::request_invalid(format!("invalid header name {name:?}")).with_source(e))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| Error::request_invalid("invalid header value").with_source(e))?;
        self.custom_headers.insert(name, value);
        Ok(self)
    }
}

/// Result-side fields shared by every operation, composed by value.
#[derive(Debug, Clone)]
pub struct ResultEnvelope {
    /// Request ID returned by the service.
    pub request_id: String,
    /// The exact raw XML body the service returned, kept for diagnostics.
    pub xml: String,
}
