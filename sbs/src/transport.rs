use std::time::Duration;

use bytes::Bytes;
use http::header::{HeaderValue, ACCEPT_ENCODING, CONTENT_TYPE};
use http::{HeaderMap, Method, Request, StatusCode};
use log::debug;

use jcs_sbs_core::{Context, Error, HttpSend, Result};

use crate::constants::{ACCEPT_ENCODING_IDENTITY, CONTENT_TYPE_JSON};

/// The raw outcome of one dispatched call: the status the service answered
/// with and the body, read exactly once.
///
/// Owned by the call that produced it; the underlying network resources are
/// released before this value is returned.
#[derive(Debug, Clone)]
pub struct TransportResult {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The raw response body, byte-for-byte as received.
    pub body: String,
}

/// HttpSend implementation backed by a blocking reqwest client.
#[derive(Debug, Default)]
pub struct ReqwestHttpSend {
    client: reqwest::blocking::Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend from a prepared client.
    pub fn new(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }

    /// Create one with a request timeout covering the whole call, from
    /// connect to the last body byte.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::unexpected("failed to build http client").with_source(e))?;
        Ok(Self { client })
    }
}

impl HttpSend for ReqwestHttpSend {
    fn http_send(&self, req: Request<Bytes>) -> Result<http::Response<Bytes>> {
        let (parts, body) = req.into_parts();

        let resp = self
            .client
            .request(parts.method, parts.uri.to_string())
            .headers(parts.headers)
            .body(body.to_vec())
            .send()
            .map_err(|e| Error::transport_failed("failed to reach service").with_source(e))?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp
            .bytes()
            .map_err(|e| Error::transport_failed("failed to read response body").with_source(e))?;

        let mut out = http::Response::builder().status(status).body(body)?;
        *out.headers_mut() = headers;
        Ok(out)
    }
}

/// Issue one blocking call and classify the outcome.
///
/// Caller headers are extended with the fixed `Content-Type` and
/// `Accept-Encoding` values, never replaced wholesale. A non-2xx answer
/// becomes an api rejection carrying the exact raw body; the body is never
/// inspected here.
pub(crate) fn dispatch(
    ctx: &Context,
    method: Method,
    url: &str,
    headers: &HeaderMap,
) -> Result<TransportResult> {
    let mut req = Request::builder()
        .method(method)
        .uri(url)
        .body(Bytes::new())?;

    let h = req.headers_mut();
    for (name, value) in headers {
        h.append(name, value.clone());
    }
    h.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
    h.insert(
        ACCEPT_ENCODING,
        HeaderValue::from_static(ACCEPT_ENCODING_IDENTITY),
    );

    let resp = ctx.http_send(req)?;

    let status = resp.status();
    let body = String::from_utf8_lossy(resp.body()).to_string();

    if status.as_u16() / 100 == 2 {
        debug!("request succeeded with status {status}");
        Ok(TransportResult { status, body })
    } else {
        Err(Error::api_rejected(status, body))
    }
}
