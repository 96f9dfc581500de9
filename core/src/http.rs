use bytes::Bytes;
use std::fmt::Debug;

use crate::Result;

/// HttpSend is used to issue the signed request against the service.
///
/// This is the sole blocking point in the SDK: implementations block the
/// calling thread until the response has been received, and return the whole
/// body read exactly once. This trait is designed for the client's own
/// request/response cycle, please don't use it as a general http client.
///
/// Implementations must return a [transport error] for network-level
/// failures and must NOT classify the HTTP status themselves; status
/// handling belongs to the dispatch layer so that callers can tell "could
/// not reach server" apart from "server rejected request".
///
/// [transport error]: crate::ErrorKind::TransportFailed
pub trait HttpSend: Debug + Send + Sync + 'static {
    /// Send an http request and return the response.
    fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>>;
}
