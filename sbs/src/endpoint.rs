use std::str::FromStr;

use http::uri::Scheme;
use http::Uri;

use jcs_sbs_core::{Error, Result};

/// The service endpoint, derived once from a base URL at client
/// construction.
///
/// Only `http` and `https` are accepted; any other scheme fails
/// construction. A path on the base URL is ignored — every operation of
/// this API family is served at `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    scheme: Scheme,
    host: String,
    port: Option<u16>,
}

impl Endpoint {
    /// Parse an endpoint from a base URL such as `https://sbs.example.com:8443`.
    pub fn new(base_url: &str) -> Result<Self> {
        let uri: Uri = base_url
            .parse()
            .map_err(|e| Error::config_invalid(format!("invalid base url {base_url:?}")).with_source(e))?;

        let scheme = match uri.scheme() {
            Some(s) if *s == Scheme::HTTP || *s == Scheme::HTTPS => s.clone(),
            _ => {
                return Err(Error::config_invalid(format!(
                    "unsupported protocol in base url {base_url:?}"
                )))
            }
        };

        let host = uri
            .host()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| Error::config_invalid(format!("missing host in base url {base_url:?}")))?
            .to_string();

        Ok(Self {
            scheme,
            host,
            port: uri.port_u16(),
        })
    }

    /// The host, without port.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The explicit port, if the base URL carried one.
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// The scheme, `http` or `https`.
    pub fn scheme(&self) -> &str {
        self.scheme.as_str()
    }

    /// The base URL reassembled from its parts.
    pub fn base_url(&self) -> String {
        match self.port {
            Some(port) => format!("{}://{}:{}", self.scheme, self.host, port),
            None => format!("{}://{}", self.scheme, self.host),
        }
    }

    /// The full request URL for a serialized query string.
    pub(crate) fn request_url(&self, query: &str) -> String {
        format!("{}/?{}", self.base_url(), query)
    }
}

impl FromStr for Endpoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jcs_sbs_core::ErrorKind;
    use test_case::test_case;

    #[test]
    fn test_parse_with_port() {
        let ep = Endpoint::new("https://sbs.example.com:8443").unwrap();
        assert_eq!(ep.scheme(), "https");
        assert_eq!(ep.host(), "sbs.example.com");
        assert_eq!(ep.port(), Some(8443));
        assert_eq!(ep.base_url(), "https://sbs.example.com:8443");
    }

    #[test]
    fn test_parse_without_port() {
        let ep = Endpoint::new("http://10.0.0.1").unwrap();
        assert_eq!(ep.scheme(), "http");
        assert_eq!(ep.host(), "10.0.0.1");
        assert_eq!(ep.port(), None);
        assert_eq!(ep.base_url(), "http://10.0.0.1");
    }

    #[test_case("ftp://example.com"; "ftp scheme")]
    #[test_case("example.com"; "no scheme")]
    #[test_case(""; "empty")]
    fn test_rejected_base_urls(input: &str) {
        let err = Endpoint::new(input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }

    #[test]
    fn test_request_url_joins_query() {
        let ep = Endpoint::new("https://sbs.example.com").unwrap();
        assert_eq!(
            ep.request_url("Action=DescribeVolumes"),
            "https://sbs.example.com/?Action=DescribeVolumes"
        );
    }
}
