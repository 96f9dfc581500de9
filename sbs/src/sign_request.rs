use http::Method;
use log::debug;

use jcs_sbs_core::sign::{self, CanonicalRequest, QueryParams};
use jcs_sbs_core::time::{self, DateTime};
use jcs_sbs_core::{Error, Result, SigningCredential};

use crate::constants::{API_VERSION, SIGNATURE_METHOD, SIGNATURE_VERSION};
use crate::credential::Credential;
use crate::endpoint::Endpoint;

/// RequestSigner implements the SBS query signing scheme: signature
/// version 2 with HmacSHA256 over the canonical request string.
///
/// The signer owns the whole value flow for one request: it consumes the
/// operation parameters, returns a fully signed URL and never hands out a
/// parameter set that could be mutated after signing.
#[derive(Debug, Default)]
pub struct RequestSigner {
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new signer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub(crate) fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Build the signed request URL for one operation.
    ///
    /// The timestamp reflects the instant of signing and is recomputed on
    /// every call; signed URLs must not be reused across requests.
    pub fn signed_url(
        &self,
        endpoint: &Endpoint,
        method: &Method,
        credential: &Credential,
        params: QueryParams,
    ) -> Result<String> {
        if !credential.is_valid() {
            return Err(Error::credential_invalid(
                "access key and secret key must both be present",
            ));
        }

        let now = self.time.unwrap_or_else(time::now);
        let params = authenticated_params(params, credential, now);

        let creq =
            CanonicalRequest::new(method, endpoint.host(), endpoint.port(), "/", &params)?;
        let string_to_sign = creq.string_to_sign();
        debug!("calculated string to sign: {string_to_sign}");

        let signature = sign::signature(credential.secret_key.as_bytes(), &string_to_sign);

        let mut signed = params;
        signed.insert("Signature", signature);

        Ok(endpoint.request_url(&signed.serialize_raw()))
    }
}

/// Merge the common authentication fields into the operation parameters.
fn authenticated_params(
    mut params: QueryParams,
    credential: &Credential,
    now: DateTime,
) -> QueryParams {
    params.insert("JCSAccessKeyId", credential.access_key.as_str());
    params.insert("SignatureVersion", SIGNATURE_VERSION);
    params.insert("SignatureMethod", SIGNATURE_METHOD);
    params.insert("Version", API_VERSION);
    params.insert("Timestamp", time::format_request_timestamp(now));
    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn fixed_time() -> DateTime {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_signed_url_golden() {
        let endpoint = Endpoint::new("http://example.com").unwrap();
        let credential = Credential::new("AK123", "secret");
        let signer = RequestSigner::new().with_time(fixed_time());

        let mut params = QueryParams::new();
        params.insert("Action", "DescribeVolumes");

        let url = signer
            .signed_url(&endpoint, &Method::GET, &credential, params)
            .unwrap();

        assert_eq!(
            url,
            "http://example.com/?Action=DescribeVolumes&JCSAccessKeyId=AK123\
             &Signature=VvTUcp7g4mQpOiXTp7dcf%2BB2HjPRBdybXA3KkjiJRv8%3D\
             &SignatureMethod=HmacSHA256&SignatureVersion=2\
             &Timestamp=2024-01-01T00:00:00Z&Version=2016-03-01"
        );
    }

    #[test]
    fn test_signing_is_deterministic_at_fixed_time() {
        let endpoint = Endpoint::new("https://sbs.example.com").unwrap();
        let credential = Credential::new("AK123", "secret");
        let signer = RequestSigner::new().with_time(fixed_time());

        let mut params = QueryParams::new();
        params.insert("Action", "DescribeSnapshots");

        let first = signer
            .signed_url(&endpoint, &Method::GET, &credential, params.clone())
            .unwrap();
        let second = signer
            .signed_url(&endpoint, &Method::GET, &credential, params)
            .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_operation_params_still_sign() {
        let endpoint = Endpoint::new("http://example.com").unwrap();
        let credential = Credential::new("AK123", "secret");
        let signer = RequestSigner::new().with_time(fixed_time());

        let url = signer
            .signed_url(&endpoint, &Method::GET, &credential, QueryParams::new())
            .unwrap();

        // Only the injected auth fields plus the signature.
        assert!(url.contains("JCSAccessKeyId=AK123"));
        assert!(url.contains("Timestamp=2024-01-01T00:00:00Z"));
        assert!(url.contains("Signature="));
        assert!(!url.contains("Action="));
    }

    #[test]
    fn test_missing_credential_fails_fast() {
        let endpoint = Endpoint::new("http://example.com").unwrap();
        let credential = Credential::new("AK123", "");
        let signer = RequestSigner::new();

        let err = signer
            .signed_url(&endpoint, &Method::GET, &credential, QueryParams::new())
            .unwrap_err();

        assert_eq!(err.kind(), jcs_sbs_core::ErrorKind::CredentialInvalid);
    }
}
