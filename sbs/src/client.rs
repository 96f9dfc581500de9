use http::{HeaderMap, Method};
use log::debug;

use jcs_sbs_core::sign::QueryParams;
use jcs_sbs_core::{Context, Error, OsEnv, ProvideCredential, Result};

use crate::config::Config;
use crate::credential::Credential;
use crate::endpoint::Endpoint;
use crate::model::{
    CreateSnapshotRequest, CreateSnapshotResult, CreateVolumeRequest, CreateVolumeResult,
    DeleteSnapshotRequest, DeleteSnapshotResult, DeleteVolumeRequest, DeleteVolumeResult,
    DescribeSnapshotsRequest, DescribeSnapshotsResult, DescribeVolumesRequest,
    DescribeVolumesResult, ResultEnvelope,
};
use crate::provide_credential::DefaultCredentialProvider;
use crate::sign_request::RequestSigner;
use crate::transport::{self, ReqwestHttpSend, TransportResult};
use crate::xml;

/// Client for the SBS control-plane API.
///
/// Credentials and the endpoint are resolved once, at construction; a
/// constructed client is immutable and safe to share across threads. Every
/// operation is synchronous: build the signed URL, issue one blocking call,
/// map the XML response.
///
/// # Example
///
/// ```no_run
/// use jcs_sbs::{Config, SbsClient};
/// use jcs_sbs::model::DescribeVolumesRequest;
///
/// # fn main() -> jcs_sbs::Result<()> {
/// let client = SbsClient::new(Config::new())?;
/// let result = client.describe_volumes(DescribeVolumesRequest::new().with_detail(true))?;
/// for volume in &result.volumes {
///     println!("{} is {}", volume.volume_id, volume.status);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SbsClient {
    ctx: Context,
    endpoint: Endpoint,
    credential: Credential,
    signer: RequestSigner,
}

impl SbsClient {
    /// Create a client against the process environment, with a blocking
    /// reqwest transport honoring `Config::timeout`.
    pub fn new(config: Config) -> Result<Self> {
        let http = match config.timeout {
            Some(timeout) => ReqwestHttpSend::with_timeout(timeout)?,
            None => ReqwestHttpSend::default(),
        };
        let ctx = Context::new().with_env(OsEnv).with_http_send(http);
        Self::with_context(ctx, config)
    }

    /// Create a client against an explicit [`Context`].
    pub fn with_context(ctx: Context, config: Config) -> Result<Self> {
        let provider = DefaultCredentialProvider::new(config.clone());
        Self::with_credential_provider(ctx, config, provider)
    }

    /// Create a client resolving credentials through a custom provider.
    pub fn with_credential_provider(
        ctx: Context,
        config: Config,
        provider: impl ProvideCredential<Credential = Credential>,
    ) -> Result<Self> {
        let credential = provider.provide_credential(&ctx)?.ok_or_else(|| {
            Error::credential_invalid("unable to resolve access key and secret key")
        })?;

        let config = config.from_env(&ctx).from_config_file(&ctx)?;
        let base_url = config.base_url.ok_or_else(|| {
            Error::config_invalid(
                "no base url configured: set it explicitly or via the BASE_URL environment variable",
            )
        })?;
        let endpoint: Endpoint = base_url.parse()?;

        Ok(Self {
            ctx,
            endpoint,
            credential,
            signer: RequestSigner::new(),
        })
    }

    /// The endpoint this client talks to.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Describe volumes, all of them or the requested IDs.
    pub fn describe_volumes(&self, req: DescribeVolumesRequest) -> Result<DescribeVolumesResult> {
        let resp = self.execute(req.query_params()?, &req.envelope.custom_headers)?;
        let doc: xml::DescribeVolumesResponse = xml::parse(&resp.body)?;

        let volumes = doc
            .volume_set
            .item
            .into_iter()
            .map(xml::VolumeItem::into_volume)
            .collect::<Result<Vec<_>>>()?;

        Ok(DescribeVolumesResult {
            envelope: ResultEnvelope {
                request_id: doc.request_id,
                xml: resp.body,
            },
            volumes,
        })
    }

    /// Create a volume, blank from a size or from a snapshot.
    pub fn create_volume(&self, req: CreateVolumeRequest) -> Result<CreateVolumeResult> {
        let resp = self.execute(req.query_params()?, &req.envelope.custom_headers)?;
        let doc: xml::CreateVolumeResponse = xml::parse(&resp.body)?;

        Ok(CreateVolumeResult {
            envelope: ResultEnvelope {
                request_id: doc.request_id.clone(),
                xml: resp.body,
            },
            volume: doc.into_volume()?,
        })
    }

    /// Delete a volume.
    ///
    /// The service's `return` flag is surfaced as `deleted`; a 2xx response
    /// with `deleted == false` is still a successful call.
    pub fn delete_volume(&self, req: DeleteVolumeRequest) -> Result<DeleteVolumeResult> {
        let resp = self.execute(req.query_params()?, &req.envelope.custom_headers)?;
        let doc: xml::DeleteResponse = xml::parse(&resp.body)?;

        Ok(DeleteVolumeResult {
            envelope: ResultEnvelope {
                request_id: doc.request_id,
                xml: resp.body,
            },
            deleted: doc.deleted,
        })
    }

    /// Describe snapshots, all of them or the requested IDs.
    pub fn describe_snapshots(
        &self,
        req: DescribeSnapshotsRequest,
    ) -> Result<DescribeSnapshotsResult> {
        let resp = self.execute(req.query_params()?, &req.envelope.custom_headers)?;
        let doc: xml::DescribeSnapshotsResponse = xml::parse(&resp.body)?;

        let snapshots = doc
            .snapshot_set
            .item
            .into_iter()
            .map(xml::SnapshotItem::into_snapshot)
            .collect::<Result<Vec<_>>>()?;

        Ok(DescribeSnapshotsResult {
            envelope: ResultEnvelope {
                request_id: doc.request_id,
                xml: resp.body,
            },
            snapshots,
        })
    }

    /// Snapshot a volume.
    pub fn create_snapshot(&self, req: CreateSnapshotRequest) -> Result<CreateSnapshotResult> {
        let resp = self.execute(req.query_params()?, &req.envelope.custom_headers)?;
        let doc: xml::CreateSnapshotResponse = xml::parse(&resp.body)?;

        Ok(CreateSnapshotResult {
            envelope: ResultEnvelope {
                request_id: doc.request_id.clone(),
                xml: resp.body,
            },
            snapshot: doc.into_snapshot()?,
        })
    }

    /// Delete a snapshot.
    pub fn delete_snapshot(&self, req: DeleteSnapshotRequest) -> Result<DeleteSnapshotResult> {
        let resp = self.execute(req.query_params()?, &req.envelope.custom_headers)?;
        let doc: xml::DeleteResponse = xml::parse(&resp.body)?;

        Ok(DeleteSnapshotResult {
            envelope: ResultEnvelope {
                request_id: doc.request_id,
                xml: resp.body,
            },
            deleted: doc.deleted,
        })
    }

    fn execute(&self, params: QueryParams, headers: &HeaderMap) -> Result<TransportResult> {
        let url = self
            .signer
            .signed_url(&self.endpoint, &Method::GET, &self.credential, params)?;
        debug!("sending request to {url}");

        transport::dispatch(&self.ctx, Method::GET, &url, headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jcs_sbs_core::{ErrorKind, StaticEnv};
    use std::collections::HashMap;

    #[test]
    fn test_construction_fails_without_credentials() {
        let ctx = Context::new();
        let config = Config::new().with_base_url("https://sbs.example.com");

        let err = SbsClient::with_context(ctx, config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    }

    #[test]
    fn test_construction_fails_without_base_url() {
        let ctx = Context::new();
        let config = Config::new().with_access_key("ak").with_secret_key("sk");

        let err = SbsClient::with_context(ctx, config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }

    #[test]
    fn test_endpoint_resolves_from_env() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([(
                "BASE_URL".to_string(),
                "https://sbs.example.com:8443".to_string(),
            )]),
        });
        let config = Config::new().with_access_key("ak").with_secret_key("sk");

        let client = SbsClient::with_context(ctx, config).unwrap();
        assert_eq!(client.endpoint().host(), "sbs.example.com");
        assert_eq!(client.endpoint().port(), Some(8443));
    }
}
