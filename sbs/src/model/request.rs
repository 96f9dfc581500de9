use jcs_sbs_core::sign::QueryParams;
use jcs_sbs_core::{Error, Result};

use crate::model::RequestEnvelope;

fn required_id(value: &str, name: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::request_invalid(format!("{name} must not be empty")));
    }
    Ok(trimmed.to_string())
}

fn positive(value: i64, name: &str) -> Result<i64> {
    if value < 1 {
        return Err(Error::request_invalid(format!(
            "{name} must be a positive integer"
        )));
    }
    Ok(value)
}

/// Trimmed value of an optional string field; whitespace-only collapses to
/// absent, mirroring the service's treatment of blank parameters.
fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

/// Request for the `DescribeVolumes` operation.
#[derive(Debug, Clone, Default)]
pub struct DescribeVolumesRequest {
    /// Common request fields.
    pub envelope: RequestEnvelope,
    volume_ids: Vec<String>,
    next_token: Option<String>,
    max_results: Option<i64>,
    detail: Option<bool>,
}

impl DescribeVolumesRequest {
    /// Create an empty request describing all volumes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the description to specific volume IDs.
    pub fn with_volume_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.volume_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Resume a paginated listing: the ID of the last volume returned by
    /// the previous call.
    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }

    /// Maximum number of volumes to describe.
    pub fn with_max_results(mut self, max_results: i64) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// Set true to describe the volumes in detail.
    pub fn with_detail(mut self, detail: bool) -> Self {
        self.detail = Some(detail);
        self
    }

    pub(crate) fn query_params(&self) -> Result<QueryParams> {
        let mut params = QueryParams::new();
        params.insert("Action", "DescribeVolumes");
        if let Some(n) = self.max_results {
            params.insert("MaxResults", positive(n, "max_results")?);
        }
        if let Some(t) = non_blank(self.next_token.as_ref()) {
            params.insert("NextToken", t);
        }
        if let Some(d) = self.detail {
            params.insert("Detail", d);
        }
        for (i, id) in self.volume_ids.iter().enumerate() {
            params.insert(
                format!("VolumeId.{}", i + 1),
                required_id(id, "volume_ids element")?,
            );
        }
        Ok(params)
    }
}

/// Request for the `CreateVolume` operation.
///
/// A volume is created either blank from `size` or from a snapshot; the
/// service itself enforces that at least one of the two is present.
#[derive(Debug, Clone, Default)]
pub struct CreateVolumeRequest {
    /// Common request fields.
    pub envelope: RequestEnvelope,
    size: Option<i64>,
    snapshot_id: Option<String>,
    volume_type: Option<String>,
    encrypted: Option<bool>,
}

impl CreateVolumeRequest {
    /// Create an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Size of the volume in GiB. Must be positive.
    pub fn with_size(mut self, size: i64) -> Self {
        self.size = Some(size);
        self
    }

    /// ID of the snapshot to create the volume from.
    pub fn with_snapshot_id(mut self, snapshot_id: impl Into<String>) -> Self {
        self.snapshot_id = Some(snapshot_id.into());
        self
    }

    /// Type of the volume, `standard` or `ms1`.
    pub fn with_volume_type(mut self, volume_type: impl Into<String>) -> Self {
        self.volume_type = Some(volume_type.into());
        self
    }

    /// Whether to create an encrypted volume.
    pub fn with_encrypted(mut self, encrypted: bool) -> Self {
        self.encrypted = Some(encrypted);
        self
    }

    pub(crate) fn query_params(&self) -> Result<QueryParams> {
        let mut params = QueryParams::new();
        params.insert("Action", "CreateVolume");
        if let Some(size) = self.size {
            params.insert("Size", positive(size, "size")?);
        }
        if let Some(id) = non_blank(self.snapshot_id.as_ref()) {
            params.insert("SnapshotId", id);
        }
        if let Some(e) = self.encrypted {
            params.insert("Encrypted", e);
        }
        if let Some(t) = non_blank(self.volume_type.as_ref()) {
            params.insert("VolumeType", t);
        }
        Ok(params)
    }
}

/// Request for the `DeleteVolume` operation.
#[derive(Debug, Clone)]
pub struct DeleteVolumeRequest {
    /// Common request fields.
    pub envelope: RequestEnvelope,
    volume_id: String,
}

impl DeleteVolumeRequest {
    /// Delete the volume with the given ID.
    pub fn new(volume_id: impl Into<String>) -> Self {
        Self {
            envelope: RequestEnvelope::default(),
            volume_id: volume_id.into(),
        }
    }

    pub(crate) fn query_params(&self) -> Result<QueryParams> {
        let mut params = QueryParams::new();
        params.insert("Action", "DeleteVolume");
        params.insert("VolumeId", required_id(&self.volume_id, "volume_id")?);
        Ok(params)
    }
}

/// Request for the `DescribeSnapshots` operation.
#[derive(Debug, Clone, Default)]
pub struct DescribeSnapshotsRequest {
    /// Common request fields.
    pub envelope: RequestEnvelope,
    snapshot_ids: Vec<String>,
    next_token: Option<String>,
    max_results: Option<i64>,
    detail: Option<bool>,
}

impl DescribeSnapshotsRequest {
    /// Create an empty request describing all snapshots.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the description to specific snapshot IDs.
    pub fn with_snapshot_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.snapshot_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Resume a paginated listing: the ID of the last snapshot returned by
    /// the previous call.
    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }

    /// Maximum number of snapshots to describe.
    pub fn with_max_results(mut self, max_results: i64) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// Set true to describe the snapshots in detail.
    pub fn with_detail(mut self, detail: bool) -> Self {
        self.detail = Some(detail);
        self
    }

    pub(crate) fn query_params(&self) -> Result<QueryParams> {
        let mut params = QueryParams::new();
        params.insert("Action", "DescribeSnapshots");
        if let Some(n) = self.max_results {
            params.insert("MaxResults", positive(n, "max_results")?);
        }
        if let Some(t) = non_blank(self.next_token.as_ref()) {
            params.insert("NextToken", t);
        }
        if let Some(d) = self.detail {
            params.insert("Detail", d);
        }
        for (i, id) in self.snapshot_ids.iter().enumerate() {
            params.insert(
                format!("SnapshotId.{}", i + 1),
                required_id(id, "snapshot_ids element")?,
            );
        }
        Ok(params)
    }
}

/// Request for the `CreateSnapshot` operation.
#[derive(Debug, Clone)]
pub struct CreateSnapshotRequest {
    /// Common request fields.
    pub envelope: RequestEnvelope,
    volume_id: String,
}

impl CreateSnapshotRequest {
    /// Snapshot the volume with the given ID.
    pub fn new(volume_id: impl Into<String>) -> Self {
        Self {
            envelope: RequestEnvelope::default(),
            volume_id: volume_id.into(),
        }
    }

    pub(crate) fn query_params(&self) -> Result<QueryParams> {
        let mut params = QueryParams::new();
        params.insert("Action", "CreateSnapshot");
        params.insert("VolumeId", required_id(&self.volume_id, "volume_id")?);
        Ok(params)
    }
}

/// Request for the `DeleteSnapshot` operation.
#[derive(Debug, Clone)]
pub struct DeleteSnapshotRequest {
    /// Common request fields.
    pub envelope: RequestEnvelope,
    snapshot_id: String,
}

impl DeleteSnapshotRequest {
    /// Delete the snapshot with the given ID.
    pub fn new(snapshot_id: impl Into<String>) -> Self {
        Self {
            envelope: RequestEnvelope::default(),
            snapshot_id: snapshot_id.into(),
        }
    }

    pub(crate) fn query_params(&self) -> Result<QueryParams> {
        let mut params = QueryParams::new();
        params.insert("Action", "DeleteSnapshot");
        params.insert("SnapshotId", required_id(&self.snapshot_id, "snapshot_id")?);
        Ok(params)
    }
}
