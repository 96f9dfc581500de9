use crate::model::{ResultEnvelope, Snapshot, Volume};

/// Result of the `DescribeVolumes` operation.
#[derive(Debug, Clone)]
pub struct DescribeVolumesResult {
    /// Common result fields, including the raw response body.
    pub envelope: ResultEnvelope,
    /// The described volumes.
    pub volumes: Vec<Volume>,
}

/// Result of the `CreateVolume` operation.
#[derive(Debug, Clone)]
pub struct CreateVolumeResult {
    /// Common result fields, including the raw response body.
    pub envelope: ResultEnvelope,
    /// The volume that was created.
    pub volume: Volume,
}

/// Result of the `DeleteVolume` operation.
#[derive(Debug, Clone)]
pub struct DeleteVolumeResult {
    /// Common result fields, including the raw response body.
    pub envelope: ResultEnvelope,
    /// What the service reported in the response's `return` flag. A 2xx
    /// response with `deleted == false` is still an overall success, not an
    /// error.
    pub deleted: bool,
}

/// Result of the `DescribeSnapshots` operation.
#[derive(Debug, Clone)]
pub struct DescribeSnapshotsResult {
    /// Common result fields, including the raw response body.
    pub envelope: ResultEnvelope,
    /// The described snapshots.
    pub snapshots: Vec<Snapshot>,
}

/// Result of the `CreateSnapshot` operation.
#[derive(Debug, Clone)]
pub struct CreateSnapshotResult {
    /// Common result fields, including the raw response body.
    pub envelope: ResultEnvelope,
    /// The snapshot that was created.
    pub snapshot: Snapshot,
}

/// Result of the `DeleteSnapshot` operation.
#[derive(Debug, Clone)]
pub struct DeleteSnapshotResult {
    /// Common result fields, including the raw response body.
    pub envelope: ResultEnvelope,
    /// What the service reported in the response's `return` flag.
    pub deleted: bool,
}
