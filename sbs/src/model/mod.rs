//! Typed request and result models for the SBS operations.

mod attachment;
pub use attachment::Attachment;

mod envelope;
pub use envelope::{RequestEnvelope, ResultEnvelope};

mod request;
pub use request::{
    CreateSnapshotRequest, CreateVolumeRequest, DeleteSnapshotRequest, DeleteVolumeRequest,
    DescribeSnapshotsRequest, DescribeVolumesRequest,
};

mod result;
pub use result::{
    CreateSnapshotResult, CreateVolumeResult, DeleteSnapshotResult, DeleteVolumeResult,
    DescribeSnapshotsResult, DescribeVolumesResult,
};

mod snapshot;
pub use snapshot::Snapshot;

mod volume;
pub use volume::Volume;
