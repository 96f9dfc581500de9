use jcs_sbs_core::time::DateTime;

/// A point-in-time snapshot of a volume.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// ID of the snapshot.
    pub snapshot_id: String,
    /// ID of the volume the snapshot was taken from.
    pub volume_id: String,
    /// Current status: `pending`, `completed` or `error`.
    pub status: String,
    /// When the snapshot was started.
    pub start_time: Option<DateTime>,
    /// Size of the source volume in GiB.
    pub volume_size: Option<i64>,
    /// Whether the snapshot is encrypted.
    pub encrypted: Option<bool>,
}
