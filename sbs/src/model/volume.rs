use jcs_sbs_core::time::DateTime;

use crate::model::Attachment;

/// A block-storage volume as the service describes it.
///
/// Fields the service omits in summary listings stay `None`; `status` and
/// `volume_id` are always present.
#[derive(Debug, Clone, PartialEq)]
pub struct Volume {
    /// ID of the volume.
    pub volume_id: String,
    /// Size in GiB.
    pub size: Option<i64>,
    /// Type of the volume, `standard` or `ms1`.
    pub volume_type: Option<String>,
    /// ID of the snapshot this volume was created from, if any.
    pub snapshot_id: Option<String>,
    /// Whether the volume is encrypted.
    pub encrypted: Option<bool>,
    /// Current status: `creating`, `available`, `in-use` or `error`.
    pub status: String,
    /// Devices this volume is attached to.
    pub attachments: Vec<Attachment>,
    /// When the volume was created.
    pub create_time: Option<DateTime>,
}
