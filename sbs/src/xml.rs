//! Deserialization of the service's XML responses.
//!
//! The structs here mirror the wire shapes exactly; conversion into the
//! public model types happens in `into_*` methods so that datetime parsing
//! and empty-element normalization stay in one place. The raw body is
//! always kept alongside the converted values, these mappings never
//! consume it.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use jcs_sbs_core::time;
use jcs_sbs_core::{Error, Result};

use crate::model::{Attachment, Snapshot, Volume};

/// Decode a response body.
pub(crate) fn parse<T: DeserializeOwned>(body: &str) -> Result<T> {
    quick_xml::de::from_str(body)
        .map_err(|e| Error::response_invalid("failed to decode service response").with_source(e))
}

/// An element carrying a list of `<item>` children.
#[derive(Debug, Deserialize)]
pub(crate) struct ItemSet<T> {
    #[serde(default)]
    pub item: Vec<T>,
}

impl<T> Default for ItemSet<T> {
    fn default() -> Self {
        Self { item: Vec::new() }
    }
}

/// The service renders absent string fields as empty elements.
fn none_if_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_datetime_opt(value: Option<String>) -> Result<Option<time::DateTime>> {
    value
        .and_then(none_if_empty)
        .map(|s| time::parse_response_datetime(&s))
        .transpose()
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AttachmentItem {
    pub device: String,
    pub instance_id: String,
}

impl AttachmentItem {
    fn into_attachment(self) -> Attachment {
        Attachment {
            device: self.device,
            instance_id: self.instance_id,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VolumeItem {
    pub volume_id: String,
    pub status: String,
    pub create_time: Option<String>,
    pub size: Option<i64>,
    pub snapshot_id: Option<String>,
    pub volume_type: Option<String>,
    pub encrypted: Option<bool>,
    #[serde(default)]
    pub attachment_set: ItemSet<AttachmentItem>,
}

impl VolumeItem {
    pub(crate) fn into_volume(self) -> Result<Volume> {
        Ok(Volume {
            volume_id: self.volume_id,
            status: self.status,
            create_time: parse_datetime_opt(self.create_time)?,
            size: self.size,
            snapshot_id: self.snapshot_id.and_then(none_if_empty),
            volume_type: self.volume_type.and_then(none_if_empty),
            encrypted: self.encrypted,
            attachments: self
                .attachment_set
                .item
                .into_iter()
                .map(AttachmentItem::into_attachment)
                .collect(),
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DescribeVolumesResponse {
    pub request_id: String,
    #[serde(default)]
    pub volume_set: ItemSet<VolumeItem>,
}

/// A freshly created volume is reported with its fields at the response
/// root rather than inside a set.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateVolumeResponse {
    pub request_id: String,
    pub volume_id: String,
    pub status: String,
    pub create_time: String,
    pub size: i64,
    pub snapshot_id: String,
    pub volume_type: String,
    pub encrypted: bool,
    #[serde(default)]
    pub attachment_set: ItemSet<AttachmentItem>,
}

impl CreateVolumeResponse {
    pub(crate) fn into_volume(self) -> Result<Volume> {
        Ok(Volume {
            volume_id: self.volume_id,
            status: self.status,
            create_time: Some(time::parse_response_datetime(&self.create_time)?),
            size: Some(self.size),
            snapshot_id: none_if_empty(self.snapshot_id),
            volume_type: none_if_empty(self.volume_type),
            encrypted: Some(self.encrypted),
            attachments: self
                .attachment_set
                .item
                .into_iter()
                .map(AttachmentItem::into_attachment)
                .collect(),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SnapshotItem {
    pub snapshot_id: String,
    pub volume_id: String,
    pub status: String,
    pub start_time: Option<String>,
    pub volume_size: Option<i64>,
    pub encrypted: Option<bool>,
}

impl SnapshotItem {
    pub(crate) fn into_snapshot(self) -> Result<Snapshot> {
        Ok(Snapshot {
            snapshot_id: self.snapshot_id,
            volume_id: self.volume_id,
            status: self.status,
            start_time: parse_datetime_opt(self.start_time)?,
            volume_size: self.volume_size,
            encrypted: self.encrypted,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DescribeSnapshotsResponse {
    pub request_id: String,
    #[serde(default)]
    pub snapshot_set: ItemSet<SnapshotItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateSnapshotResponse {
    pub request_id: String,
    pub snapshot_id: String,
    pub volume_id: String,
    pub status: String,
    pub start_time: String,
    pub volume_size: i64,
    pub encrypted: bool,
}

impl CreateSnapshotResponse {
    pub(crate) fn into_snapshot(self) -> Result<Snapshot> {
        Ok(Snapshot {
            snapshot_id: self.snapshot_id,
            volume_id: self.volume_id,
            status: self.status,
            start_time: Some(time::parse_response_datetime(&self.start_time)?),
            volume_size: Some(self.volume_size),
            encrypted: Some(self.encrypted),
        })
    }
}

/// Shared by `DeleteVolume` and `DeleteSnapshot`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DeleteResponse {
    pub request_id: String,
    #[serde(rename = "return")]
    pub deleted: bool,
}
