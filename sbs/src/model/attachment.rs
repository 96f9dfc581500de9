/// One device a volume is attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Device name on the instance, e.g. `/dev/vdb`.
    pub device: String,
    /// ID of the instance the volume is attached to.
    pub instance_id: String,
}
