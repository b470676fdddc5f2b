//! Device entities

use super::value_objects::{DeviceId, DeviceName};

/// A device record as returned by the name lookup query.
///
/// Only the identifier and the display name are projected; the notes field
/// is always fetched separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceRecord {
    pub id: DeviceId,
    pub device_name: DeviceName,
}

impl DeviceRecord {
    pub fn new(id: DeviceId, device_name: DeviceName) -> Self {
        Self { id, device_name }
    }
}
