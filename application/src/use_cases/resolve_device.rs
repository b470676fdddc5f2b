//! Device name resolution
//!
//! Maps a display name to exactly one device id, applying the configured
//! [`ResolutionPolicy`] when the lookup does not return a single record.

use crate::ports::device_directory::{DeviceLookup, LookupError};
use crate::ports::session_provider::Session;
use devnotes_domain::{DeviceId, DeviceName, ResolutionPolicy};
use tracing::{debug, warn};

/// Resolve `name` to a device id.
///
/// - zero matches: [`LookupError::NotFound`] under every policy
/// - several matches: [`LookupError::Ambiguous`] under
///   [`ResolutionPolicy::Strict`], the first server-ordered record under
///   [`ResolutionPolicy::FirstMatch`]
pub async fn resolve_device_id(
    lookup: &dyn DeviceLookup,
    session: &Session,
    name: &DeviceName,
    policy: ResolutionPolicy,
) -> Result<DeviceId, LookupError> {
    let mut records = lookup.find_by_name(session, name).await?;
    debug!("Lookup for '{}' returned {} record(s)", name, records.len());

    match (records.len(), policy) {
        (0, _) => Err(LookupError::NotFound {
            name: name.to_string(),
        }),
        (1, _) => Ok(records.remove(0).id),
        (count, ResolutionPolicy::Strict) => Err(LookupError::Ambiguous {
            name: name.to_string(),
            count,
        }),
        (count, ResolutionPolicy::FirstMatch) => {
            let first = records.remove(0);
            warn!(
                "{} devices are named '{}'; using the first one ({})",
                count, name, first.id
            );
            Ok(first.id)
        }
    }
}
