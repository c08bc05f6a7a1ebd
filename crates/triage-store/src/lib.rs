pub mod document;
pub mod error;
pub mod overrides;
pub mod snapshot;

pub use error::{Result, StoreError};
pub use overrides::{AvailabilityOverride, AvailabilityOverrides, OVERRIDES_FILE, OverrideStore};
pub use snapshot::{ROSTER_FILE, RosterSnapshot, SnapshotStore, sha256_hex};
