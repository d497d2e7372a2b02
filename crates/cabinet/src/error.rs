//! Unified error type for the front desk.

use cabinet_guest::{GuestCode, GuestError};
use cabinet_registry::RegistryError;
use cabinet_room::ConfigError;
use cabinet_types::RoomCode;

/// Top-level error that wraps every sub-crate's error, plus the checks
/// the front desk makes before handing a booking to the registry.
///
/// The `#[from]` variants let `?` convert sub-crate errors directly.
#[derive(Debug, thiserror::Error)]
pub enum CabinetError {
    /// Booking, cancellation or lookup failed in the registry.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// A guest lookup or reservation link failed.
    #[error(transparent)]
    Guest(#[from] GuestError),

    /// The ship config was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Reading a config file failed.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The stay was zero days long.
    #[error("a stay must last at least one day")]
    InvalidDuration,

    /// Every berth needs a slot, filled or vacant.
    #[error("room {room} has {capacity} berths but {given} slots were given")]
    SlotCountMismatch {
        room: RoomCode,
        capacity: u8,
        given: usize,
    },

    /// Every slot was left vacant.
    #[error("a reservation needs at least one occupant")]
    NoOccupants,

    /// The same guest was put in two slots.
    #[error("guest {0} appears in more than one slot")]
    DuplicateGuest(GuestCode),
}
