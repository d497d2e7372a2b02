//! Error types for the registry.

use cabinet_room::ConfigError;
use cabinet_types::{ReservationCode, RoomCode};

/// Errors returned by the registry's strict (`try_*`) operations.
///
/// The lenient operations fold these into `None`, `false`, zero or a
/// sentinel message instead.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// No cabin has this code.
    #[error("room {0} not found")]
    RoomNotFound(RoomCode),

    /// The cabin is already reserved.
    #[error("room {0} is not available")]
    RoomUnavailable(RoomCode),

    /// No active reservation has this code.
    #[error("reservation {0} not found")]
    ReservationNotFound(ReservationCode),

    /// The ship config couldn't be turned into an inventory.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
