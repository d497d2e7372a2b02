//! Error types for the guest registry.

use cabinet_types::ReservationCode;

use crate::GuestCode;

/// Errors that can occur while managing guests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuestError {
    /// The text isn't a guest code (`U001`, `u1` or `1`).
    #[error("invalid guest code: {0:?}")]
    InvalidCode(String),

    /// No guest is registered under this code.
    #[error("guest {0} not found")]
    NotFound(GuestCode),

    /// A guest can hold one reservation at a time.
    #[error("guest {guest} already holds reservation {reservation}")]
    AlreadyBooked {
        guest: GuestCode,
        reservation: ReservationCode,
    },

    /// The guest has nothing to cancel.
    #[error("guest {0} has no active reservation")]
    NoReservation(GuestCode),
}
