//! Reservation lifecycle for Cabinet.
//!
//! The [`Registry`] owns the ship's cabins and the list of active
//! reservations. Booking a cabin flips it to reserved and records a
//! [`Reservation`]; cancelling removes the record and frees the cabin.
//!
//! ```text
//! create_reservation: Registry → Room (check + flip) → Reservation → Registry
//! cancel_reservation: Registry → Reservation (locate) → Room (release) → Registry
//! ```
//!
//! Everything here is synchronous and in-memory. Sharing a registry
//! between tasks needs a lock around it (see `cabinet::FrontDesk`).

mod error;
mod registry;
mod reservation;

pub use error::RegistryError;
pub use registry::{NOT_FOUND_MESSAGE, Registry};
pub use reservation::Reservation;
