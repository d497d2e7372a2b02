//! # Cabinet
//!
//! Cabin inventory, tiered pricing and reservations for a single cruise
//! ship.
//!
//! The sub-crates each own one concern:
//!
//! - `cabinet-types`: codes, decks, money, accent-insensitive matching
//! - `cabinet-room`: cabins, deck tariffs, ship configuration
//! - `cabinet-registry`: the booking core ([`Registry`])
//! - `cabinet-guest`: the guest book ([`GuestBook`])
//!
//! This crate ties them together behind [`FrontDesk`], a cloneable handle
//! that serializes every booking and cancellation through one lock.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cabinet::prelude::*;
//!
//! # async fn run() -> Result<(), CabinetError> {
//! let desk = FrontDesk::new();
//! let ana = desk.register_guest("Ana", None).await.code;
//! let receipt = desk
//!     .book(BookingRequest::new("E01", 3, vec![Some(ana), None]))
//!     .await?;
//! println!("{} costs ${}", receipt.reservation, receipt.cost);
//! # Ok(())
//! # }
//! ```

mod desk;
mod error;
mod telemetry;

pub use desk::{BookingReceipt, BookingRequest, Cancellation, FrontDesk};
pub use error::CabinetError;
pub use telemetry::init_tracing;

pub use cabinet_guest::{Guest, GuestBook, GuestCode, GuestError};
pub use cabinet_registry::{NOT_FOUND_MESSAGE, Registry, RegistryError, Reservation};
pub use cabinet_room::{ConfigError, DeckTariff, Room, RoomStatus, ShipConfig};
pub use cabinet_types::{
    Deck, Money, OccupantId, OccupantSlot, ParseError, ReservationCode, RoomCode, normalize,
};

/// Everything a front-desk application usually needs.
pub mod prelude {
    pub use crate::{
        BookingReceipt, BookingRequest, CabinetError, Cancellation, Deck, FrontDesk, GuestCode,
        Money, NOT_FOUND_MESSAGE, ReservationCode, RoomCode, ShipConfig, init_tracing,
    };
}
