//! Shared vocabulary for Cabinet.
//!
//! Every other crate in the workspace speaks in these types:
//!
//! - **Identity** ([`RoomCode`], [`ReservationCode`], [`OccupantId`]):
//!   the keys rooms, reservations and occupants are looked up by.
//! - **Decks** ([`Deck`]): the three pricing tiers a cabin belongs to.
//! - **Money** ([`Money`]): exact integer currency units.
//! - **Text** ([`normalize`]): case- and accent-insensitive matching.
//! - **Errors** ([`ParseError`]): what can go wrong turning user text
//!   into one of the above.
//!
//! This crate has no behavior beyond parsing and formatting. It doesn't
//! know about availability, pricing rules or reservations.

mod error;
mod text;
mod types;

pub use error::ParseError;
pub use text::normalize;
pub use types::{Deck, Money, OccupantId, OccupantSlot, ReservationCode, RoomCode};
