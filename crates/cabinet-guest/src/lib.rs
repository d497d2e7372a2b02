//! Guest registry for Cabinet.
//!
//! Guests are the people who fill a reservation's berths. The booking
//! core only ever sees their codes (as opaque occupant ids); this crate
//! keeps the names behind those codes and remembers which reservation,
//! if any, each guest currently holds.
//!
//! # Key types
//!
//! - [`GuestCode`]: `U` plus three digits, parsed leniently from `7`, `u7`, `U007`
//! - [`Guest`]: name, code, registration date, current reservation
//! - [`GuestBook`]: registers guests and hands out codes
//! - [`GuestError`]: what can go wrong

mod book;
mod error;
mod guest;

pub use book::GuestBook;
pub use error::GuestError;
pub use guest::{Guest, GuestCode};
