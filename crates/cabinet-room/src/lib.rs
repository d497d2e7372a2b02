//! Cabin inventory for Cabinet.
//!
//! A ship is a fixed set of cabins spread over three decks. Each cabin
//! knows its deck, how many berths it has, whether it is free, and how
//! much a stay costs.
//!
//! # Key types
//!
//! - [`Room`]: one cabin, with its availability flag and cost formula
//! - [`DeckTariff`] / [`TariffTable`]: per-deck surcharge and occupancy multipliers
//! - [`ShipLayout`]: how many cabins of each capacity every deck gets
//! - [`ShipConfig`]: base rate + tariffs + layout, loadable from JSON
//! - [`RoomStatus`]: the two-state availability machine

mod config;
mod error;
mod room;

pub use config::{
    CabinBlock, DeckTariff, MAX_DAILY_RATE, OccupancyMultipliers, ShipConfig, ShipLayout,
    TariffTable,
};
pub use error::ConfigError;
pub use room::{Room, RoomStatus};
