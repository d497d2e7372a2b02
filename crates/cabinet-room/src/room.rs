//! A single cabin and its cost formula.

use std::fmt;

use cabinet_types::{Deck, Money, RoomCode};
use serde::{Deserialize, Serialize};

use crate::{DeckTariff, TariffTable};

/// Per-day price floor shared by every cabin on the standard vessel.
pub(crate) const DEFAULT_BASE_RATE: Money = Money(100_000);

// ---------------------------------------------------------------------------
// RoomStatus
// ---------------------------------------------------------------------------

/// Whether a cabin can be booked.
///
/// ```text
/// Available ──(booked)──→ Reserved ──(cancelled)──→ Available
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomStatus {
    Available,
    Reserved,
}

impl RoomStatus {
    fn from_flag(available: bool) -> Self {
        if available {
            Self::Available
        } else {
            Self::Reserved
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "Disponible"),
            Self::Reserved => write!(f, "No disponible"),
        }
    }
}

// ---------------------------------------------------------------------------
// Room
// ---------------------------------------------------------------------------

/// One cabin.
///
/// Code, capacity, deck and tariff are fixed for the cabin's lifetime.
/// Only the availability flag changes, and only through
/// [`set_availability`](Self::set_availability).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    code: RoomCode,
    capacity: u8,
    deck: Deck,
    available: bool,
    base_rate: Money,
    tariff: DeckTariff,
}

impl Room {
    /// Builds an available cabin priced with the stock tariff for `deck`.
    pub fn new(code: RoomCode, capacity: u8, deck: Deck) -> Self {
        Self::with_tariff(
            code,
            capacity,
            deck,
            DEFAULT_BASE_RATE,
            TariffTable::default().get(deck),
        )
    }

    /// Builds an available cabin with an explicit base rate and tariff.
    pub fn with_tariff(
        code: RoomCode,
        capacity: u8,
        deck: Deck,
        base_rate: Money,
        tariff: DeckTariff,
    ) -> Self {
        Self {
            code,
            capacity,
            deck,
            available: true,
            base_rate,
            tariff,
        }
    }

    pub fn code(&self) -> &RoomCode {
        &self.code
    }

    pub fn capacity(&self) -> u8 {
        self.capacity
    }

    pub fn deck(&self) -> Deck {
        self.deck
    }

    pub fn base_rate(&self) -> Money {
        self.base_rate
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn status(&self) -> RoomStatus {
        RoomStatus::from_flag(self.available)
    }

    /// Sets the availability flag and confirms the change.
    ///
    /// No checks are made: keeping the flag in step with the active
    /// reservations is the caller's job.
    pub fn set_availability(&mut self, available: bool) -> bool {
        self.available = available;
        tracing::trace!(room = %self.code, status = %self.status(), "availability set");
        true
    }

    /// Total price of a `days`-long stay:
    /// `(base_rate + surcharge × multiplier(capacity)) × days`.
    ///
    /// Linear in `days`; zero days costs nothing.
    pub fn cost(&self, days: u32) -> Money {
        self.daily_rate().times(days)
    }

    /// Price of a single day.
    pub fn daily_rate(&self) -> Money {
        self.base_rate + self.tariff.daily_surcharge(self.capacity)
    }
}

/// `E01 - Económica - 2 personas - Disponible - $180000`, priced for one day.
impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - {} personas - {} - ${}",
            self.code,
            self.deck,
            self.capacity,
            self.status(),
            self.cost(1)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(code: &str, capacity: u8, deck: Deck) -> Room {
        Room::new(RoomCode::from(code), capacity, deck)
    }

    #[test]
    fn test_new_room_is_available() {
        let r = room("E01", 2, Deck::Economy);
        assert!(r.is_available());
        assert_eq!(r.status(), RoomStatus::Available);
        assert_eq!(r.base_rate(), Money(100_000));
    }

    #[test]
    fn test_set_availability_is_unconditional() {
        let mut r = room("N01", 2, Deck::Standard);
        assert!(r.set_availability(false));
        assert!(!r.is_available());
        assert!(r.set_availability(false));
        assert_eq!(r.status(), RoomStatus::Reserved);
        assert!(r.set_availability(true));
        assert!(r.is_available());
    }

    #[test]
    fn test_cost_per_deck_and_capacity() {
        let cases = [
            (Deck::Economy, 2, 180_000),
            (Deck::Economy, 3, 188_000),
            (Deck::Economy, 4, 204_000),
            (Deck::Standard, 2, 200_000),
            (Deck::Standard, 3, 220_000),
            (Deck::Standard, 4, 250_000),
            (Deck::Premium, 2, 250_000),
            (Deck::Premium, 3, 295_000),
            (Deck::Premium, 4, 355_000),
        ];
        for (deck, capacity, daily) in cases {
            let r = room("X01", capacity, deck);
            assert_eq!(r.cost(1), Money(daily), "{deck} / {capacity}");
        }
    }

    #[test]
    fn test_cost_is_linear_in_days() {
        let r = room("P08", 4, Deck::Premium);
        for days in 1..=30 {
            assert_eq!(r.cost(days), r.cost(1).times(days));
        }
        assert_eq!(r.cost(2), Money(710_000));
    }

    #[test]
    fn test_cost_does_not_depend_on_availability() {
        let mut r = room("E01", 2, Deck::Economy);
        let before = r.cost(3);
        r.set_availability(false);
        assert_eq!(r.cost(3), before);
        assert_eq!(before, Money(540_000));
    }

    #[test]
    fn test_display_line() {
        let mut r = room("E01", 2, Deck::Economy);
        assert_eq!(r.to_string(), "E01 - Económica - 2 personas - Disponible - $180000");
        r.set_availability(false);
        assert_eq!(
            r.to_string(),
            "E01 - Económica - 2 personas - No disponible - $180000"
        );
    }
}
