//! Core types shared across Cabinet.
//!
//! Identifiers are newtype wrappers so a room code can't be passed where
//! a reservation code is expected, even though both print as short
//! strings. All of them serialize as their plain inner value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ParseError, normalize};

// ---------------------------------------------------------------------------
// Deck
// ---------------------------------------------------------------------------

/// The pricing tier a cabin belongs to.
///
/// A cabin's deck is fixed when it is built. Each deck has a display name
/// (what guests see, and what the deck filter matches against) and a
/// letter that prefixes its cabin codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Deck {
    Economy,
    Standard,
    Premium,
}

impl Deck {
    /// Every deck, cheapest first. Inventory is built in this order.
    pub const ALL: [Deck; 3] = [Deck::Economy, Deck::Standard, Deck::Premium];

    /// The name shown in room listings.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Economy => "Económica",
            Self::Standard => "Normal",
            Self::Premium => "Premium",
        }
    }

    /// The letter that prefixes this deck's cabin codes.
    pub fn letter(self) -> char {
        match self {
            Self::Economy => 'E',
            Self::Standard => 'N',
            Self::Premium => 'P',
        }
    }

    /// Looks a deck up by its cabin-code letter (either case).
    pub fn from_letter(letter: char) -> Result<Self, ParseError> {
        Self::ALL
            .into_iter()
            .find(|deck| deck.letter() == letter.to_ascii_uppercase())
            .ok_or(ParseError::UnknownDeckLetter(letter))
    }

    /// Returns `true` if `name` refers to this deck's display name,
    /// ignoring case and accents.
    pub fn matches_name(self, name: &str) -> bool {
        normalize(self.display_name()) == normalize(name)
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Parses display names and English tier names, ignoring case and
/// accents: `"Económica"`, `"economica"`, `"economy"`, `"normal"`,
/// `"standard"`, `"premium"`.
impl FromStr for Deck {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s.trim()).as_str() {
            "economica" | "economy" => Ok(Self::Economy),
            "normal" | "standard" => Ok(Self::Standard),
            "premium" => Ok(Self::Premium),
            _ => Err(ParseError::UnknownDeck(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// RoomCode
// ---------------------------------------------------------------------------

/// A cabin's unique code: deck letter plus a two-digit sequence (`E01`).
///
/// Lookups compare codes exactly, so `e01` does not find `E01`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomCode(String);

impl RoomCode {
    /// Wraps an arbitrary code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Builds the code for the `number`th cabin on `deck`.
    pub fn for_deck(deck: Deck, number: u8) -> Self {
        Self(format!("{}{:02}", deck.letter(), number))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// Parses typed-in codes such as `E01` or `p08`.
///
/// The first character must be a deck letter (either case) and the rest
/// at least two digits. The letter comes back uppercase, so `p08` parses
/// to `P08`.
impl FromStr for RoomCode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let letter = chars
            .next()
            .ok_or_else(|| ParseError::InvalidRoomCode(s.to_string()))?;
        let deck = Deck::from_letter(letter)?;

        let digits = chars.as_str();
        if digits.len() < 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidRoomCode(s.to_string()));
        }
        Ok(Self(format!("{}{digits}", deck.letter())))
    }
}

// ---------------------------------------------------------------------------
// ReservationCode
// ---------------------------------------------------------------------------

/// A reservation's code. Printed as `R` plus at least three digits.
///
/// The number comes from the registry's counter, which only ever goes
/// up; codes are never handed out twice in one registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationCode(pub u32);

impl fmt::Display for ReservationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{:03}", self.0)
    }
}

/// Accepts `R001`, `r1` and `R0042`. Surrounding whitespace is ignored.
impl FromStr for ReservationCode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .strip_prefix(['R', 'r'])
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|digits| digits.parse().ok())
            .map(Self)
            .ok_or_else(|| ParseError::InvalidReservationCode(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Occupants
// ---------------------------------------------------------------------------

/// An opaque occupant identifier supplied by whoever keeps the guest list.
///
/// The booking core stores and echoes it; it never looks inside.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OccupantId(String);

impl OccupantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OccupantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One berth in a reservation: either someone's identifier or left empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OccupantSlot {
    Occupied(OccupantId),
    Vacant,
}

impl OccupantSlot {
    pub fn occupied(id: impl Into<String>) -> Self {
        Self::Occupied(OccupantId::new(id))
    }

    pub fn occupant(&self) -> Option<&OccupantId> {
        match self {
            Self::Occupied(id) => Some(id),
            Self::Vacant => None,
        }
    }
}

impl fmt::Display for OccupantSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Occupied(id) => write!(f, "{id}"),
            Self::Vacant => f.write_str("Vacante"),
        }
    }
}

impl From<Option<OccupantId>> for OccupantSlot {
    fn from(slot: Option<OccupantId>) -> Self {
        slot.map_or(Self::Vacant, Self::Occupied)
    }
}

// ---------------------------------------------------------------------------
// Money
// ---------------------------------------------------------------------------

/// An amount in whole currency units.
///
/// Prices are exact integers; multipliers are applied as percentages so
/// no rounding ever leaks into a quote.
///
/// The plain operators saturate at `u64::MAX` instead of overflowing.
/// The `checked_*` forms report overflow; config validation uses them to
/// reject rates that could not be priced.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(pub u64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Scales by a percentage, truncating any fraction of a unit.
    pub fn percent(self, pct: u32) -> Money {
        self.checked_percent(pct).unwrap_or(Money(u64::MAX))
    }

    pub fn checked_percent(self, pct: u32) -> Option<Money> {
        let scaled = u128::from(self.0) * u128::from(pct) / 100;
        u64::try_from(scaled).ok().map(Money)
    }

    /// Multiplies by a whole count (days, cabins).
    pub fn times(self, count: u32) -> Money {
        Money(self.0.saturating_mul(u64::from(count)))
    }

    pub fn checked_times(self, count: u32) -> Option<Money> {
        self.0.checked_mul(u64::from(count)).map(Money)
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =====================================================================
    // Deck
    // =====================================================================

    #[test]
    fn test_deck_display_uses_guest_facing_names() {
        assert_eq!(Deck::Economy.to_string(), "Económica");
        assert_eq!(Deck::Standard.to_string(), "Normal");
        assert_eq!(Deck::Premium.to_string(), "Premium");
    }

    #[test]
    fn test_deck_parses_ignoring_case_and_accents() {
        assert_eq!("ECONÓMICA".parse::<Deck>(), Ok(Deck::Economy));
        assert_eq!("economica".parse::<Deck>(), Ok(Deck::Economy));
        assert_eq!(" Standard ".parse::<Deck>(), Ok(Deck::Standard));
        assert_eq!("normal".parse::<Deck>(), Ok(Deck::Standard));
        assert_eq!("PREMIUM".parse::<Deck>(), Ok(Deck::Premium));
    }

    #[test]
    fn test_deck_parse_rejects_unknown_names() {
        assert_eq!(
            "lujo".parse::<Deck>(),
            Err(ParseError::UnknownDeck("lujo".into()))
        );
    }

    #[test]
    fn test_deck_letters_round_trip() {
        for deck in Deck::ALL {
            assert_eq!(Deck::from_letter(deck.letter()), Ok(deck));
        }
        assert_eq!(Deck::from_letter('p'), Ok(Deck::Premium));
        assert!(Deck::from_letter('X').is_err());
    }

    #[test]
    fn test_deck_matches_name() {
        assert!(Deck::Economy.matches_name("Económica"));
        assert!(Deck::Economy.matches_name("ECONOMICA"));
        assert!(!Deck::Economy.matches_name("economy"));
        assert!(!Deck::Premium.matches_name("Normal"));
    }

    // =====================================================================
    // Identity types
    // =====================================================================

    #[test]
    fn test_room_code_for_deck_pads_sequence() {
        assert_eq!(RoomCode::for_deck(Deck::Economy, 1).as_str(), "E01");
        assert_eq!(RoomCode::for_deck(Deck::Standard, 10).as_str(), "N10");
    }

    #[test]
    fn test_room_code_serializes_as_plain_string() {
        let json = serde_json::to_string(&RoomCode::from("P08")).unwrap();
        assert_eq!(json, "\"P08\"");
    }

    #[test]
    fn test_room_code_parse_canonicalizes_letter() {
        assert_eq!("E01".parse::<RoomCode>(), Ok(RoomCode::from("E01")));
        assert_eq!(" p08 ".parse::<RoomCode>(), Ok(RoomCode::from("P08")));
        assert_eq!("n10".parse::<RoomCode>(), Ok(RoomCode::from("N10")));
    }

    #[test]
    fn test_room_code_parse_rejects_bad_input() {
        assert_eq!(
            "X01".parse::<RoomCode>(),
            Err(ParseError::UnknownDeckLetter('X'))
        );
        for input in ["", "E", "E1", "E0a", "01"] {
            assert!(input.parse::<RoomCode>().is_err(), "{input:?}");
        }
    }

    #[test]
    fn test_reservation_code_display() {
        assert_eq!(ReservationCode(1).to_string(), "R001");
        assert_eq!(ReservationCode(42).to_string(), "R042");
        assert_eq!(ReservationCode(1234).to_string(), "R1234");
    }

    #[test]
    fn test_reservation_code_parse() {
        assert_eq!("R001".parse::<ReservationCode>(), Ok(ReservationCode(1)));
        assert_eq!(" r7 ".parse::<ReservationCode>(), Ok(ReservationCode(7)));
        assert!("001".parse::<ReservationCode>().is_err());
        assert!("R".parse::<ReservationCode>().is_err());
        assert!("R-1".parse::<ReservationCode>().is_err());
    }

    #[test]
    fn test_occupant_slot_display_marks_vacancy() {
        assert_eq!(OccupantSlot::occupied("U001").to_string(), "U001");
        assert_eq!(OccupantSlot::Vacant.to_string(), "Vacante");
    }

    #[test]
    fn test_occupant_slot_from_option() {
        assert_eq!(OccupantSlot::from(None), OccupantSlot::Vacant);
        let slot = OccupantSlot::from(Some(OccupantId::new("U002")));
        assert_eq!(slot.occupant().map(OccupantId::as_str), Some("U002"));
    }

    // =====================================================================
    // Money
    // =====================================================================

    #[test]
    fn test_money_percent_is_exact_for_tariff_values() {
        assert_eq!(Money(80_000).percent(110), Money(88_000));
        assert_eq!(Money(150_000).percent(170), Money(255_000));
    }

    #[test]
    fn test_money_operators_saturate_instead_of_overflowing() {
        let huge = Money(u64::MAX - 1);
        assert_eq!(huge + Money(10), Money(u64::MAX));
        assert_eq!(huge.times(3), Money(u64::MAX));
        assert_eq!(huge.percent(170), Money(u64::MAX));
        assert_eq!(Money(u64::MAX).percent(100), Money(u64::MAX));
    }

    #[test]
    fn test_money_checked_forms_report_overflow() {
        assert_eq!(Money(u64::MAX).checked_add(Money(1)), None);
        assert_eq!(Money(u64::MAX).checked_times(2), None);
        assert_eq!(Money(u64::MAX).checked_percent(101), None);
        assert_eq!(Money(200).checked_percent(150), Some(Money(300)));
    }

    #[test]
    fn test_money_display_has_no_decimals() {
        assert_eq!((Money(100_000) + Money(80_000)).times(3).to_string(), "540000");
    }
}
