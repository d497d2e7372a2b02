//! Ship configuration: base rate, deck tariffs and cabin layout.

use cabinet_types::{Deck, Money, RoomCode};
use serde::{Deserialize, Serialize};

use crate::room::DEFAULT_BASE_RATE;
use crate::{ConfigError, Room};

/// The largest per-day rate a cabin may have. At this rate a stay of
/// `u32::MAX` days still fits in a [`Money`].
pub const MAX_DAILY_RATE: Money = Money(u64::MAX / u32::MAX as u64);

// ---------------------------------------------------------------------------
// Tariffs
// ---------------------------------------------------------------------------

/// Occupancy multipliers for one deck, as percentages (`110` = ×1.1).
///
/// Capacities other than 3 and 4 use `two`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyMultipliers {
    pub two: u32,
    pub three: u32,
    pub four: u32,
}

impl OccupancyMultipliers {
    /// The multiplier applied to a cabin with `capacity` berths.
    pub fn for_capacity(&self, capacity: u8) -> u32 {
        match capacity {
            3 => self.three,
            4 => self.four,
            _ => self.two,
        }
    }
}

/// What a deck adds on top of the base rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckTariff {
    /// Per-day surcharge before the occupancy multiplier.
    pub surcharge: Money,

    /// Scales the surcharge by cabin size.
    pub multipliers: OccupancyMultipliers,
}

impl DeckTariff {
    /// The per-day surcharge for a cabin of `capacity` berths.
    pub fn daily_surcharge(&self, capacity: u8) -> Money {
        self.surcharge.percent(self.multipliers.for_capacity(capacity))
    }
}

/// One tariff per deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TariffTable {
    pub economy: DeckTariff,
    pub standard: DeckTariff,
    pub premium: DeckTariff,
}

impl TariffTable {
    pub fn get(&self, deck: Deck) -> DeckTariff {
        match deck {
            Deck::Economy => self.economy,
            Deck::Standard => self.standard,
            Deck::Premium => self.premium,
        }
    }
}

impl Default for TariffTable {
    fn default() -> Self {
        Self {
            economy: DeckTariff {
                surcharge: Money(80_000),
                multipliers: OccupancyMultipliers { two: 100, three: 110, four: 130 },
            },
            standard: DeckTariff {
                surcharge: Money(100_000),
                multipliers: OccupancyMultipliers { two: 100, three: 120, four: 150 },
            },
            premium: DeckTariff {
                surcharge: Money(150_000),
                multipliers: OccupancyMultipliers { two: 100, three: 130, four: 170 },
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// A run of consecutively numbered cabins sharing a capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CabinBlock {
    pub capacity: u8,
    pub count: u8,
}

/// The cabin blocks every deck is built from, in numbering order.
///
/// The default gives each deck ten cabins: three doubles (`01`–`03`),
/// four triples (`04`–`07`) and three quads (`08`–`10`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipLayout {
    pub blocks: Vec<CabinBlock>,
}

impl ShipLayout {
    /// Cabins per deck.
    pub fn cabins_per_deck(&self) -> u32 {
        self.blocks.iter().map(|b| u32::from(b.count)).sum()
    }
}

impl Default for ShipLayout {
    fn default() -> Self {
        Self {
            blocks: vec![
                CabinBlock { capacity: 2, count: 3 },
                CabinBlock { capacity: 3, count: 4 },
                CabinBlock { capacity: 4, count: 3 },
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// ShipConfig
// ---------------------------------------------------------------------------

/// Everything needed to build a ship's cabin inventory.
///
/// `ShipConfig::default()` is the standard vessel: 30 cabins, a base
/// rate of 100,000 and the stock tariffs. Partial JSON documents fill
/// missing fields from the default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipConfig {
    /// Per-day price floor shared by every cabin.
    pub base_rate: Money,

    /// Per-deck surcharges and multipliers.
    pub tariffs: TariffTable,

    /// Cabin blocks repeated on every deck.
    pub layout: ShipLayout,
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            base_rate: DEFAULT_BASE_RATE,
            tariffs: TariffTable::default(),
            layout: ShipLayout::default(),
        }
    }
}

impl ShipConfig {
    /// Parses and validates a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the layout can be built into a valid inventory and
    /// that every cabin it builds can be priced for any stay length.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.layout.cabins_per_deck() == 0 {
            return Err(ConfigError::EmptyLayout);
        }
        if let Some(block) = self
            .layout
            .blocks
            .iter()
            .find(|b| !(2..=4).contains(&b.capacity))
        {
            return Err(ConfigError::UnsupportedCapacity(block.capacity));
        }
        let count = self.layout.cabins_per_deck();
        if count > 99 {
            return Err(ConfigError::TooManyCabins(count));
        }
        for deck in Deck::ALL {
            let tariff = self.tariffs.get(deck);
            let m = tariff.multipliers;
            if m.two == 0 || m.three == 0 || m.four == 0 {
                return Err(ConfigError::ZeroMultiplier(deck));
            }
            for pct in [m.two, m.three, m.four] {
                let daily = tariff
                    .surcharge
                    .checked_percent(pct)
                    .and_then(|surcharge| self.base_rate.checked_add(surcharge));
                if daily.is_none_or(|rate| rate > MAX_DAILY_RATE) {
                    return Err(ConfigError::RateTooLarge(deck));
                }
            }
        }
        Ok(())
    }

    /// Builds every cabin, deck by deck, numbering each deck from `01`.
    ///
    /// Call [`validate`](Self::validate) first: past 99 cabins per deck
    /// the codes grow a third digit, and past 255 they repeat.
    pub fn build_inventory(&self) -> Vec<Room> {
        let per_deck = self.layout.cabins_per_deck() as usize;
        let mut rooms = Vec::with_capacity(per_deck * Deck::ALL.len());
        for deck in Deck::ALL {
            let tariff = self.tariffs.get(deck);
            let mut number: u8 = 0;
            for block in &self.layout.blocks {
                for _ in 0..block.count {
                    number = number.saturating_add(1);
                    rooms.push(Room::with_tariff(
                        RoomCode::for_deck(deck, number),
                        block.capacity,
                        deck,
                        self.base_rate,
                        tariff,
                    ));
                }
            }
        }
        tracing::debug!(rooms = rooms.len(), "cabin inventory built");
        rooms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tariffs_match_deck_table() {
        let t = TariffTable::default();
        assert_eq!(t.get(Deck::Economy).surcharge, Money(80_000));
        assert_eq!(t.get(Deck::Standard).surcharge, Money(100_000));
        assert_eq!(t.get(Deck::Premium).surcharge, Money(150_000));
        assert_eq!(t.get(Deck::Premium).multipliers.for_capacity(4), 170);
        assert_eq!(t.get(Deck::Standard).multipliers.for_capacity(3), 120);
    }

    #[test]
    fn test_unlisted_capacity_uses_base_multiplier() {
        let m = TariffTable::default().economy.multipliers;
        assert_eq!(m.for_capacity(1), 100);
        assert_eq!(m.for_capacity(6), 100);
    }

    #[test]
    fn test_default_config_builds_thirty_cabins() {
        let rooms = ShipConfig::default().build_inventory();
        assert_eq!(rooms.len(), 30);
        assert!(rooms.iter().all(Room::is_available));

        for deck in Deck::ALL {
            let on_deck: Vec<_> = rooms.iter().filter(|r| r.deck() == deck).collect();
            assert_eq!(on_deck.len(), 10);
            assert_eq!(on_deck.iter().filter(|r| r.capacity() == 2).count(), 3);
            assert_eq!(on_deck.iter().filter(|r| r.capacity() == 3).count(), 4);
            assert_eq!(on_deck.iter().filter(|r| r.capacity() == 4).count(), 3);
        }
    }

    #[test]
    fn test_inventory_numbers_blocks_consecutively() {
        let rooms = ShipConfig::default().build_inventory();
        let code_of = |code: &str| rooms.iter().find(|r| r.code().as_str() == code);
        assert_eq!(code_of("E01").map(Room::capacity), Some(2));
        assert_eq!(code_of("E04").map(Room::capacity), Some(3));
        assert_eq!(code_of("N07").map(Room::capacity), Some(3));
        assert_eq!(code_of("P08").map(Room::capacity), Some(4));
        assert_eq!(code_of("P10").map(Room::capacity), Some(4));
        assert!(code_of("P11").is_none());
    }

    #[test]
    fn test_from_json_fills_missing_fields_from_default() {
        let config = ShipConfig::from_json(r#"{ "base_rate": 50000 }"#).unwrap();
        assert_eq!(config.base_rate, Money(50_000));
        assert_eq!(config.layout, ShipLayout::default());
        assert_eq!(config.tariffs, TariffTable::default());
    }

    #[test]
    fn test_from_json_rejects_bad_capacity() {
        let json = r#"{ "layout": { "blocks": [ { "capacity": 6, "count": 2 } ] } }"#;
        assert!(matches!(
            ShipConfig::from_json(json),
            Err(ConfigError::UnsupportedCapacity(6))
        ));
    }

    #[test]
    fn test_from_json_rejects_empty_layout() {
        let json = r#"{ "layout": { "blocks": [] } }"#;
        assert!(matches!(ShipConfig::from_json(json), Err(ConfigError::EmptyLayout)));
    }

    #[test]
    fn test_from_json_reports_parse_errors() {
        assert!(matches!(ShipConfig::from_json("{ nope"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validate_rejects_oversized_decks() {
        let config = ShipConfig {
            layout: ShipLayout {
                blocks: vec![
                    CabinBlock { capacity: 2, count: 60 },
                    CabinBlock { capacity: 4, count: 60 },
                ],
            },
            ..ShipConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooManyCabins(120))
        ));
    }

    #[test]
    fn test_from_json_rejects_unpriceable_base_rate() {
        let json = r#"{ "base_rate": 18446744073709551000 }"#;
        assert!(matches!(
            ShipConfig::from_json(json),
            Err(ConfigError::RateTooLarge(Deck::Economy))
        ));
    }

    #[test]
    fn test_validate_rejects_surcharge_that_overflows_when_scaled() {
        let mut config = ShipConfig::default();
        config.tariffs.premium.surcharge = Money(u64::MAX / 2);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::RateTooLarge(Deck::Premium))
        ));
    }

    #[test]
    fn test_largest_valid_rate_prices_longest_stay() {
        // Premium quads carry the biggest default surcharge: 150,000 × 1.7.
        let config = ShipConfig {
            base_rate: Money(MAX_DAILY_RATE.0 - 255_000),
            ..ShipConfig::default()
        };
        config.validate().unwrap();

        let rooms = config.build_inventory();
        let top = rooms.iter().map(|r| r.cost(1)).max().unwrap();
        assert_eq!(top, MAX_DAILY_RATE);
        for room in &rooms {
            assert!(room.cost(1).checked_times(u32::MAX).is_some());
        }

        let over = ShipConfig {
            base_rate: Money(MAX_DAILY_RATE.0 - 254_999),
            ..ShipConfig::default()
        };
        assert!(matches!(over.validate(), Err(ConfigError::RateTooLarge(Deck::Premium))));
    }

    #[test]
    fn test_validate_rejects_zero_multiplier() {
        let mut config = ShipConfig::default();
        config.tariffs.premium.multipliers.three = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroMultiplier(Deck::Premium))
        ));
    }
}
