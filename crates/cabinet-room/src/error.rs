//! Error types for ship configuration.

use cabinet_types::Deck;

/// Errors that can occur while loading or validating a [`ShipConfig`].
///
/// [`ShipConfig`]: crate::ShipConfig
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON didn't match the config shape.
    #[error("failed to parse ship config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The layout has no cabins at all.
    #[error("ship layout has no cabins")]
    EmptyLayout,

    /// A cabin block uses a capacity outside 2, 3 or 4.
    #[error("unsupported cabin capacity: {0}")]
    UnsupportedCapacity(u8),

    /// Cabin codes only have two digits.
    #[error("layout has {0} cabins per deck, at most 99 fit in a cabin code")]
    TooManyCabins(u32),

    /// Some cabin on this deck would cost more per day than
    /// [`MAX_DAILY_RATE`](crate::MAX_DAILY_RATE), so long stays couldn't
    /// be priced.
    #[error("deck {0} has a daily rate too large to price")]
    RateTooLarge(Deck),

    /// An occupancy multiplier of zero would make the surcharge vanish.
    #[error("deck {0} has a zero occupancy multiplier")]
    ZeroMultiplier(Deck),
}
