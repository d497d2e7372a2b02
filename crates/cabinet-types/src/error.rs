//! Error types for parsing user-supplied identifiers.

/// Errors that can occur when turning text into a Cabinet type.
///
/// These only come up at the edges (menus, config files). Once a value
/// has been parsed, the rest of the workspace treats it as valid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The text doesn't name any known deck.
    #[error("unknown deck: {0:?}")]
    UnknownDeck(String),

    /// A deck letter outside `E`, `N`, `P`.
    #[error("unknown deck letter: {0:?}")]
    UnknownDeckLetter(char),

    /// The text isn't a cabin code like `E01`.
    #[error("invalid room code: {0:?}")]
    InvalidRoomCode(String),

    /// The text isn't a reservation code like `R001`.
    #[error("invalid reservation code: {0:?}")]
    InvalidReservationCode(String),
}
