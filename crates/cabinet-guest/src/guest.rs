//! Guest records and guest codes.

use std::fmt;
use std::str::FromStr;

use cabinet_types::{OccupantId, ReservationCode};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::GuestError;

// ---------------------------------------------------------------------------
// GuestCode
// ---------------------------------------------------------------------------

/// A guest's code, printed as `U` plus at least three digits (`U007`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuestCode(pub u32);

impl fmt::Display for GuestCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U{:03}", self.0)
    }
}

/// Accepts a bare number (`7`) or a `U`-prefixed one (`U007`, `u7`).
/// All three parse to the same code.
impl FromStr for GuestCode {
    type Err = GuestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix(['U', 'u']).unwrap_or(trimmed);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(GuestError::InvalidCode(s.to_string()));
        }
        digits
            .parse()
            .map(Self)
            .map_err(|_| GuestError::InvalidCode(s.to_string()))
    }
}

/// Guests fill reservation slots under their code.
impl From<GuestCode> for OccupantId {
    fn from(code: GuestCode) -> Self {
        OccupantId::new(code.to_string())
    }
}

// ---------------------------------------------------------------------------
// Guest
// ---------------------------------------------------------------------------

/// Someone registered with the front desk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub name: String,
    pub code: GuestCode,
    pub registered_at: NaiveDateTime,

    /// The reservation this guest currently belongs to. At most one.
    pub reservation: Option<ReservationCode>,
}

impl fmt::Display for Guest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - ID: {} - Registro: {}",
            self.name,
            self.code,
            self.registered_at.format("%Y-%m-%d")
        )
    }
}
