//! Reservation records.

use std::fmt;

use cabinet_types::{OccupantId, OccupantSlot, ReservationCode, RoomCode};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A booked cabin: who is in it, for how long, and since when.
///
/// Reservations are immutable once made. The cabin is referenced by
/// code; a reservation never owns its room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    code: ReservationCode,
    room: RoomCode,
    occupants: Vec<OccupantSlot>,
    days: u32,
    created_at: NaiveDateTime,
}

impl Reservation {
    /// Records a reservation. The slot list is stored as given; the
    /// number of slots is never changed afterwards.
    pub fn new(
        code: ReservationCode,
        occupants: Vec<OccupantSlot>,
        room: RoomCode,
        days: u32,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            code,
            room,
            occupants,
            days,
            created_at,
        }
    }

    pub fn code(&self) -> ReservationCode {
        self.code
    }

    pub fn room(&self) -> &RoomCode {
        &self.room
    }

    pub fn occupants(&self) -> &[OccupantSlot] {
        &self.occupants
    }

    /// The occupied slots only, in slot order.
    pub fn occupant_ids(&self) -> impl Iterator<Item = &OccupantId> {
        self.occupants.iter().filter_map(OccupantSlot::occupant)
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let occupants = self
            .occupants
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "Reserva: {} | Usuarios: {} | Habitación: {} | Días: {} | Fecha: {}",
            self.code,
            occupants,
            self.room,
            self.days,
            self.created_at.format("%Y-%m-%d")
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(9, 30, 0))
            .unwrap()
    }

    #[test]
    fn test_display_joins_occupants_and_marks_vacancies() {
        let r = Reservation::new(
            ReservationCode(1),
            vec![
                OccupantSlot::occupied("U001"),
                OccupantSlot::Vacant,
                OccupantSlot::occupied("U003"),
            ],
            RoomCode::from("E05"),
            4,
            at(2025, 3, 7),
        );
        assert_eq!(
            r.to_string(),
            "Reserva: R001 | Usuarios: U001, Vacante, U003 | Habitación: E05 | Días: 4 | Fecha: 2025-03-07"
        );
    }

    #[test]
    fn test_occupant_ids_skip_vacancies() {
        let r = Reservation::new(
            ReservationCode(9),
            vec![OccupantSlot::Vacant, OccupantSlot::occupied("U002")],
            RoomCode::from("N01"),
            1,
            at(2025, 1, 1),
        );
        let ids: Vec<_> = r.occupant_ids().map(OccupantId::as_str).collect();
        assert_eq!(ids, ["U002"]);
        assert_eq!(r.occupants().len(), 2);
    }
}
