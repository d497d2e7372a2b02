//! The registry: owns the cabins and the active reservations.

use cabinet_room::{Room, ShipConfig};
use cabinet_types::{Money, OccupantSlot, ReservationCode, RoomCode};
use chrono::{Local, NaiveDateTime};

use crate::{RegistryError, Reservation};

/// What [`Registry::describe_reservation`] returns for an unknown code.
pub const NOT_FOUND_MESSAGE: &str = "Reserva no encontrada.";

/// Owns every cabin on the ship and every active reservation.
///
/// Invariant: a cabin is unavailable exactly when one active reservation
/// references it. Booking requires an available cabin, so no cabin is
/// ever in two reservations at once.
///
/// ## Lifecycle
///
/// ```text
///              create_reservation()
///  [Available] ────────────────────→ [Reserved]
///       ↑                                │
///       └────── cancel_reservation() ────┘
/// ```
///
/// Cabins are built once by [`new`](Self::new) /
/// [`with_config`](Self::with_config) and never added or removed.
/// Reservation codes come from a counter owned by the registry; a
/// cancelled code is never reissued.
#[derive(Debug, Clone)]
pub struct Registry {
    /// Every cabin, in inventory order (deck by deck).
    rooms: Vec<Room>,

    /// Active reservations, in booking order.
    reservations: Vec<Reservation>,

    /// Number for the next reservation code.
    next_reservation: u32,
}

impl Registry {
    /// Builds the standard 30-cabin ship.
    pub fn new() -> Self {
        Self::from_rooms(ShipConfig::default().build_inventory())
    }

    /// Builds the inventory described by `config`.
    ///
    /// # Errors
    /// Returns [`RegistryError::Config`] if the config fails validation.
    pub fn with_config(config: &ShipConfig) -> Result<Self, RegistryError> {
        config.validate()?;
        Ok(Self::from_rooms(config.build_inventory()))
    }

    fn from_rooms(rooms: Vec<Room>) -> Self {
        tracing::info!(rooms = rooms.len(), "registry initialized");
        Self {
            rooms,
            reservations: Vec::new(),
            next_reservation: 1,
        }
    }

    // -- Rooms --

    /// Every cabin, available or not.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Looks a cabin up by exact code.
    pub fn find_room(&self, code: &RoomCode) -> Option<&Room> {
        self.rooms.iter().find(|room| room.code() == code)
    }

    fn find_room_mut(&mut self, code: &RoomCode) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|room| room.code() == code)
    }

    /// Available cabins, optionally narrowed by deck name and capacity.
    ///
    /// The deck name is compared to each deck's display name ignoring
    /// case and accents, so `"economica"` matches `Económica`. An empty
    /// name applies no deck filter. Both filters must hold when given.
    pub fn list_available(&self, deck: Option<&str>, capacity: Option<u8>) -> Vec<&Room> {
        let wanted_deck = deck.filter(|name| !name.is_empty());
        self.rooms
            .iter()
            .filter(|room| room.is_available())
            .filter(|room| wanted_deck.is_none_or(|name| room.deck().matches_name(name)))
            .filter(|room| capacity.is_none_or(|c| room.capacity() == c))
            .collect()
    }

    // -- Booking --

    /// Books a cabin, stamping the reservation with the current local time.
    ///
    /// Returns `None` if the cabin doesn't exist or is already reserved.
    /// See [`try_create_reservation_at`](Self::try_create_reservation_at).
    pub fn create_reservation(
        &mut self,
        occupants: Vec<OccupantSlot>,
        room: &RoomCode,
        days: u32,
    ) -> Option<ReservationCode> {
        self.try_create_reservation(occupants, room, days).ok()
    }

    /// Like [`create_reservation`](Self::create_reservation), but says
    /// why a booking was refused.
    pub fn try_create_reservation(
        &mut self,
        occupants: Vec<OccupantSlot>,
        room: &RoomCode,
        days: u32,
    ) -> Result<ReservationCode, RegistryError> {
        self.try_create_reservation_at(occupants, room, days, Local::now().naive_local())
    }

    /// Books `room` for `days` with the given occupant slots.
    ///
    /// On success the cabin becomes unavailable, the reservation is
    /// appended to the active list and its new code is returned.
    ///
    /// Slots, days and capacity are not checked here: a slot list that
    /// doesn't match the cabin's capacity, or a zero-day stay, is booked
    /// as given. Callers validate before booking.
    ///
    /// # Errors
    /// - [`RegistryError::RoomNotFound`]: no cabin with that code
    /// - [`RegistryError::RoomUnavailable`]: the cabin is already reserved
    pub fn try_create_reservation_at(
        &mut self,
        occupants: Vec<OccupantSlot>,
        room: &RoomCode,
        days: u32,
        created_at: NaiveDateTime,
    ) -> Result<ReservationCode, RegistryError> {
        let cabin = self.find_room_mut(room).ok_or_else(|| {
            tracing::debug!(%room, "booking refused, no such room");
            RegistryError::RoomNotFound(room.clone())
        })?;

        if !cabin.is_available() {
            tracing::debug!(%room, "booking refused, room already reserved");
            return Err(RegistryError::RoomUnavailable(room.clone()));
        }

        cabin.set_availability(false);

        let code = ReservationCode(self.next_reservation);
        self.next_reservation += 1;

        let reservation = Reservation::new(code, occupants, room.clone(), days, created_at);
        tracing::info!(
            reservation = %code,
            %room,
            days,
            occupants = reservation.occupant_ids().count(),
            "reservation created"
        );
        self.reservations.push(reservation);

        Ok(code)
    }

    // -- Cancellation --

    /// Cancels a reservation. Returns `false` if no active reservation
    /// has this code; nothing changes in that case.
    pub fn cancel_reservation(&mut self, code: ReservationCode) -> bool {
        self.try_cancel_reservation(code).is_ok()
    }

    /// Cancels a reservation and hands back the removed record.
    ///
    /// The referenced cabin is made available again. If that cabin can't
    /// be found the reservation is still removed.
    ///
    /// # Errors
    /// Returns [`RegistryError::ReservationNotFound`] for an unknown code.
    pub fn try_cancel_reservation(
        &mut self,
        code: ReservationCode,
    ) -> Result<Reservation, RegistryError> {
        let index = self
            .reservations
            .iter()
            .position(|r| r.code() == code)
            .ok_or(RegistryError::ReservationNotFound(code))?;

        let room = self.reservations[index].room().clone();
        match self.find_room_mut(&room) {
            Some(cabin) => {
                cabin.set_availability(true);
            }
            None => tracing::warn!(
                reservation = %code,
                %room,
                "cancelled reservation points at unknown room"
            ),
        }

        let reservation = self.reservations.remove(index);
        tracing::info!(
            reservation = %code,
            %room,
            days = reservation.days(),
            booked_at = %reservation.created_at(),
            "reservation cancelled"
        );
        Ok(reservation)
    }

    // -- Queries --

    /// Active reservations, in booking order.
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn find_reservation(&self, code: ReservationCode) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.code() == code)
    }

    /// The reservation's detail line, or [`NOT_FOUND_MESSAGE`].
    pub fn describe_reservation(&self, code: ReservationCode) -> String {
        self.find_reservation(code)
            .map_or_else(|| NOT_FOUND_MESSAGE.to_string(), ToString::to_string)
    }

    /// One detail line per active reservation, in booking order.
    pub fn list_reservations(&self) -> Vec<String> {
        self.reservations.iter().map(ToString::to_string).collect()
    }

    // -- Pricing --

    /// Cost of staying `days` in `room`, or zero if there is no such cabin.
    pub fn price_room(&self, room: &RoomCode, days: u32) -> Money {
        self.quote(room, days).unwrap_or(Money::ZERO)
    }

    /// Cost of staying `days` in `room`.
    ///
    /// # Errors
    /// Returns [`RegistryError::RoomNotFound`] for an unknown cabin, which
    /// [`price_room`](Self::price_room) can't tell apart from a free one.
    pub fn quote(&self, room: &RoomCode, days: u32) -> Result<Money, RegistryError> {
        self.find_room(room)
            .map(|cabin| cabin.cost(days))
            .ok_or_else(|| RegistryError::RoomNotFound(room.clone()))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
