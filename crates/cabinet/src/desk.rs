//! The front desk: a shared, lock-guarded registry plus guest book.
//!
//! The registry's booking check (is the cabin free?) and its flip (mark
//! it reserved) are two steps. `FrontDesk` runs both, along with the
//! guest-book updates that go with them, under one `tokio::sync::Mutex`,
//! so concurrent callers can never book the same cabin twice.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use cabinet_guest::{Guest, GuestBook, GuestCode, GuestError};
use cabinet_registry::{Registry, RegistryError};
use cabinet_room::{Room, ShipConfig};
use cabinet_types::{Money, OccupantId, OccupantSlot, ReservationCode, RoomCode};
use serde::Serialize;
use tokio::sync::Mutex;

use crate::CabinetError;

// ---------------------------------------------------------------------------
// Requests and replies
// ---------------------------------------------------------------------------

/// A booking as the desk receives it: one entry per berth, `None` for a
/// berth left vacant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub room: RoomCode,
    pub days: u32,
    pub occupants: Vec<Option<GuestCode>>,
}

impl BookingRequest {
    pub fn new(room: impl Into<RoomCode>, days: u32, occupants: Vec<Option<GuestCode>>) -> Self {
        Self {
            room: room.into(),
            days,
            occupants,
        }
    }

    /// Checks the request against the cabin it targets and the guests
    /// it names.
    ///
    /// The registry books whatever it is handed; these are the rules it
    /// leaves to its callers.
    fn validate(&self, room: &Room, guests: &GuestBook) -> Result<(), CabinetError> {
        if self.days == 0 {
            return Err(CabinetError::InvalidDuration);
        }
        if self.occupants.len() != usize::from(room.capacity()) {
            return Err(CabinetError::SlotCountMismatch {
                room: self.room.clone(),
                capacity: room.capacity(),
                given: self.occupants.len(),
            });
        }

        let mut seen = HashSet::new();
        for code in self.occupants.iter().flatten() {
            if !seen.insert(*code) {
                return Err(CabinetError::DuplicateGuest(*code));
            }
            let guest = guests.get(*code).ok_or(GuestError::NotFound(*code))?;
            if let Some(held) = guest.reservation {
                return Err(GuestError::AlreadyBooked {
                    guest: *code,
                    reservation: held,
                }
                .into());
            }
        }
        if seen.is_empty() {
            return Err(CabinetError::NoOccupants);
        }
        Ok(())
    }

    fn slots(&self) -> Vec<OccupantSlot> {
        self.occupants
            .iter()
            .map(|&slot| OccupantSlot::from(slot.map(OccupantId::from)))
            .collect()
    }
}

/// What a successful booking hands back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingReceipt {
    pub reservation: ReservationCode,
    pub room: RoomCode,
    pub cost: Money,
}

/// What a successful cancellation hands back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cancellation {
    pub reservation: ReservationCode,
    pub room: RoomCode,

    /// Guests whose link to the reservation was cleared.
    pub released: Vec<GuestCode>,
}

// ---------------------------------------------------------------------------
// FrontDesk
// ---------------------------------------------------------------------------

/// State guarded by the desk's lock.
#[derive(Debug)]
struct DeskState {
    registry: Registry,
    guests: GuestBook,
}

impl DeskState {
    fn cancel(&mut self, reservation: ReservationCode) -> Result<Cancellation, CabinetError> {
        let cancelled = match self.registry.try_cancel_reservation(reservation) {
            Ok(cancelled) => cancelled,
            Err(e) => {
                // A guest link can't outlive its reservation.
                let stale = self.guests.release(reservation);
                if !stale.is_empty() {
                    tracing::warn!(
                        %reservation,
                        guests = stale.len(),
                        "dropped links to unknown reservation"
                    );
                }
                return Err(e.into());
            }
        };
        let released = self.guests.release(reservation);
        Ok(Cancellation {
            reservation,
            room: cancelled.room().clone(),
            released,
        })
    }
}

/// Cloneable handle to one ship's registry and guest book.
///
/// Every clone talks to the same state. Each method takes the lock once,
/// so a booking (availability check, flip, guest links) is atomic with
/// respect to every other call.
#[derive(Debug, Clone)]
pub struct FrontDesk {
    state: Arc<Mutex<DeskState>>,
}

impl FrontDesk {
    /// A desk for the standard 30-cabin ship.
    pub fn new() -> Self {
        Self::from_registry(Registry::new())
    }

    /// A desk for the ship described by `config`.
    pub fn with_config(config: &ShipConfig) -> Result<Self, CabinetError> {
        Ok(Self::from_registry(Registry::with_config(config)?))
    }

    /// Reads a JSON ship config from disk and builds a desk for it.
    pub async fn from_config_file(path: impl AsRef<Path>) -> Result<Self, CabinetError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CabinetError::Io {
                path: path.display().to_string(),
                source,
            })?;
        let config = ShipConfig::from_json(&json)?;
        tracing::info!(path = %path.display(), "ship config loaded");
        Self::with_config(&config)
    }

    fn from_registry(registry: Registry) -> Self {
        Self {
            state: Arc::new(Mutex::new(DeskState {
                registry,
                guests: GuestBook::new(),
            })),
        }
    }

    // -- Rooms --

    /// A copy of one cabin, if it exists.
    pub async fn room(&self, code: &RoomCode) -> Option<Room> {
        self.state.lock().await.registry.find_room(code).cloned()
    }

    /// Listing lines for available cabins matching the filters.
    /// See [`Registry::list_available`].
    pub async fn available_rooms(&self, deck: Option<&str>, capacity: Option<u8>) -> Vec<String> {
        let state = self.state.lock().await;
        state
            .registry
            .list_available(deck, capacity)
            .into_iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Price of a stay, failing for an unknown cabin.
    pub async fn quote(&self, room: &RoomCode, days: u32) -> Result<Money, CabinetError> {
        Ok(self.state.lock().await.registry.quote(room, days)?)
    }

    // -- Guests --

    /// Registers a guest, or returns the one already holding `code`.
    pub async fn register_guest(&self, name: &str, code: Option<GuestCode>) -> Guest {
        self.state.lock().await.guests.register(name, code).clone()
    }

    pub async fn guest(&self, code: GuestCode) -> Option<Guest> {
        self.state.lock().await.guests.get(code).cloned()
    }

    // -- Booking --

    /// Validates and books a request, then links every named guest to
    /// the new reservation.
    ///
    /// # Errors
    /// - [`RegistryError::RoomNotFound`] / [`RegistryError::RoomUnavailable`]
    /// - [`CabinetError::InvalidDuration`], [`CabinetError::SlotCountMismatch`],
    ///   [`CabinetError::NoOccupants`], [`CabinetError::DuplicateGuest`]
    /// - [`GuestError::NotFound`] / [`GuestError::AlreadyBooked`]
    pub async fn book(&self, request: BookingRequest) -> Result<BookingReceipt, CabinetError> {
        let mut state = self.state.lock().await;
        let DeskState { registry, guests } = &mut *state;

        let room = registry
            .find_room(&request.room)
            .ok_or_else(|| RegistryError::RoomNotFound(request.room.clone()))?;
        if !room.is_available() {
            return Err(RegistryError::RoomUnavailable(request.room.clone()).into());
        }
        request.validate(room, guests)?;
        let cost = room.cost(request.days);

        let reservation =
            registry.try_create_reservation(request.slots(), &request.room, request.days)?;
        for code in request.occupants.iter().flatten() {
            guests.attach(*code, reservation)?;
        }

        tracing::info!(%reservation, room = %request.room, %cost, "booking confirmed");
        Ok(BookingReceipt {
            reservation,
            room: request.room,
            cost,
        })
    }

    // -- Cancellation --

    /// Cancels a reservation by code and clears it from its guests.
    pub async fn cancel(&self, reservation: ReservationCode) -> Result<Cancellation, CabinetError> {
        let mut state = self.state.lock().await;
        state.cancel(reservation)
    }

    /// Cancels whatever reservation `guest` holds, clearing it from every
    /// guest on it.
    ///
    /// # Errors
    /// - [`GuestError::NotFound`]: unknown guest
    /// - [`GuestError::NoReservation`]: the guest holds nothing
    pub async fn cancel_for_guest(&self, guest: GuestCode) -> Result<Cancellation, CabinetError> {
        let mut state = self.state.lock().await;

        let reservation = state.guests.detach(guest)?;
        let mut cancelled = state.cancel(reservation)?;
        cancelled.released.push(guest);
        cancelled.released.sort();
        Ok(cancelled)
    }

    // -- Reports --

    /// The reservation's detail line, or the not-found sentinel.
    pub async fn describe(&self, reservation: ReservationCode) -> String {
        self.state.lock().await.registry.describe_reservation(reservation)
    }

    /// One detail line per active reservation, in booking order.
    pub async fn reservations(&self) -> Vec<String> {
        self.state.lock().await.registry.list_reservations()
    }
}

impl Default for FrontDesk {
    fn default() -> Self {
        Self::new()
    }
}
