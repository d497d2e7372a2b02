//! The guest book: every registered guest, keyed by code.

use std::collections::BTreeMap;

use cabinet_types::ReservationCode;
use chrono::{Local, NaiveDateTime};

use crate::{Guest, GuestCode, GuestError};

/// Registers guests and tracks which reservation each one holds.
///
/// Codes handed out automatically come from a counter owned by the book
/// (`U001`, `U002`, ...). Codes a guest brings along are honored; the
/// counter skips over them so the two never collide.
///
/// ```text
/// register() ──→ [no reservation] ──attach()──→ [holds R00n]
///                       ↑                            │
///                       └──────────detach()──────────┘
/// ```
#[derive(Debug, Clone, Default)]
pub struct GuestBook {
    guests: BTreeMap<GuestCode, Guest>,

    /// Number behind the next automatic code.
    next_code: u32,
}

impl GuestBook {
    /// Creates an empty guest book. The first automatic code is `U001`.
    pub fn new() -> Self {
        Self {
            guests: BTreeMap::new(),
            next_code: 1,
        }
    }

    /// Registers a guest now. See [`register_at`](Self::register_at).
    pub fn register(&mut self, name: &str, code: Option<GuestCode>) -> &Guest {
        self.register_at(name, code, Local::now().naive_local())
    }

    /// Registers `name` under `code`, or under the next free automatic
    /// code when `code` is `None`.
    ///
    /// If `code` is already taken the existing guest is returned
    /// unchanged (the desk treats a known code as a returning guest).
    pub fn register_at(
        &mut self,
        name: &str,
        code: Option<GuestCode>,
        registered_at: NaiveDateTime,
    ) -> &Guest {
        let code = code.unwrap_or_else(|| self.allocate_code());

        self.guests.entry(code).or_insert_with(|| {
            tracing::info!(guest = %code, "guest registered");
            Guest {
                name: name.to_string(),
                code,
                registered_at,
                reservation: None,
            }
        })
    }

    fn allocate_code(&mut self) -> GuestCode {
        // `new()` starts at 1, `Default` at 0; neither hands out U000.
        self.next_code = self.next_code.max(1);
        while self.guests.contains_key(&GuestCode(self.next_code)) {
            self.next_code += 1;
        }
        let code = GuestCode(self.next_code);
        self.next_code += 1;
        code
    }

    pub fn get(&self, code: GuestCode) -> Option<&Guest> {
        self.guests.get(&code)
    }

    pub fn len(&self) -> usize {
        self.guests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guests.is_empty()
    }

    /// Records that `code` now holds `reservation`.
    ///
    /// # Errors
    /// - [`GuestError::NotFound`]: unknown guest
    /// - [`GuestError::AlreadyBooked`]: the guest already holds one
    pub fn attach(
        &mut self,
        code: GuestCode,
        reservation: ReservationCode,
    ) -> Result<(), GuestError> {
        let guest = self.guests.get_mut(&code).ok_or(GuestError::NotFound(code))?;
        if let Some(held) = guest.reservation {
            return Err(GuestError::AlreadyBooked {
                guest: code,
                reservation: held,
            });
        }
        guest.reservation = Some(reservation);
        tracing::debug!(guest = %code, %reservation, "reservation attached");
        Ok(())
    }

    /// Clears the guest's reservation and returns it.
    ///
    /// # Errors
    /// - [`GuestError::NotFound`]: unknown guest
    /// - [`GuestError::NoReservation`]: nothing to clear
    pub fn detach(&mut self, code: GuestCode) -> Result<ReservationCode, GuestError> {
        let guest = self.guests.get_mut(&code).ok_or(GuestError::NotFound(code))?;
        let reservation = guest.reservation.take().ok_or(GuestError::NoReservation(code))?;
        tracing::debug!(guest = %code, %reservation, "reservation detached");
        Ok(reservation)
    }

    /// Detaches `reservation` from every guest holding it, returning
    /// their codes.
    pub fn release(&mut self, reservation: ReservationCode) -> Vec<GuestCode> {
        let mut released = Vec::new();
        for guest in self.guests.values_mut() {
            if guest.reservation == Some(reservation) {
                guest.reservation = None;
                released.push(guest.code);
            }
        }
        released
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- register() -------------------------------------------------------

    #[test]
    fn test_register_assigns_sequential_codes() {
        let mut book = GuestBook::new();
        assert_eq!(book.register("Ana", None).code, GuestCode(1));
        assert_eq!(book.register("Luis", None).code, GuestCode(2));
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_register_default_book_starts_at_one() {
        let mut book = GuestBook::default();
        assert_eq!(book.register("Ana", None).code, GuestCode(1));
    }

    #[test]
    fn test_register_explicit_code_is_kept() {
        let mut book = GuestBook::new();
        let guest = book.register("Marta", Some(GuestCode(40)));
        assert_eq!(guest.code.to_string(), "U040");
        assert_eq!(guest.name, "Marta");
    }

    #[test]
    fn test_register_existing_code_returns_existing_guest() {
        let mut book = GuestBook::new();
        book.register("Marta", Some(GuestCode(5)));
        let again = book.register("Someone Else", Some(GuestCode(5)));
        assert_eq!(again.name, "Marta");
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_automatic_codes_skip_taken_ones() {
        let mut book = GuestBook::new();
        book.register("Marta", Some(GuestCode(1)));
        book.register("Pablo", Some(GuestCode(2)));
        assert_eq!(book.register("Ana", None).code, GuestCode(3));
    }

    // -- attach() / detach() ---------------------------------------------

    #[test]
    fn test_attach_then_detach() {
        let mut book = GuestBook::new();
        let code = book.register("Ana", None).code;

        book.attach(code, ReservationCode(1)).unwrap();
        assert_eq!(book.get(code).unwrap().reservation, Some(ReservationCode(1)));

        assert_eq!(book.detach(code), Ok(ReservationCode(1)));
        assert_eq!(book.get(code).unwrap().reservation, None);
    }

    #[test]
    fn test_attach_twice_is_rejected() {
        let mut book = GuestBook::new();
        let code = book.register("Ana", None).code;
        book.attach(code, ReservationCode(1)).unwrap();
        assert_eq!(
            book.attach(code, ReservationCode(2)),
            Err(GuestError::AlreadyBooked {
                guest: code,
                reservation: ReservationCode(1),
            })
        );
    }

    #[test]
    fn test_detach_without_reservation_fails() {
        let mut book = GuestBook::new();
        let code = book.register("Ana", None).code;
        assert_eq!(book.detach(code), Err(GuestError::NoReservation(code)));
        assert_eq!(
            book.detach(GuestCode(99)),
            Err(GuestError::NotFound(GuestCode(99)))
        );
    }

    #[test]
    fn test_release_clears_every_holder() {
        let mut book = GuestBook::new();
        let a = book.register("Ana", None).code;
        let b = book.register("Luis", None).code;
        let c = book.register("Marta", None).code;
        book.attach(a, ReservationCode(1)).unwrap();
        book.attach(b, ReservationCode(1)).unwrap();
        book.attach(c, ReservationCode(2)).unwrap();

        assert_eq!(book.release(ReservationCode(1)), [a, b]);
        assert_eq!(book.get(a).unwrap().reservation, None);
        assert_eq!(book.get(c).unwrap().reservation, Some(ReservationCode(2)));
    }
}
