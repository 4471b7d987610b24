// 📋 Reservation Ledger - Active bookings by id
//
// A Reservation binds one room unit to one customer for a date. The
// ledger only holds active entries: cancellation removes the entry
// outright, after which the id is no longer resolvable.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// RESERVATION ENTITY
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    /// Stable identity (UUID v4) - what the guest quotes at the desk
    pub id: Uuid,

    /// Position of the booked tier in the room inventory
    pub room_index: usize,

    pub customer_id: Uuid,

    /// Reservation date as entered, already validated as RFC 3339
    pub date: String,
}

// ============================================================================
// RESERVATION LEDGER
// ============================================================================

pub struct ReservationLedger {
    reservations: Vec<Reservation>,
}

impl ReservationLedger {
    pub fn new() -> Self {
        ReservationLedger {
            reservations: Vec::new(),
        }
    }

    /// Append a new reservation with a freshly generated id.
    pub fn create(&mut self, room_index: usize, customer_id: Uuid, date: impl Into<String>) -> Uuid {
        let reservation = Reservation {
            id: Uuid::new_v4(),
            room_index,
            customer_id,
            date: date.into(),
        };
        let id = reservation.id;
        self.reservations.push(reservation);
        id
    }

    pub fn find(&self, id: Uuid) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.id == id)
    }

    /// Remove an entry by id, returning it. Hard delete: afterwards the
    /// id resolves to nothing.
    pub fn remove(&mut self, id: Uuid) -> Option<Reservation> {
        let position = self.reservations.iter().position(|r| r.id == id)?;
        Some(self.reservations.remove(position))
    }

    pub fn count(&self) -> usize {
        self.reservations.len()
    }
}

impl Default for ReservationLedger {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
