// 🛎️ Hotel Aggregate - reserve, look up, cancel
//
// Owns the three stores (room inventory, customer registry, reservation
// ledger) and is the only thing that mutates them. Every operation is
// atomic-or-nothing: all validation runs before the first mutation, so
// a rejected request leaves every store exactly as it was.

use serde_json::{json, Value};
use uuid::Uuid;

use crate::entities::{CustomerRegistry, ReservationLedger, RoomInventory};
use crate::errors::HotelError;
use crate::validation::{validate_date, validate_phone};

// ============================================================================
// VIEWS
// ============================================================================

/// One line of the room list shown before selection.
#[derive(Debug, Clone)]
pub struct RoomListing {
    pub tier: String,
    pub price: i64,
    pub available_units: u32,
    pub total_units: u32,
}

/// What the desk reads back when a guest quotes a reservation id.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationView {
    pub reservation_id: Uuid,
    pub customer_name: String,
    pub customer_phone: String,
    pub room_tier: String,
    pub price: i64,
    pub date: String,
}

/// Result of a successful cancellation.
#[derive(Debug, Clone, PartialEq)]
pub struct CancellationReceipt {
    pub reservation_id: Uuid,
    pub room_tier: String,
    pub refund: i64,
}

// ============================================================================
// HOTEL
// ============================================================================

pub struct Hotel {
    inventory: RoomInventory,
    customers: CustomerRegistry,
    ledger: ReservationLedger,
}

impl Hotel {
    /// A hotel with the fixed house configuration and empty books.
    pub fn new() -> Self {
        Hotel {
            inventory: RoomInventory::new(),
            customers: CustomerRegistry::new(),
            ledger: ReservationLedger::new(),
        }
    }

    /// A hotel over a caller-provided inventory (tests and custom houses).
    pub fn with_inventory(inventory: RoomInventory) -> Self {
        Hotel {
            inventory,
            customers: CustomerRegistry::new(),
            ledger: ReservationLedger::new(),
        }
    }

    /// All tiers in seed order, sold-out tiers included at count 0.
    pub fn list_rooms(&self) -> Vec<RoomListing> {
        self.inventory
            .rooms()
            .iter()
            .map(|room| RoomListing {
                tier: room.tier.clone(),
                price: room.price,
                available_units: room.available_units,
                total_units: room.total_units,
            })
            .collect()
    }

    /// Book one unit of the tier at `room_index` for a new guest.
    ///
    /// Validation order follows the desk flow: selection, phone, budget,
    /// date. The first failure aborts with nothing mutated. On success
    /// the unit is taken, the guest is registered with the price already
    /// deducted, and the new reservation id is returned.
    pub fn reserve(
        &mut self,
        room_index: usize,
        name: &str,
        phone: &str,
        budget: i64,
        date: &str,
    ) -> Result<Uuid, HotelError> {
        let room = self
            .inventory
            .get(room_index)
            .ok_or(HotelError::InvalidSelection)?;
        if room.is_sold_out() {
            return Err(HotelError::InvalidSelection);
        }
        let price = room.price;

        validate_phone(phone)?;

        if budget < price {
            return Err(HotelError::InsufficientBudget { budget, price });
        }

        validate_date(date)?;

        // All checks passed: commit.
        self.inventory.reserve(room_index)?;
        let customer_id = self.customers.register(name, phone, budget);
        self.customers.charge(customer_id, price)?;
        let reservation_id = self.ledger.create(room_index, customer_id, date);

        Ok(reservation_id)
    }

    /// Read back an active reservation by id.
    pub fn find_reservation(&self, id: Uuid) -> Result<ReservationView, HotelError> {
        let reservation = self.ledger.find(id).ok_or(HotelError::NotFound(id))?;
        let room = self
            .inventory
            .get(reservation.room_index)
            .ok_or(HotelError::InvalidSelection)?;
        let customer = self
            .customers
            .find(reservation.customer_id)
            .ok_or(HotelError::NotFound(reservation.customer_id))?;

        Ok(ReservationView {
            reservation_id: reservation.id,
            customer_name: customer.name.clone(),
            customer_phone: customer.phone.clone(),
            room_tier: room.tier.clone(),
            price: room.price,
            date: reservation.date.clone(),
        })
    }

    /// Cancel an active reservation: remove the ledger entry, return the
    /// room unit, and refund the guest by the room price.
    pub fn cancel(&mut self, id: Uuid) -> Result<CancellationReceipt, HotelError> {
        let reservation = self.ledger.find(id).ok_or(HotelError::NotFound(id))?;
        let room_index = reservation.room_index;
        let customer_id = reservation.customer_id;

        let room = self
            .inventory
            .get(room_index)
            .ok_or(HotelError::InvalidSelection)?;
        let refund = room.price;
        let room_tier = room.tier.clone();

        self.customers.refund(customer_id, refund)?;
        self.inventory.release(room_index);
        self.ledger.remove(id).ok_or(HotelError::NotFound(id))?;

        Ok(CancellationReceipt {
            reservation_id: id,
            room_tier,
            refund,
        })
    }

    /// Structured house status for the shell's status view.
    pub fn snapshot(&self) -> Value {
        json!({
            "rooms": self.inventory
                .rooms()
                .iter()
                .map(|room| json!({
                    "tier": room.tier,
                    "price": room.price,
                    "available": room.available_units,
                    "total": room.total_units,
                }))
                .collect::<Vec<Value>>(),
            "active_reservations": self.ledger.count(),
            "guests_on_file": self.customers.count(),
        })
    }

    pub fn customers(&self) -> &CustomerRegistry {
        &self.customers
    }
}

impl Default for Hotel {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Room, RoomInventory};

    const DATE: &str = "2026-03-01T15:00:00+09:00";

    fn assert_untouched(hotel: &Hotel) {
        let rooms = hotel.list_rooms();
        assert_eq!(rooms[0].available_units, 2);
        assert_eq!(rooms[1].available_units, 3);
        assert_eq!(rooms[2].available_units, 5);
        assert_eq!(hotel.customers().count(), 0);
        assert_eq!(hotel.snapshot()["active_reservations"], 0);
    }

    #[test]
    fn test_successful_reservation_effects() {
        let mut hotel = Hotel::new();

        let id = hotel
            .reserve(0, "Kim", "010-1234-5678", 350_000, DATE)
            .unwrap();

        // Exactly one unit taken, one guest, one ledger entry
        assert_eq!(hotel.list_rooms()[0].available_units, 1);
        assert_eq!(hotel.customers().count(), 1);

        let view = hotel.find_reservation(id).unwrap();
        assert_eq!(view.customer_name, "Kim");
        assert_eq!(view.customer_phone, "010-1234-5678");
        assert_eq!(view.room_tier, "Suite");
        assert_eq!(view.price, 300_000);
        assert_eq!(view.date, DATE);
    }

    #[test]
    fn test_reservation_deducts_budget_by_price() {
        let mut hotel = Hotel::new();

        hotel
            .reserve(0, "Kim", "010-1234-5678", 350_000, DATE)
            .unwrap();

        let guest = &hotel.customers().all()[0];
        assert_eq!(guest.budget, 350_000 - 300_000);
    }

    #[test]
    fn test_sold_out_tier_rejected_without_mutation() {
        let mut hotel = Hotel::with_inventory(RoomInventory::with_rooms(vec![
            Room::new("Suite", 300_000, 1),
        ]));

        hotel
            .reserve(0, "Kim", "010-1234-5678", 400_000, DATE)
            .unwrap();

        let result = hotel.reserve(0, "Lee", "010-2222-3333", 400_000, DATE);
        assert_eq!(result, Err(HotelError::InvalidSelection));

        // Second request changed nothing
        assert_eq!(hotel.list_rooms()[0].available_units, 0);
        assert_eq!(hotel.customers().count(), 1);
    }

    #[test]
    fn test_out_of_range_selection_rejected() {
        let mut hotel = Hotel::new();
        let result = hotel.reserve(7, "Kim", "010-1234-5678", 400_000, DATE);
        assert_eq!(result, Err(HotelError::InvalidSelection));
        assert_untouched(&hotel);
    }

    #[test]
    fn test_bad_phone_rejected_without_mutation() {
        let mut hotel = Hotel::new();

        let result = hotel.reserve(0, "Kim", "1234567890", 400_000, DATE);
        assert_eq!(
            result,
            Err(HotelError::InvalidPhoneFormat("1234567890".to_string()))
        );
        assert_untouched(&hotel);
    }

    #[test]
    fn test_insufficient_budget_rejected_without_mutation() {
        let mut hotel = Hotel::new();

        let result = hotel.reserve(0, "Kim", "010-1234-5678", 299_999, DATE);
        assert_eq!(
            result,
            Err(HotelError::InsufficientBudget {
                budget: 299_999,
                price: 300_000
            })
        );
        assert_untouched(&hotel);
    }

    #[test]
    fn test_budget_equal_to_price_is_accepted() {
        let mut hotel = Hotel::new();
        assert!(hotel
            .reserve(2, "Kim", "010-1234-5678", 100_000, DATE)
            .is_ok());
    }

    #[test]
    fn test_bad_date_rejected_without_mutation() {
        let mut hotel = Hotel::new();

        let result = hotel.reserve(0, "Kim", "010-1234-5678", 400_000, "20260301");
        assert_eq!(
            result,
            Err(HotelError::InvalidDateFormat("20260301".to_string()))
        );
        assert_untouched(&hotel);
    }

    #[test]
    fn test_cancel_restores_room_and_budget() {
        let mut hotel = Hotel::new();

        let id = hotel
            .reserve(0, "Kim", "010-1234-5678", 350_000, DATE)
            .unwrap();
        assert_eq!(hotel.list_rooms()[0].available_units, 1);

        let receipt = hotel.cancel(id).unwrap();
        assert_eq!(receipt.reservation_id, id);
        assert_eq!(receipt.room_tier, "Suite");
        assert_eq!(receipt.refund, 300_000);

        // Round-trip: availability back to the pre-create value
        assert_eq!(hotel.list_rooms()[0].available_units, 2);
    }

    #[test]
    fn test_cancel_makes_id_unresolvable() {
        let mut hotel = Hotel::new();
        let id = hotel
            .reserve(1, "Lee", "010-2222-3333", 200_000, DATE)
            .unwrap();

        hotel.cancel(id).unwrap();

        assert_eq!(hotel.find_reservation(id), Err(HotelError::NotFound(id)));
        assert_eq!(hotel.cancel(id).map(|r| r.refund), Err(HotelError::NotFound(id)));
    }

    #[test]
    fn test_cancel_unknown_id_fails() {
        let mut hotel = Hotel::new();
        let ghost = Uuid::new_v4();
        assert_eq!(
            hotel.cancel(ghost).map(|r| r.refund),
            Err(HotelError::NotFound(ghost))
        );
    }

    #[test]
    fn test_lookup_unknown_id_fails() {
        let hotel = Hotel::new();
        let ghost = Uuid::new_v4();
        assert_eq!(hotel.find_reservation(ghost), Err(HotelError::NotFound(ghost)));
    }

    #[test]
    fn test_worked_suite_example() {
        // Suite price 300_000, total 2. Reserve with budget 350_000,
        // then cancel: availability and budget both restored.
        let mut hotel = Hotel::new();

        let id = hotel
            .reserve(0, "Choi", "010-7777-8888", 350_000, DATE)
            .unwrap();

        assert_eq!(hotel.list_rooms()[0].available_units, 1);
        assert_eq!(hotel.customers().all()[0].budget, 50_000);

        hotel.cancel(id).unwrap();
        assert_eq!(hotel.list_rooms()[0].available_units, 2);

        // The refunded guest record survives cancellation
        assert_eq!(hotel.customers().count(), 1);
        assert_eq!(hotel.customers().all()[0].budget, 350_000);
    }

    #[test]
    fn test_many_reservations_share_a_tier() {
        let mut hotel = Hotel::new();

        let a = hotel
            .reserve(2, "A", "010-0000-0001", 100_000, DATE)
            .unwrap();
        let b = hotel
            .reserve(2, "B", "010-0000-0002", 100_000, DATE)
            .unwrap();

        assert_ne!(a, b);
        assert_eq!(hotel.list_rooms()[2].available_units, 3);
        assert_eq!(hotel.snapshot()["active_reservations"], 2);
    }

    #[test]
    fn test_snapshot_shape() {
        let mut hotel = Hotel::new();
        hotel
            .reserve(0, "Kim", "010-1234-5678", 350_000, DATE)
            .unwrap();

        let snapshot = hotel.snapshot();
        assert_eq!(snapshot["rooms"].as_array().unwrap().len(), 3);
        assert_eq!(snapshot["rooms"][0]["tier"], "Suite");
        assert_eq!(snapshot["rooms"][0]["available"], 1);
        assert_eq!(snapshot["rooms"][0]["total"], 2);
        assert_eq!(snapshot["active_reservations"], 1);
        assert_eq!(snapshot["guests_on_file"], 1);
    }

    #[test]
    fn test_sold_out_tier_still_listed() {
        let mut hotel = Hotel::with_inventory(RoomInventory::with_rooms(vec![
            Room::new("Suite", 300_000, 1),
            Room::new("Single", 100_000, 1),
        ]));

        hotel
            .reserve(0, "Kim", "010-1234-5678", 400_000, DATE)
            .unwrap();

        let rooms = hotel.list_rooms();
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].available_units, 0);
    }
}
