// 🏨 Room Inventory - Tiered rooms with unit counts
//
// A Room is a category (tier) with a fixed price and a fixed number of
// units. Reserving takes one unit, releasing gives it back. Invariant:
// 0 <= available_units <= total_units, always.

use serde::{Deserialize, Serialize};

use crate::errors::HotelError;

// ============================================================================
// ROOM TYPE
// ============================================================================

/// One category of room: a tier name, a nightly price, and unit counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Tier name shown to the guest ("Suite", "Double", "Single")
    pub tier: String,

    /// Price per booking, integer currency units
    pub price: i64,

    /// Number of physical units in this tier (never changes)
    pub total_units: u32,

    /// Units not currently booked
    pub available_units: u32,
}

impl Room {
    pub fn new(tier: impl Into<String>, price: i64, total_units: u32) -> Self {
        Room {
            tier: tier.into(),
            price,
            total_units,
            available_units: total_units,
        }
    }

    pub fn is_sold_out(&self) -> bool {
        self.available_units == 0
    }
}

// ============================================================================
// ROOM INVENTORY
// ============================================================================

/// All room tiers of the hotel, in seed order.
///
/// Tiers are created once at startup and never destroyed during a run;
/// rooms are addressed by their position in the seed list.
pub struct RoomInventory {
    rooms: Vec<Room>,
}

impl RoomInventory {
    /// Create the inventory with the fixed house configuration.
    pub fn new() -> Self {
        let mut inventory = RoomInventory { rooms: Vec::new() };
        inventory.seed_default_rooms();
        inventory
    }

    /// An inventory with caller-provided tiers (tests and custom houses).
    pub fn with_rooms(rooms: Vec<Room>) -> Self {
        RoomInventory { rooms }
    }

    /// The three house tiers.
    fn seed_default_rooms(&mut self) {
        self.rooms.push(Room::new("Suite", 300_000, 2));
        self.rooms.push(Room::new("Double", 150_000, 3));
        self.rooms.push(Room::new("Single", 100_000, 5));
    }

    /// All tiers in seed order, sold-out tiers included.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn get(&self, index: usize) -> Option<&Room> {
        self.rooms.get(index)
    }

    /// Take one unit from the tier at `index`.
    ///
    /// Fails with `InvalidSelection` when the index is out of range or
    /// the tier has no units left; the inventory is untouched on failure.
    pub fn reserve(&mut self, index: usize) -> Result<(), HotelError> {
        let room = self
            .rooms
            .get_mut(index)
            .ok_or(HotelError::InvalidSelection)?;

        if room.available_units == 0 {
            return Err(HotelError::InvalidSelection);
        }

        room.available_units -= 1;
        Ok(())
    }

    /// Return one unit to the tier at `index`, saturating at capacity.
    ///
    /// Releasing beyond `total_units` or at an unknown index is ignored.
    pub fn release(&mut self, index: usize) {
        if let Some(room) = self.rooms.get_mut(index) {
            if room.available_units < room.total_units {
                room.available_units += 1;
            }
        }
    }

    /// Units currently available across all tiers.
    pub fn available_count(&self) -> u32 {
        self.rooms.iter().map(|r| r.available_units).sum()
    }
}

impl Default for RoomInventory {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
