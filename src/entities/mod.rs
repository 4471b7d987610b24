// Entity Models - Rooms, Customers, Reservations
//
// Each entity lives in its own file together with the in-memory store
// that owns it. The stores are plain owned collections: the Hotel
// aggregate holds one of each and is the only writer.

pub mod customer;
pub mod reservation;
pub mod room;

pub use customer::{Customer, CustomerRegistry};
pub use reservation::{Reservation, ReservationLedger};
pub use room::{Room, RoomInventory};
