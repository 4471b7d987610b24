// Hotel Front Desk - Core Library
// Exposes all modules for use in the console binary and tests

pub mod entities;
pub mod errors;
pub mod hotel;
pub mod validation;

// Re-export commonly used types
pub use entities::{
    Customer, CustomerRegistry,
    Reservation, ReservationLedger,
    Room, RoomInventory,
};
pub use errors::HotelError;
pub use hotel::{CancellationReceipt, Hotel, ReservationView, RoomListing};
pub use validation::{validate_date, validate_phone};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
