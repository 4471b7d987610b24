// Front-desk error taxonomy
// Every variant is recoverable: the menu loop reports it and continues,
// and no operation mutates state before all of its checks have passed.

use uuid::Uuid;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum HotelError {
    #[error("Invalid room selection: no such room or no units left")]
    InvalidSelection,

    #[error("Invalid phone number format (expected XXX-XXXX-XXXX): {0}")]
    InvalidPhoneFormat(String),

    #[error("Insufficient budget: have {budget}, room costs {price}")]
    InsufficientBudget { budget: i64, price: i64 },

    #[error("Invalid reservation date (expected ISO 8601 with offset, e.g. 2016-10-27T17:13:40+00:00): {0}")]
    InvalidDateFormat(String),

    #[error("No reservation found for id: {0}")]
    NotFound(Uuid),
}
