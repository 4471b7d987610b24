// 👤 Customer Registry - Guest records and budgets
//
// A Customer is created for each reservation; there is no dedup across
// repeat guests. The record outlives its reservation: cancellation
// refunds the budget but never deletes the customer.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::HotelError;

// ============================================================================
// CUSTOMER ENTITY
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Stable identity (UUID) - never changes
    pub id: Uuid,

    pub name: String,

    /// Already validated as XXX-XXXX-XXXX by the time it gets here
    pub phone: String,

    /// Funds on hand, integer currency units
    pub budget: i64,
}

impl Customer {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, budget: i64) -> Self {
        Customer {
            id: Uuid::new_v4(),
            name: name.into(),
            phone: phone.into(),
            budget,
        }
    }
}

// ============================================================================
// CUSTOMER REGISTRY
// ============================================================================

/// All guest records created during this run.
pub struct CustomerRegistry {
    customers: Vec<Customer>,
}

impl CustomerRegistry {
    pub fn new() -> Self {
        CustomerRegistry {
            customers: Vec::new(),
        }
    }

    /// Register a fresh guest record and return its id.
    ///
    /// Every call creates an independent record, even for an identical
    /// name and phone.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        phone: impl Into<String>,
        budget: i64,
    ) -> Uuid {
        let customer = Customer::new(name, phone, budget);
        let id = customer.id;
        self.customers.push(customer);
        id
    }

    pub fn find(&self, id: Uuid) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    /// Deduct a booking charge from the guest's budget.
    pub fn charge(&mut self, id: Uuid, amount: i64) -> Result<(), HotelError> {
        self.adjust(id, -amount)
    }

    /// Add a cancellation refund back to the guest's budget.
    pub fn refund(&mut self, id: Uuid, amount: i64) -> Result<(), HotelError> {
        self.adjust(id, amount)
    }

    fn adjust(&mut self, id: Uuid, delta: i64) -> Result<(), HotelError> {
        let customer = self
            .customers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(HotelError::NotFound(id))?;

        customer.budget += delta;
        Ok(())
    }

    /// All guest records in registration order.
    pub fn all(&self) -> &[Customer] {
        &self.customers
    }

    pub fn count(&self) -> usize {
        self.customers.len()
    }
}

impl Default for CustomerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
