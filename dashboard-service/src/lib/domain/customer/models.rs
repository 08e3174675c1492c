use std::fmt;

use uuid::Uuid;

use crate::domain::currency::Amount;
use crate::domain::search::Searchable;

/// Customer entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

/// Customer unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CustomerId(pub Uuid);

impl CustomerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CustomerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Customer with invoice aggregates, the row type of the customer search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerRecord {
    pub customer: Customer,
    pub total_invoices: i64,
    pub total_pending: Amount,
    pub total_paid: Amount,
}

impl Searchable for CustomerRecord {
    fn search_fields(&self) -> Vec<String> {
        vec![self.customer.name.clone(), self.customer.email.clone()]
    }
}

/// Minimal customer projection for pick-lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerField {
    pub id: CustomerId,
    pub name: String,
}
