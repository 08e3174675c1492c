use crate::domain::currency::Amount;

/// Revenue booked in one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revenue {
    pub month: String,
    pub amount: Amount,
}

/// Headline figures of the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardData {
    pub number_of_invoices: i64,
    pub number_of_customers: i64,
    pub total_paid_invoices: Amount,
    pub total_pending_invoices: Amount,
}
