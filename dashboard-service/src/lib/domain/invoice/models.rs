use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::customer::models::CustomerId;
use crate::domain::currency::Amount;
use crate::domain::search::Searchable;
use crate::invoice::errors::InvoiceIdError;
use crate::invoice::errors::InvoiceStatusError;

/// Invoice entity.
///
/// Amounts are integer cents; the date has day precision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    pub id: InvoiceId,
    pub customer_id: CustomerId,
    pub amount: Amount,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

/// Invoice unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvoiceId(pub Uuid);

impl InvoiceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an invoice ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, InvoiceIdError> {
        Uuid::parse_str(s)
            .map(InvoiceId)
            .map_err(|e| InvoiceIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for InvoiceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Payment state of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }
}

impl FromStr for InvoiceStatus {
    type Err = InvoiceStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(InvoiceStatus::Pending),
            "paid" => Ok(InvoiceStatus::Paid),
            other => Err(InvoiceStatusError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Invoice joined with the customer it was issued to.
///
/// Row type of the invoice search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceRecord {
    pub invoice: Invoice,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_image_url: String,
}

impl Searchable for InvoiceRecord {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.customer_name.clone(),
            self.customer_email.clone(),
            self.invoice.amount.to_plain_text(),
            self.invoice.date.format("%Y-%m-%d").to_string(),
            self.invoice.status.as_str().to_string(),
        ]
    }
}

/// Editable view of an invoice with the amount in major units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceForm {
    pub id: InvoiceId,
    pub customer_id: CustomerId,
    pub amount: Decimal,
    pub status: InvoiceStatus,
}

impl From<&Invoice> for InvoiceForm {
    fn from(invoice: &Invoice) -> Self {
        Self {
            id: invoice.id,
            customer_id: invoice.customer_id,
            amount: invoice.amount.to_editable(),
            status: invoice.status,
        }
    }
}

/// Recent invoice summary for the dashboard overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestInvoice {
    pub id: InvoiceId,
    pub amount: Amount,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(cents: i64, date: &str, status: InvoiceStatus) -> InvoiceRecord {
        InvoiceRecord {
            invoice: Invoice {
                id: InvoiceId::new(),
                customer_id: CustomerId::new(),
                amount: Amount::from_cents(cents).unwrap(),
                status,
                date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            },
            customer_name: "Lee Robinson".to_string(),
            customer_email: "lee@robinson.com".to_string(),
            customer_image_url: "/customers/lee-robinson.png".to_string(),
        }
    }

    #[test]
    fn test_status_round_trip() {
        assert_eq!("pending".parse::<InvoiceStatus>(), Ok(InvoiceStatus::Pending));
        assert_eq!("paid".parse::<InvoiceStatus>(), Ok(InvoiceStatus::Paid));
        assert_eq!(InvoiceStatus::Paid.to_string(), "paid");
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        assert_eq!(
            "overdue".parse::<InvoiceStatus>(),
            Err(InvoiceStatusError::Unknown("overdue".to_string()))
        );
        assert!("Paid".parse::<InvoiceStatus>().is_err());
    }

    #[test]
    fn test_search_fields_render_amount_date_and_status() {
        let fields = record(1200, "2023-06-05", InvoiceStatus::Pending).search_fields();

        assert_eq!(
            fields,
            vec![
                "Lee Robinson",
                "lee@robinson.com",
                "12.00",
                "2023-06-05",
                "pending"
            ]
        );
    }

    #[test]
    fn test_form_uses_major_units() {
        let invoice = record(15795, "2022-12-06", InvoiceStatus::Paid).invoice;
        let form = InvoiceForm::from(&invoice);

        assert_eq!(form.amount, Decimal::new(15795, 2));
        assert_eq!(form.id, invoice.id);
        assert_eq!(form.status, InvoiceStatus::Paid);
    }

    #[test]
    fn test_invoice_id_parsing() {
        let id = InvoiceId::new();
        assert_eq!(InvoiceId::from_string(&id.to_string()), Ok(id));
        assert!(matches!(
            InvoiceId::from_string("42"),
            Err(InvoiceIdError::InvalidFormat(_))
        ));
    }
}
