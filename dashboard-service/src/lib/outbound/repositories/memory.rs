use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::sync::RwLockReadGuard;

use crate::customer::models::Customer;
use crate::customer::models::CustomerField;
use crate::customer::models::CustomerRecord;
use crate::customer::ports::CustomerRepository;
use crate::domain::currency::Amount;
use crate::domain::errors::StorageError;
use crate::domain::search::SearchQuery;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserRepository;
use crate::invoice::models::Invoice;
use crate::invoice::models::InvoiceId;
use crate::invoice::models::InvoiceRecord;
use crate::invoice::models::InvoiceStatus;
use crate::invoice::models::LatestInvoice;
use crate::invoice::ports::InvoiceRepository;
use crate::overview::models::CardData;
use crate::overview::models::Revenue;
use crate::overview::ports::OverviewRepository;

use super::corrupt_row;

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    customers: Vec<Customer>,
    invoices: Vec<Invoice>,
    revenue: Vec<Revenue>,
}

/// In-process storage implementing every repository port.
///
/// Applies the same matching and ordering rules as the Postgres adapters,
/// with insertion order as the tie-break. Names sort by code point, as
/// `COLLATE "C"` does.
#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_user(&self, user: User) {
        self.tables.write().await.users.push(user);
    }

    pub async fn insert_customer(&self, customer: Customer) {
        self.tables.write().await.customers.push(customer);
    }

    pub async fn insert_invoice(&self, invoice: Invoice) {
        self.tables.write().await.invoices.push(invoice);
    }

    pub async fn insert_revenue(&self, revenue: Revenue) {
        self.tables.write().await.revenue.push(revenue);
    }

    async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().await
    }

    fn invoice_records(tables: &Tables) -> Vec<InvoiceRecord> {
        let mut records: Vec<InvoiceRecord> = tables
            .invoices
            .iter()
            .filter_map(|invoice| {
                tables
                    .customers
                    .iter()
                    .find(|customer| customer.id == invoice.customer_id)
                    .map(|customer| InvoiceRecord {
                        invoice: invoice.clone(),
                        customer_name: customer.name.clone(),
                        customer_email: customer.email.clone(),
                        customer_image_url: customer.image_url.clone(),
                    })
            })
            .collect();

        // Stable sort keeps insertion order for equal dates.
        records.sort_by(|a, b| b.invoice.date.cmp(&a.invoice.date));
        records
    }

    fn customer_records(tables: &Tables) -> Result<Vec<CustomerRecord>, StorageError> {
        let mut records = tables
            .customers
            .iter()
            .map(|customer| {
                let invoices: Vec<&Invoice> = tables
                    .invoices
                    .iter()
                    .filter(|invoice| invoice.customer_id == customer.id)
                    .collect();

                Ok(CustomerRecord {
                    customer: customer.clone(),
                    total_invoices: invoices.len() as i64,
                    total_pending: sum_by_status(&invoices, InvoiceStatus::Pending)?,
                    total_paid: sum_by_status(&invoices, InvoiceStatus::Paid)?,
                })
            })
            .collect::<Result<Vec<_>, StorageError>>()?;

        records.sort_by(|a, b| a.customer.name.cmp(&b.customer.name));
        Ok(records)
    }
}

fn sum_by_status(invoices: &[&Invoice], status: InvoiceStatus) -> Result<Amount, StorageError> {
    let cents = invoices
        .iter()
        .filter(|invoice| invoice.status == status)
        .try_fold(0i64, |total, invoice| total.checked_add(invoice.amount.cents()))
        .ok_or_else(|| corrupt_row("invoices", "amount total overflows"))?;
    Amount::from_cents(cents).map_err(|e| corrupt_row("invoices", e))
}

fn page<T>(rows: impl Iterator<Item = T>, offset: i64, limit: i64) -> Vec<T> {
    let offset = usize::try_from(offset).unwrap_or(0);
    let limit = usize::try_from(limit).unwrap_or(0);
    rows.skip(offset).take(limit).collect()
}

#[async_trait]
impl InvoiceRepository for InMemoryStore {
    async fn search(
        &self,
        query: &SearchQuery,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<InvoiceRecord>, StorageError> {
        let tables = self.read().await;
        let matching = Self::invoice_records(&tables)
            .into_iter()
            .filter(|record| query.accepts(record));
        Ok(page(matching, offset, limit))
    }

    async fn count(&self, query: &SearchQuery) -> Result<i64, StorageError> {
        let tables = self.read().await;
        let count = Self::invoice_records(&tables)
            .iter()
            .filter(|record| query.accepts(*record))
            .count();
        Ok(count as i64)
    }

    async fn find_by_id(&self, id: &InvoiceId) -> Result<Option<Invoice>, StorageError> {
        let tables = self.read().await;
        Ok(tables
            .invoices
            .iter()
            .find(|invoice| invoice.id == *id)
            .cloned())
    }

    async fn latest(&self, limit: i64) -> Result<Vec<LatestInvoice>, StorageError> {
        let tables = self.read().await;
        let latest = Self::invoice_records(&tables)
            .into_iter()
            .map(|record| LatestInvoice {
                id: record.invoice.id,
                amount: record.invoice.amount,
                customer_name: record.customer_name,
                customer_email: record.customer_email,
                customer_image_url: record.customer_image_url,
            });
        Ok(page(latest, 0, limit))
    }
}

#[async_trait]
impl CustomerRepository for InMemoryStore {
    async fn search(
        &self,
        query: &SearchQuery,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<CustomerRecord>, StorageError> {
        let tables = self.read().await;
        let matching = Self::customer_records(&tables)?
            .into_iter()
            .filter(|record| query.accepts(record));
        Ok(page(matching, offset, limit))
    }

    async fn count(&self, query: &SearchQuery) -> Result<i64, StorageError> {
        let tables = self.read().await;
        let count = tables
            .customers
            .iter()
            .filter(|customer| query.matches(&customer.name) || query.matches(&customer.email))
            .count();
        Ok(count as i64)
    }

    async fn list_fields(&self) -> Result<Vec<CustomerField>, StorageError> {
        let tables = self.read().await;
        Ok(Self::customer_records(&tables)?
            .into_iter()
            .map(|record| CustomerField {
                id: record.customer.id,
                name: record.customer.name,
            })
            .collect())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, StorageError> {
        let tables = self.read().await;
        Ok(tables
            .users
            .iter()
            .find(|user| user.email.as_str() == email.as_str())
            .cloned())
    }
}

#[async_trait]
impl OverviewRepository for InMemoryStore {
    async fn list_revenue(&self) -> Result<Vec<Revenue>, StorageError> {
        Ok(self.read().await.revenue.clone())
    }

    async fn card_data(&self) -> Result<CardData, StorageError> {
        let tables = self.read().await;
        let invoices: Vec<&Invoice> = tables.invoices.iter().collect();

        Ok(CardData {
            number_of_invoices: invoices.len() as i64,
            number_of_customers: tables.customers.len() as i64,
            total_paid_invoices: sum_by_status(&invoices, InvoiceStatus::Paid)?,
            total_pending_invoices: sum_by_status(&invoices, InvoiceStatus::Pending)?,
        })
    }
}
