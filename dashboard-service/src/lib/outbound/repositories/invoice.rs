use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use super::corrupt_row;
use super::database_error;
use crate::customer::models::CustomerId;
use crate::domain::currency::Amount;
use crate::domain::errors::StorageError;
use crate::domain::search::SearchQuery;
use crate::invoice::models::Invoice;
use crate::invoice::models::InvoiceId;
use crate::invoice::models::InvoiceRecord;
use crate::invoice::models::InvoiceStatus;
use crate::invoice::models::LatestInvoice;
use crate::invoice::ports::InvoiceRepository;

pub struct PostgresInvoiceRepository {
    pool: PgPool,
}

impl PostgresInvoiceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct InvoiceRow {
    id: Uuid,
    customer_id: Uuid,
    amount: i64,
    status: String,
    date: NaiveDate,
}

impl TryFrom<InvoiceRow> for Invoice {
    type Error = StorageError;

    fn try_from(row: InvoiceRow) -> Result<Self, Self::Error> {
        Ok(Invoice {
            id: InvoiceId(row.id),
            customer_id: CustomerId(row.customer_id),
            amount: Amount::from_cents(row.amount).map_err(|e| corrupt_row("invoices", e))?,
            status: row
                .status
                .parse::<InvoiceStatus>()
                .map_err(|e| corrupt_row("invoices", e))?,
            date: row.date,
        })
    }
}

#[derive(sqlx::FromRow)]
struct InvoiceRecordRow {
    #[sqlx(flatten)]
    invoice: InvoiceRow,
    name: String,
    email: String,
    image_url: String,
}

impl TryFrom<InvoiceRecordRow> for InvoiceRecord {
    type Error = StorageError;

    fn try_from(row: InvoiceRecordRow) -> Result<Self, Self::Error> {
        Ok(InvoiceRecord {
            invoice: Invoice::try_from(row.invoice)?,
            customer_name: row.name,
            customer_email: row.email,
            customer_image_url: row.image_url,
        })
    }
}

#[derive(sqlx::FromRow)]
struct LatestInvoiceRow {
    id: Uuid,
    amount: i64,
    name: String,
    email: String,
    image_url: String,
}

impl TryFrom<LatestInvoiceRow> for LatestInvoice {
    type Error = StorageError;

    fn try_from(row: LatestInvoiceRow) -> Result<Self, Self::Error> {
        Ok(LatestInvoice {
            id: InvoiceId(row.id),
            amount: Amount::from_cents(row.amount).map_err(|e| corrupt_row("invoices", e))?,
            customer_name: row.name,
            customer_email: row.email,
            customer_image_url: row.image_url,
        })
    }
}

#[async_trait]
impl InvoiceRepository for PostgresInvoiceRepository {
    async fn search(
        &self,
        query: &SearchQuery,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<InvoiceRecord>, StorageError> {
        // Amount and date are matched on their text rendering ("12.00", "2023-06-05").
        let rows = sqlx::query_as::<_, InvoiceRecordRow>(
            r#"
            SELECT
                invoices.id,
                invoices.customer_id,
                invoices.amount::int8 AS amount,
                invoices.status,
                invoices.date,
                customers.name,
                customers.email,
                customers.image_url
            FROM invoices
            JOIN customers ON invoices.customer_id = customers.id
            WHERE
                customers.name ILIKE $1 OR
                customers.email ILIKE $1 OR
                (invoices.amount::numeric / 100)::numeric(20, 2)::text ILIKE $1 OR
                invoices.date::text ILIKE $1 OR
                invoices.status ILIKE $1
            ORDER BY invoices.date DESC, invoices.id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(query.like_pattern())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.into_iter().map(InvoiceRecord::try_from).collect()
    }

    async fn count(&self, query: &SearchQuery) -> Result<i64, StorageError> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM invoices
            JOIN customers ON invoices.customer_id = customers.id
            WHERE
                customers.name ILIKE $1 OR
                customers.email ILIKE $1 OR
                (invoices.amount::numeric / 100)::numeric(20, 2)::text ILIKE $1 OR
                invoices.date::text ILIKE $1 OR
                invoices.status ILIKE $1
            "#,
        )
        .bind(query.like_pattern())
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)
    }

    async fn find_by_id(&self, id: &InvoiceId) -> Result<Option<Invoice>, StorageError> {
        let row = sqlx::query_as::<_, InvoiceRow>(
            r#"
            SELECT id, customer_id, amount::int8 AS amount, status, date
            FROM invoices
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.map(Invoice::try_from).transpose()
    }

    async fn latest(&self, limit: i64) -> Result<Vec<LatestInvoice>, StorageError> {
        let rows = sqlx::query_as::<_, LatestInvoiceRow>(
            r#"
            SELECT
                invoices.id,
                invoices.amount::int8 AS amount,
                customers.name,
                customers.email,
                customers.image_url
            FROM invoices
            JOIN customers ON invoices.customer_id = customers.id
            ORDER BY invoices.date DESC, invoices.id
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.into_iter().map(LatestInvoice::try_from).collect()
    }
}
