use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::corrupt_row;
use super::database_error;
use crate::customer::models::Customer;
use crate::customer::models::CustomerField;
use crate::customer::models::CustomerId;
use crate::customer::models::CustomerRecord;
use crate::customer::ports::CustomerRepository;
use crate::domain::currency::Amount;
use crate::domain::errors::StorageError;
use crate::domain::search::SearchQuery;

pub struct PostgresCustomerRepository {
    pool: PgPool,
}

impl PostgresCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CustomerRecordRow {
    id: Uuid,
    name: String,
    email: String,
    image_url: String,
    total_invoices: i64,
    total_pending: i64,
    total_paid: i64,
}

impl TryFrom<CustomerRecordRow> for CustomerRecord {
    type Error = StorageError;

    fn try_from(row: CustomerRecordRow) -> Result<Self, Self::Error> {
        Ok(CustomerRecord {
            customer: Customer {
                id: CustomerId(row.id),
                name: row.name,
                email: row.email,
                image_url: row.image_url,
            },
            total_invoices: row.total_invoices,
            total_pending: Amount::from_cents(row.total_pending)
                .map_err(|e| corrupt_row("invoices", e))?,
            total_paid: Amount::from_cents(row.total_paid)
                .map_err(|e| corrupt_row("invoices", e))?,
        })
    }
}

#[derive(sqlx::FromRow)]
struct CustomerFieldRow {
    id: Uuid,
    name: String,
}

#[async_trait]
impl CustomerRepository for PostgresCustomerRepository {
    async fn search(
        &self,
        query: &SearchQuery,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<CustomerRecord>, StorageError> {
        let rows = sqlx::query_as::<_, CustomerRecordRow>(
            r#"
            SELECT
                customers.id,
                customers.name,
                customers.email,
                customers.image_url,
                COUNT(invoices.id) AS total_invoices,
                COALESCE(SUM(CASE WHEN invoices.status = 'pending' THEN invoices.amount ELSE 0 END), 0)::int8 AS total_pending,
                COALESCE(SUM(CASE WHEN invoices.status = 'paid' THEN invoices.amount ELSE 0 END), 0)::int8 AS total_paid
            FROM customers
            LEFT JOIN invoices ON customers.id = invoices.customer_id
            WHERE
                customers.name ILIKE $1 OR
                customers.email ILIKE $1
            GROUP BY customers.id, customers.name, customers.email, customers.image_url
            ORDER BY customers.name COLLATE "C" ASC, customers.id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(query.like_pattern())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.into_iter().map(CustomerRecord::try_from).collect()
    }

    async fn count(&self, query: &SearchQuery) -> Result<i64, StorageError> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM customers
            WHERE
                customers.name ILIKE $1 OR
                customers.email ILIKE $1
            "#,
        )
        .bind(query.like_pattern())
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)
    }

    async fn list_fields(&self) -> Result<Vec<CustomerField>, StorageError> {
        let rows = sqlx::query_as::<_, CustomerFieldRow>(
            r#"
            SELECT id, name
            FROM customers
            ORDER BY name COLLATE "C" ASC, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(rows
            .into_iter()
            .map(|row| CustomerField {
                id: CustomerId(row.id),
                name: row.name,
            })
            .collect())
    }
}
