use async_trait::async_trait;
use sqlx::PgPool;

use super::corrupt_row;
use super::database_error;
use crate::domain::currency::Amount;
use crate::domain::errors::StorageError;
use crate::overview::models::CardData;
use crate::overview::models::Revenue;
use crate::overview::ports::OverviewRepository;

pub struct PostgresOverviewRepository {
    pool: PgPool,
}

impl PostgresOverviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct RevenueRow {
    month: String,
    revenue: i64,
}

#[derive(sqlx::FromRow)]
struct CardDataRow {
    number_of_invoices: i64,
    number_of_customers: i64,
    total_paid: i64,
    total_pending: i64,
}

#[async_trait]
impl OverviewRepository for PostgresOverviewRepository {
    async fn list_revenue(&self) -> Result<Vec<Revenue>, StorageError> {
        let rows = sqlx::query_as::<_, RevenueRow>(
            r#"
            SELECT month, revenue::int8 AS revenue
            FROM revenue
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.into_iter()
            .map(|row| {
                Ok(Revenue {
                    month: row.month,
                    amount: Amount::from_cents(row.revenue)
                        .map_err(|e| corrupt_row("revenue", e))?,
                })
            })
            .collect()
    }

    async fn card_data(&self) -> Result<CardData, StorageError> {
        let row = sqlx::query_as::<_, CardDataRow>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM invoices) AS number_of_invoices,
                (SELECT COUNT(*) FROM customers) AS number_of_customers,
                (SELECT COALESCE(SUM(amount), 0) FROM invoices WHERE status = 'paid')::int8 AS total_paid,
                (SELECT COALESCE(SUM(amount), 0) FROM invoices WHERE status = 'pending')::int8 AS total_pending
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(CardData {
            number_of_invoices: row.number_of_invoices,
            number_of_customers: row.number_of_customers,
            total_paid_invoices: Amount::from_cents(row.total_paid)
                .map_err(|e| corrupt_row("invoices", e))?,
            total_pending_invoices: Amount::from_cents(row.total_pending)
                .map_err(|e| corrupt_row("invoices", e))?,
        })
    }
}
