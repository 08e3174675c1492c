use async_trait::async_trait;

use crate::domain::errors::StorageError;
use crate::overview::errors::OverviewError;
use crate::overview::models::CardData;
use crate::overview::models::Revenue;

/// Port for dashboard overview operations.
#[async_trait]
pub trait OverviewServicePort: Send + Sync + 'static {
    /// Retrieve the monthly revenue series.
    ///
    /// # Errors
    /// * `QueryFailure` - Storage operation failed
    async fn revenue(&self) -> Result<Vec<Revenue>, OverviewError>;

    /// Retrieve invoice/customer counts and paid/pending totals.
    ///
    /// # Errors
    /// * `QueryFailure` - Storage operation failed
    async fn card_data(&self) -> Result<CardData, OverviewError>;
}

/// Read access to aggregate dashboard data.
#[async_trait]
pub trait OverviewRepository: Send + Sync + 'static {
    async fn list_revenue(&self) -> Result<Vec<Revenue>, StorageError>;

    async fn card_data(&self) -> Result<CardData, StorageError>;
}
