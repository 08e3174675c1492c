use std::sync::Arc;

use async_trait::async_trait;

use crate::overview::errors::OverviewError;
use crate::overview::models::CardData;
use crate::overview::models::Revenue;
use crate::overview::ports::OverviewRepository;
use crate::overview::ports::OverviewServicePort;

/// Domain service implementation for the dashboard overview.
pub struct OverviewService<OR>
where
    OR: OverviewRepository,
{
    repository: Arc<OR>,
}

impl<OR> OverviewService<OR>
where
    OR: OverviewRepository,
{
    pub fn new(repository: Arc<OR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<OR> OverviewServicePort for OverviewService<OR>
where
    OR: OverviewRepository,
{
    async fn revenue(&self) -> Result<Vec<Revenue>, OverviewError> {
        self.repository
            .list_revenue()
            .await
            .map_err(|e| OverviewError::QueryFailure(e.report("Failed to fetch revenue data.")))
    }

    async fn card_data(&self) -> Result<CardData, OverviewError> {
        self.repository
            .card_data()
            .await
            .map_err(|e| OverviewError::QueryFailure(e.report("Failed to fetch card data.")))
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::currency::Amount;
    use crate::domain::errors::StorageError;

    mock! {
        pub TestOverviewRepository {}

        #[async_trait]
        impl OverviewRepository for TestOverviewRepository {
            async fn list_revenue(&self) -> Result<Vec<Revenue>, StorageError>;
            async fn card_data(&self) -> Result<CardData, StorageError>;
        }
    }

    #[tokio::test]
    async fn test_revenue_passes_rows_through() {
        let mut repository = MockTestOverviewRepository::new();

        repository.expect_list_revenue().times(1).returning(|| {
            Ok(vec![
                Revenue {
                    month: "Jan".to_string(),
                    amount: Amount::from_cents(200_000).unwrap(),
                },
                Revenue {
                    month: "Feb".to_string(),
                    amount: Amount::from_cents(180_000).unwrap(),
                },
            ])
        });

        let service = OverviewService::new(Arc::new(repository));

        let revenue = service.revenue().await.unwrap();
        assert_eq!(revenue.len(), 2);
        assert_eq!(revenue[0].month, "Jan");
    }

    #[tokio::test]
    async fn test_card_data_failure_is_masked() {
        let mut repository = MockTestOverviewRepository::new();

        repository
            .expect_card_data()
            .times(1)
            .returning(|| Err(StorageError::Database("relation \"invoices\" does not exist".to_string())));

        let service = OverviewService::new(Arc::new(repository));

        let error = service.card_data().await.unwrap_err();
        assert_eq!(error.to_string(), "Failed to fetch card data.");
    }

    #[tokio::test]
    async fn test_revenue_failure_is_masked() {
        let mut repository = MockTestOverviewRepository::new();

        repository
            .expect_list_revenue()
            .times(1)
            .returning(|| Err(StorageError::Database("timeout".to_string())));

        let service = OverviewService::new(Arc::new(repository));

        assert_eq!(
            service.revenue().await,
            Err(OverviewError::QueryFailure(
                "Failed to fetch revenue data.".to_string()
            ))
        );
    }
}
