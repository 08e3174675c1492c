use std::sync::Arc;

use async_trait::async_trait;

use crate::customer::errors::CustomerError;
use crate::customer::models::CustomerField;
use crate::customer::models::CustomerRecord;
use crate::customer::ports::CustomerRepository;
use crate::customer::ports::CustomerServicePort;
use crate::domain::pagination::total_pages;
use crate::domain::pagination::Page;
use crate::domain::pagination::SearchResultPage;
use crate::domain::pagination::PAGE_SIZE;
use crate::domain::search::SearchQuery;

/// Domain service implementation for customer queries.
pub struct CustomerService<CR>
where
    CR: CustomerRepository,
{
    repository: Arc<CR>,
}

impl<CR> CustomerService<CR>
where
    CR: CustomerRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> CustomerServicePort for CustomerService<CR>
where
    CR: CustomerRepository,
{
    async fn search_customers(
        &self,
        query: &SearchQuery,
        page: Page,
    ) -> Result<SearchResultPage<CustomerRecord>, CustomerError> {
        let match_count = self
            .repository
            .count(query)
            .await
            .map_err(|e| CustomerError::QueryFailure(e.report("Failed to fetch customer table.")))?;

        let rows = self
            .repository
            .search(query, page.offset(PAGE_SIZE), PAGE_SIZE)
            .await
            .map_err(|e| CustomerError::QueryFailure(e.report("Failed to fetch customer table.")))?;

        Ok(SearchResultPage::new(
            rows,
            total_pages(match_count, PAGE_SIZE),
        ))
    }

    async fn count_customer_pages(&self, query: &SearchQuery) -> Result<i64, CustomerError> {
        let match_count = self.repository.count(query).await.map_err(|e| {
            CustomerError::QueryFailure(e.report("Failed to fetch total number of customers."))
        })?;

        Ok(total_pages(match_count, PAGE_SIZE))
    }

    async fn list_customer_fields(&self) -> Result<Vec<CustomerField>, CustomerError> {
        self.repository
            .list_fields()
            .await
            .map_err(|e| CustomerError::QueryFailure(e.report("Failed to fetch all customers.")))
    }
}
