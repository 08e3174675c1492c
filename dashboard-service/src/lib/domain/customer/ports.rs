use async_trait::async_trait;

use crate::customer::errors::CustomerError;
use crate::customer::models::CustomerField;
use crate::customer::models::CustomerRecord;
use crate::domain::errors::StorageError;
use crate::domain::pagination::Page;
use crate::domain::pagination::SearchResultPage;
use crate::domain::search::SearchQuery;

/// Port for customer query operations.
#[async_trait]
pub trait CustomerServicePort: Send + Sync + 'static {
    /// Search customers by name or email and return one page of results.
    ///
    /// # Returns
    /// Matching customers ordered by name, at most one page, plus total page count
    ///
    /// # Errors
    /// * `QueryFailure` - Storage operation failed
    async fn search_customers(
        &self,
        query: &SearchQuery,
        page: Page,
    ) -> Result<SearchResultPage<CustomerRecord>, CustomerError>;

    /// Count the pages a customer search would produce.
    ///
    /// # Errors
    /// * `QueryFailure` - Storage operation failed
    async fn count_customer_pages(&self, query: &SearchQuery) -> Result<i64, CustomerError>;

    /// Retrieve every customer as an id/name pair ordered by name.
    ///
    /// # Errors
    /// * `QueryFailure` - Storage operation failed
    async fn list_customer_fields(&self) -> Result<Vec<CustomerField>, CustomerError>;
}

/// Read access to customers.
#[async_trait]
pub trait CustomerRepository: Send + Sync + 'static {
    /// Retrieve matching customers with invoice totals, ordered by name.
    async fn search(
        &self,
        query: &SearchQuery,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<CustomerRecord>, StorageError>;

    /// Count customers matching the predicate.
    async fn count(&self, query: &SearchQuery) -> Result<i64, StorageError>;

    /// Retrieve all customers as id/name pairs ordered by name.
    async fn list_fields(&self) -> Result<Vec<CustomerField>, StorageError>;
}
