use async_trait::async_trait;

use crate::domain::errors::StorageError;
use crate::domain::pagination::Page;
use crate::domain::pagination::SearchResultPage;
use crate::domain::search::SearchQuery;
use crate::invoice::errors::InvoiceError;
use crate::invoice::models::Invoice;
use crate::invoice::models::InvoiceForm;
use crate::invoice::models::InvoiceId;
use crate::invoice::models::InvoiceRecord;
use crate::invoice::models::LatestInvoice;

/// Port for invoice query operations.
#[async_trait]
pub trait InvoiceServicePort: Send + Sync + 'static {
    /// Search invoices by free text and return one page of results.
    ///
    /// # Arguments
    /// * `query` - Free-text predicate, empty matches everything
    /// * `page` - 1-based page number
    ///
    /// # Returns
    /// Matching invoices newest first, at most one page, plus total page count
    ///
    /// # Errors
    /// * `QueryFailure` - Storage operation failed
    async fn search_invoices(
        &self,
        query: &SearchQuery,
        page: Page,
    ) -> Result<SearchResultPage<InvoiceRecord>, InvoiceError>;

    /// Count the pages a search would produce.
    ///
    /// # Errors
    /// * `QueryFailure` - Storage operation failed
    async fn count_invoice_pages(&self, query: &SearchQuery) -> Result<i64, InvoiceError>;

    /// Retrieve one invoice in its editable form.
    ///
    /// # Errors
    /// * `NotFound` - Invoice does not exist
    /// * `QueryFailure` - Storage operation failed
    async fn get_invoice_form(&self, id: &InvoiceId) -> Result<InvoiceForm, InvoiceError>;

    /// Retrieve the most recent invoices for the overview.
    ///
    /// # Errors
    /// * `QueryFailure` - Storage operation failed
    async fn latest_invoices(&self) -> Result<Vec<LatestInvoice>, InvoiceError>;
}

/// Read access to invoices.
#[async_trait]
pub trait InvoiceRepository: Send + Sync + 'static {
    /// Retrieve matching invoices ordered newest first.
    ///
    /// # Arguments
    /// * `query` - Free-text predicate
    /// * `offset` - Number of matching rows to skip
    /// * `limit` - Maximum number of rows to return
    async fn search(
        &self,
        query: &SearchQuery,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<InvoiceRecord>, StorageError>;

    /// Count invoices matching the predicate.
    async fn count(&self, query: &SearchQuery) -> Result<i64, StorageError>;

    /// Retrieve invoice by identifier.
    ///
    /// # Returns
    /// Optional invoice (None if not found)
    async fn find_by_id(&self, id: &InvoiceId) -> Result<Option<Invoice>, StorageError>;

    /// Retrieve the `limit` most recent invoices.
    async fn latest(&self, limit: i64) -> Result<Vec<LatestInvoice>, StorageError>;
}
