use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::pagination::total_pages;
use crate::domain::pagination::Page;
use crate::domain::pagination::SearchResultPage;
use crate::domain::pagination::PAGE_SIZE;
use crate::domain::search::SearchQuery;
use crate::invoice::errors::InvoiceError;
use crate::invoice::models::InvoiceForm;
use crate::invoice::models::InvoiceId;
use crate::invoice::models::InvoiceRecord;
use crate::invoice::models::LatestInvoice;
use crate::invoice::ports::InvoiceRepository;
use crate::invoice::ports::InvoiceServicePort;

const LATEST_INVOICES_LIMIT: i64 = 5;

/// Domain service implementation for invoice queries.
pub struct InvoiceService<IR>
where
    IR: InvoiceRepository,
{
    repository: Arc<IR>,
}

impl<IR> InvoiceService<IR>
where
    IR: InvoiceRepository,
{
    pub fn new(repository: Arc<IR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<IR> InvoiceServicePort for InvoiceService<IR>
where
    IR: InvoiceRepository,
{
    async fn search_invoices(
        &self,
        query: &SearchQuery,
        page: Page,
    ) -> Result<SearchResultPage<InvoiceRecord>, InvoiceError> {
        // Count and page run as two sequential queries over the same predicate.
        let match_count = self
            .repository
            .count(query)
            .await
            .map_err(|e| InvoiceError::QueryFailure(e.report("Failed to fetch invoices.")))?;

        let rows = self
            .repository
            .search(query, page.offset(PAGE_SIZE), PAGE_SIZE)
            .await
            .map_err(|e| InvoiceError::QueryFailure(e.report("Failed to fetch invoices.")))?;

        Ok(SearchResultPage::new(
            rows,
            total_pages(match_count, PAGE_SIZE),
        ))
    }

    async fn count_invoice_pages(&self, query: &SearchQuery) -> Result<i64, InvoiceError> {
        let match_count = self.repository.count(query).await.map_err(|e| {
            InvoiceError::QueryFailure(e.report("Failed to fetch total number of invoices."))
        })?;

        Ok(total_pages(match_count, PAGE_SIZE))
    }

    async fn get_invoice_form(&self, id: &InvoiceId) -> Result<InvoiceForm, InvoiceError> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|e| InvoiceError::QueryFailure(e.report("Failed to fetch invoice.")))?
            .map(|invoice| InvoiceForm::from(&invoice))
            .ok_or_else(|| InvoiceError::NotFound(id.to_string()))
    }

    async fn latest_invoices(&self) -> Result<Vec<LatestInvoice>, InvoiceError> {
        self.repository
            .latest(LATEST_INVOICES_LIMIT)
            .await
            .map_err(|e| {
                InvoiceError::QueryFailure(e.report("Failed to fetch the latest invoices."))
            })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use mockall::mock;
    use mockall::predicate::*;
    use rust_decimal::Decimal;

    use super::*;
    use crate::customer::models::CustomerId;
    use crate::domain::currency::Amount;
    use crate::domain::errors::StorageError;
    use crate::invoice::models::Invoice;
    use crate::invoice::models::InvoiceStatus;

    mock! {
        pub TestInvoiceRepository {}

        #[async_trait]
        impl InvoiceRepository for TestInvoiceRepository {
            async fn search(&self, query: &SearchQuery, offset: i64, limit: i64) -> Result<Vec<InvoiceRecord>, StorageError>;
            async fn count(&self, query: &SearchQuery) -> Result<i64, StorageError>;
            async fn find_by_id(&self, id: &InvoiceId) -> Result<Option<Invoice>, StorageError>;
            async fn latest(&self, limit: i64) -> Result<Vec<LatestInvoice>, StorageError>;
        }
    }

    fn invoice(cents: i64, status: InvoiceStatus) -> Invoice {
        Invoice {
            id: InvoiceId::new(),
            customer_id: CustomerId::new(),
            amount: Amount::from_cents(cents).unwrap(),
            status,
            date: NaiveDate::from_ymd_opt(2023, 6, 5).unwrap(),
        }
    }

    fn record(cents: i64) -> InvoiceRecord {
        InvoiceRecord {
            invoice: invoice(cents, InvoiceStatus::Pending),
            customer_name: "Delba de Oliveira".to_string(),
            customer_email: "delba@oliveira.com".to_string(),
            customer_image_url: "/customers/delba-de-oliveira.png".to_string(),
        }
    }

    #[tokio::test]
    async fn test_search_invoices_uses_page_offset() {
        let mut repository = MockTestInvoiceRepository::new();

        repository
            .expect_count()
            .withf(|query| query.as_str() == "pend")
            .times(1)
            .returning(|_| Ok(13));

        repository
            .expect_search()
            .withf(|query, offset, limit| query.as_str() == "pend" && *offset == 12 && *limit == 6)
            .times(1)
            .returning(|_, _, _| Ok(vec![record(1200)]));

        let service = InvoiceService::new(Arc::new(repository));

        let result = service
            .search_invoices(&SearchQuery::new("pend"), Page::new(3))
            .await
            .unwrap();

        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.total_pages, 3);
    }

    #[tokio::test]
    async fn test_search_invoices_clamps_page_zero() {
        let mut repository = MockTestInvoiceRepository::new();

        repository.expect_count().times(1).returning(|_| Ok(0));
        repository
            .expect_search()
            .with(always(), eq(0), eq(6))
            .times(1)
            .returning(|_, _, _| Ok(vec![]));

        let service = InvoiceService::new(Arc::new(repository));

        let result = service
            .search_invoices(&SearchQuery::new(""), Page::new(0))
            .await
            .unwrap();

        assert!(result.rows.is_empty());
        assert_eq!(result.total_pages, 0);
    }

    #[tokio::test]
    async fn test_search_invoices_storage_failure_has_no_partial_results() {
        let mut repository = MockTestInvoiceRepository::new();

        repository.expect_count().times(1).returning(|_| Ok(7));
        repository
            .expect_search()
            .times(1)
            .returning(|_, _, _| Err(StorageError::Database("connection reset".to_string())));

        let service = InvoiceService::new(Arc::new(repository));

        let result = service
            .search_invoices(&SearchQuery::new(""), Page::FIRST)
            .await;

        assert_eq!(
            result,
            Err(InvoiceError::QueryFailure("Failed to fetch invoices.".to_string()))
        );
    }

    #[tokio::test]
    async fn test_search_invoices_count_failure_skips_page_query() {
        let mut repository = MockTestInvoiceRepository::new();

        repository
            .expect_count()
            .times(1)
            .returning(|_| Err(StorageError::Database("timeout".to_string())));
        repository.expect_search().times(0);

        let service = InvoiceService::new(Arc::new(repository));

        let result = service
            .search_invoices(&SearchQuery::new(""), Page::FIRST)
            .await;

        assert!(matches!(result, Err(InvoiceError::QueryFailure(_))));
    }

    #[tokio::test]
    async fn test_count_invoice_pages() {
        let mut repository = MockTestInvoiceRepository::new();

        repository.expect_count().times(1).returning(|_| Ok(12));

        let service = InvoiceService::new(Arc::new(repository));

        let pages = service
            .count_invoice_pages(&SearchQuery::new("paid"))
            .await
            .unwrap();
        assert_eq!(pages, 2);
    }

    #[tokio::test]
    async fn test_count_invoice_pages_failure_message() {
        let mut repository = MockTestInvoiceRepository::new();

        repository
            .expect_count()
            .times(1)
            .returning(|_| Err(StorageError::Database("boom".to_string())));

        let service = InvoiceService::new(Arc::new(repository));

        let error = service
            .count_invoice_pages(&SearchQuery::new(""))
            .await
            .unwrap_err();
        assert_eq!(error.to_string(), "Failed to fetch total number of invoices.");
    }

    #[tokio::test]
    async fn test_get_invoice_form_success() {
        let mut repository = MockTestInvoiceRepository::new();

        let stored = invoice(15795, InvoiceStatus::Paid);
        let invoice_id = stored.id;
        repository
            .expect_find_by_id()
            .withf(move |id| *id == invoice_id)
            .times(1)
            .returning(move |_| Ok(Some(stored.clone())));

        let service = InvoiceService::new(Arc::new(repository));

        let form = service.get_invoice_form(&invoice_id).await.unwrap();
        assert_eq!(form.amount, Decimal::new(15795, 2));
        assert_eq!(form.status, InvoiceStatus::Paid);
    }

    #[tokio::test]
    async fn test_get_invoice_form_not_found() {
        let mut repository = MockTestInvoiceRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = InvoiceService::new(Arc::new(repository));

        let result = service.get_invoice_form(&InvoiceId::new()).await;
        assert!(matches!(result, Err(InvoiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_latest_invoices_requests_five() {
        let mut repository = MockTestInvoiceRepository::new();

        repository
            .expect_latest()
            .with(eq(5))
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = InvoiceService::new(Arc::new(repository));

        assert!(service.latest_invoices().await.unwrap().is_empty());
    }
}
