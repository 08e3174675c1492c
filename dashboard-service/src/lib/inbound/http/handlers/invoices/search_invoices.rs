use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::invoice::models::InvoiceRecord;
use crate::domain::invoice::ports::InvoiceServicePort;
use crate::domain::pagination::SearchResultPage;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::PageCountResponseData;
use crate::inbound::http::handlers::SearchParams;
use crate::inbound::http::router::AppState;

pub async fn search_invoices(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<ApiSuccess<SearchResultPage<InvoiceRowData>>, ApiError> {
    state
        .invoice_service
        .search_invoices(&params.search_query(), params.page())
        .await
        .map_err(ApiError::from)
        .map(|result| {
            ApiSuccess::new(StatusCode::OK, result.map(|r| InvoiceRowData::from(&r)))
        })
}

pub async fn count_invoice_pages(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<ApiSuccess<PageCountResponseData>, ApiError> {
    state
        .invoice_service
        .count_invoice_pages(&params.search_query())
        .await
        .map_err(ApiError::from)
        .map(|total_pages| ApiSuccess::new(StatusCode::OK, PageCountResponseData { total_pages }))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceRowData {
    pub id: String,
    pub customer_id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub amount: String,
    pub status: String,
    pub date: NaiveDate,
}

impl From<&InvoiceRecord> for InvoiceRowData {
    fn from(record: &InvoiceRecord) -> Self {
        Self {
            id: record.invoice.id.to_string(),
            customer_id: record.invoice.customer_id.to_string(),
            name: record.customer_name.clone(),
            email: record.customer_email.clone(),
            image_url: record.customer_image_url.clone(),
            amount: record.invoice.amount.to_display(),
            status: record.invoice.status.to_string(),
            date: record.invoice.date,
        }
    }
}
