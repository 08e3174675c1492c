use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use crate::domain::customer::models::CustomerRecord;
use crate::domain::customer::ports::CustomerServicePort;
use crate::domain::pagination::SearchResultPage;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::PageCountResponseData;
use crate::inbound::http::handlers::SearchParams;
use crate::inbound::http::router::AppState;

pub async fn search_customers(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<ApiSuccess<SearchResultPage<CustomerRowData>>, ApiError> {
    state
        .customer_service
        .search_customers(&params.search_query(), params.page())
        .await
        .map_err(ApiError::from)
        .map(|result| {
            ApiSuccess::new(StatusCode::OK, result.map(|r| CustomerRowData::from(&r)))
        })
}

pub async fn count_customer_pages(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<ApiSuccess<PageCountResponseData>, ApiError> {
    state
        .customer_service
        .count_customer_pages(&params.search_query())
        .await
        .map_err(ApiError::from)
        .map(|total_pages| ApiSuccess::new(StatusCode::OK, PageCountResponseData { total_pages }))
}

/// Customer table row with formatted totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerRowData {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_invoices: i64,
    pub total_pending: String,
    pub total_paid: String,
}

impl From<&CustomerRecord> for CustomerRowData {
    fn from(record: &CustomerRecord) -> Self {
        Self {
            id: record.customer.id.to_string(),
            name: record.customer.name.clone(),
            email: record.customer.email.clone(),
            image_url: record.customer.image_url.clone(),
            total_invoices: record.total_invoices,
            total_pending: record.total_pending.to_display(),
            total_paid: record.total_paid.to_display(),
        }
    }
}
