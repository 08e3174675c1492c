use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use crate::domain::invoice::models::LatestInvoice;
use crate::domain::invoice::ports::InvoiceServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn latest_invoices(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<LatestInvoiceData>>, ApiError> {
    state
        .invoice_service
        .latest_invoices()
        .await
        .map_err(ApiError::from)
        .map(|invoices| {
            let data: Vec<LatestInvoiceData> = invoices.iter().map(|i| i.into()).collect();
            ApiSuccess::new(StatusCode::OK, data)
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LatestInvoiceData {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub amount: String,
}

impl From<&LatestInvoice> for LatestInvoiceData {
    fn from(invoice: &LatestInvoice) -> Self {
        Self {
            id: invoice.id.to_string(),
            name: invoice.customer_name.clone(),
            email: invoice.customer_email.clone(),
            image_url: invoice.customer_image_url.clone(),
            amount: invoice.amount.to_display(),
        }
    }
}
