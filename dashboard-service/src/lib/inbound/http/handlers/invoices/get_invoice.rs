use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use crate::domain::invoice::errors::InvoiceError;
use crate::domain::invoice::models::InvoiceForm;
use crate::domain::invoice::models::InvoiceId;
use crate::domain::invoice::ports::InvoiceServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_invoice(
    State(state): State<AppState>,
    Path(invoice_id): Path<String>,
) -> Result<ApiSuccess<InvoiceFormData>, ApiError> {
    let invoice_id = InvoiceId::from_string(&invoice_id)
        .map_err(InvoiceError::from)
        .map_err(ApiError::from)?;

    state
        .invoice_service
        .get_invoice_form(&invoice_id)
        .await
        .map_err(ApiError::from)
        .map(|ref form| ApiSuccess::new(StatusCode::OK, form.into()))
}

/// Editable invoice; `amount` is in major units with two decimals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceFormData {
    pub id: String,
    pub customer_id: String,
    pub amount: String,
    pub status: String,
}

impl From<&InvoiceForm> for InvoiceFormData {
    fn from(form: &InvoiceForm) -> Self {
        Self {
            id: form.id.to_string(),
            customer_id: form.customer_id.to_string(),
            amount: form.amount.to_string(),
            status: form.status.to_string(),
        }
    }
}
