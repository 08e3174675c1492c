use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use crate::domain::customer::models::CustomerField;
use crate::domain::customer::ports::CustomerServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_customer_fields(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<CustomerFieldData>>, ApiError> {
    state
        .customer_service
        .list_customer_fields()
        .await
        .map_err(ApiError::from)
        .map(|fields| {
            let data: Vec<CustomerFieldData> = fields.iter().map(|f| f.into()).collect();
            ApiSuccess::new(StatusCode::OK, data)
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerFieldData {
    pub id: String,
    pub name: String,
}

impl From<&CustomerField> for CustomerFieldData {
    fn from(field: &CustomerField) -> Self {
        Self {
            id: field.id.to_string(),
            name: field.name.clone(),
        }
    }
}
