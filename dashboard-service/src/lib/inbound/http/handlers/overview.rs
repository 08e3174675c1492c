use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::overview::models::CardData;
use crate::domain::overview::models::Revenue;
use crate::domain::overview::ports::OverviewServicePort;
use crate::inbound::http::router::AppState;

pub async fn revenue(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<RevenueData>>, ApiError> {
    state
        .overview_service
        .revenue()
        .await
        .map_err(ApiError::from)
        .map(|revenue| {
            let data: Vec<RevenueData> = revenue.iter().map(|r| r.into()).collect();
            ApiSuccess::new(StatusCode::OK, data)
        })
}

pub async fn card_data(
    State(state): State<AppState>,
) -> Result<ApiSuccess<CardDataResponseData>, ApiError> {
    state
        .overview_service
        .card_data()
        .await
        .map_err(ApiError::from)
        .map(|ref cards| ApiSuccess::new(StatusCode::OK, cards.into()))
}

/// One month of revenue, left unformatted for charting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevenueData {
    pub month: String,
    pub revenue: i64,
}

impl From<&Revenue> for RevenueData {
    fn from(revenue: &Revenue) -> Self {
        Self {
            month: revenue.month.clone(),
            revenue: revenue.amount.cents(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardDataResponseData {
    pub number_of_invoices: i64,
    pub number_of_customers: i64,
    pub total_paid_invoices: String,
    pub total_pending_invoices: String,
}

impl From<&CardData> for CardDataResponseData {
    fn from(cards: &CardData) -> Self {
        Self {
            number_of_invoices: cards.number_of_invoices,
            number_of_customers: cards.number_of_customers,
            total_paid_invoices: cards.total_paid_invoices.to_display(),
            total_pending_invoices: cards.total_pending_invoices.to_display(),
        }
    }
}
