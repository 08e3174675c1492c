use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::authenticate::authenticate;
use super::handlers::customers::count_customer_pages;
use super::handlers::customers::list_customer_fields;
use super::handlers::customers::search_customers;
use super::handlers::invoices::count_invoice_pages;
use super::handlers::invoices::get_invoice;
use super::handlers::invoices::latest_invoices;
use super::handlers::invoices::search_invoices;
use super::handlers::overview::card_data;
use super::handlers::overview::revenue;
use crate::domain::customer::ports::CustomerServicePort;
use crate::domain::invoice::ports::InvoiceServicePort;
use crate::domain::overview::ports::OverviewServicePort;
use crate::domain::user::ports::AuthServicePort;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub invoice_service: Arc<dyn InvoiceServicePort>,
    pub customer_service: Arc<dyn CustomerServicePort>,
    pub overview_service: Arc<dyn OverviewServicePort>,
}

pub fn create_router(state: AppState) -> Router {
    let auth_routes = Router::new().route("/api/auth/login", post(authenticate));

    let invoice_routes = Router::new()
        .route("/api/invoices", get(search_invoices))
        .route("/api/invoices/pages", get(count_invoice_pages))
        .route("/api/invoices/latest", get(latest_invoices))
        .route("/api/invoices/:invoice_id", get(get_invoice));

    let customer_routes = Router::new()
        .route("/api/customers", get(search_customers))
        .route("/api/customers/pages", get(count_customer_pages))
        .route("/api/customers/fields", get(list_customer_fields));

    let overview_routes = Router::new()
        .route("/api/overview/revenue", get(revenue))
        .route("/api/overview/cards", get(card_data));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(auth_routes)
        .merge(invoice_routes)
        .merge(customer_routes)
        .merge(overview_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
