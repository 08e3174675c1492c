use std::sync::Arc;

use auth::Authenticator;
use dashboard_service::config::Config;
use dashboard_service::customer::service::CustomerService;
use dashboard_service::inbound::http::router::create_router;
use dashboard_service::inbound::http::router::AppState;
use dashboard_service::invoice::service::InvoiceService;
use dashboard_service::outbound::database;
use dashboard_service::overview::service::OverviewService;
use dashboard_service::repositories::PostgresCustomerRepository;
use dashboard_service::repositories::PostgresInvoiceRepository;
use dashboard_service::repositories::PostgresOverviewRepository;
use dashboard_service::repositories::PostgresUserRepository;
use dashboard_service::user::service::AuthService;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dashboard_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "dashboard-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        max_connections = config.database.max_connections,
        argon2_memory_kib = config.password.memory_kib,
        argon2_iterations = config.password.iterations,
        "Configuration loaded"
    );

    let pg_pool = database::connect(&config.database).await?;

    let authenticator = Authenticator::with_params(config.password)?;

    let state = AppState {
        auth_service: Arc::new(AuthService::new(
            Arc::new(PostgresUserRepository::new(pg_pool.clone())),
            authenticator,
        )),
        invoice_service: Arc::new(InvoiceService::new(Arc::new(
            PostgresInvoiceRepository::new(pg_pool.clone()),
        ))),
        customer_service: Arc::new(CustomerService::new(Arc::new(
            PostgresCustomerRepository::new(pg_pool.clone()),
        ))),
        overview_service: Arc::new(OverviewService::new(Arc::new(
            PostgresOverviewRepository::new(pg_pool),
        ))),
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(state)).await?;

    tracing::info!("Server exited successfully");
    Ok(())
}
