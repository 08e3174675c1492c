#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::PasswordParams;
use chrono::NaiveDate;
use dashboard_service::customer::models::Customer;
use dashboard_service::customer::models::CustomerField;
use dashboard_service::customer::models::CustomerId;
use dashboard_service::customer::models::CustomerRecord;
use dashboard_service::customer::ports::CustomerRepository;
use dashboard_service::customer::service::CustomerService;
use dashboard_service::domain::currency::Amount;
use dashboard_service::domain::errors::StorageError;
use dashboard_service::domain::search::SearchQuery;
use dashboard_service::domain::user::models::EmailAddress;
use dashboard_service::domain::user::models::User;
use dashboard_service::domain::user::models::UserId;
use dashboard_service::domain::user::ports::UserRepository;
use dashboard_service::inbound::http::router::create_router;
use dashboard_service::inbound::http::router::AppState;
use dashboard_service::invoice::models::Invoice;
use dashboard_service::invoice::models::InvoiceId;
use dashboard_service::invoice::models::InvoiceRecord;
use dashboard_service::invoice::models::InvoiceStatus;
use dashboard_service::invoice::models::LatestInvoice;
use dashboard_service::invoice::ports::InvoiceRepository;
use dashboard_service::invoice::service::InvoiceService;
use dashboard_service::overview::models::CardData;
use dashboard_service::overview::models::Revenue;
use dashboard_service::overview::ports::OverviewRepository;
use dashboard_service::overview::service::OverviewService;
use dashboard_service::repositories::InMemoryStore;
use dashboard_service::user::service::AuthService;

pub const USER_EMAIL: &str = "user@nextmail.com";
pub const USER_PASSWORD: &str = "123456";

/// Cheap Argon2 costs so hashing in tests stays fast.
pub const TEST_PASSWORD_PARAMS: PasswordParams = PasswordParams {
    memory_kib: 1024,
    iterations: 1,
    parallelism: 1,
};

/// Test application that spawns a real server over a seeded in-memory store
pub struct TestApp {
    pub address: String,
    pub fixtures: Fixtures,
    pub api_client: reqwest::Client,
}

/// Identifiers of seeded rows that tests need to address directly
pub struct Fixtures {
    pub oldest_invoice_id: InvoiceId,
    pub lee_robinson_id: CustomerId,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let authenticator = test_authenticator();

        let store = Arc::new(InMemoryStore::new());
        let fixtures = seed(&store, &authenticator).await;

        let state = AppState {
            auth_service: Arc::new(AuthService::new(Arc::clone(&store), authenticator)),
            invoice_service: Arc::new(InvoiceService::new(Arc::clone(&store))),
            customer_service: Arc::new(CustomerService::new(Arc::clone(&store))),
            overview_service: Arc::new(OverviewService::new(Arc::clone(&store))),
        };

        Self::serve(state, fixtures).await
    }

    /// Spawn the application over storage whose every read fails
    pub async fn spawn_unavailable() -> Self {
        let store = Arc::new(UnavailableStore);

        let state = AppState {
            auth_service: Arc::new(AuthService::new(Arc::clone(&store), test_authenticator())),
            invoice_service: Arc::new(InvoiceService::new(Arc::clone(&store))),
            customer_service: Arc::new(CustomerService::new(Arc::clone(&store))),
            overview_service: Arc::new(OverviewService::new(Arc::clone(&store))),
        };

        let fixtures = Fixtures {
            oldest_invoice_id: InvoiceId::new(),
            lee_robinson_id: CustomerId::new(),
        };

        Self::serve(state, fixtures).await
    }

    async fn serve(state: AppState, fixtures: Fixtures) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let router = create_router(state);
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            fixtures,
            api_client: reqwest::Client::new(),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// GET a path and return status plus parsed JSON body
    pub async fn get_json(&self, path: &str) -> (reqwest::StatusCode, serde_json::Value) {
        let response = self
            .get(path)
            .send()
            .await
            .expect("Failed to execute request");
        let status = response.status();
        let body = response.json().await.expect("Failed to parse response");
        (status, body)
    }
}

fn test_authenticator() -> Authenticator {
    Authenticator::with_params(TEST_PASSWORD_PARAMS).expect("Invalid test params")
}

/// Storage double that fails every read, as an unreachable database would
pub struct UnavailableStore;

fn unavailable() -> StorageError {
    StorageError::Database("connection refused".to_string())
}

#[async_trait]
impl InvoiceRepository for UnavailableStore {
    async fn search(
        &self,
        _query: &SearchQuery,
        _offset: i64,
        _limit: i64,
    ) -> Result<Vec<InvoiceRecord>, StorageError> {
        Err(unavailable())
    }

    async fn count(&self, _query: &SearchQuery) -> Result<i64, StorageError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: &InvoiceId) -> Result<Option<Invoice>, StorageError> {
        Err(unavailable())
    }

    async fn latest(&self, _limit: i64) -> Result<Vec<LatestInvoice>, StorageError> {
        Err(unavailable())
    }
}

#[async_trait]
impl CustomerRepository for UnavailableStore {
    async fn search(
        &self,
        _query: &SearchQuery,
        _offset: i64,
        _limit: i64,
    ) -> Result<Vec<CustomerRecord>, StorageError> {
        Err(unavailable())
    }

    async fn count(&self, _query: &SearchQuery) -> Result<i64, StorageError> {
        Err(unavailable())
    }

    async fn list_fields(&self) -> Result<Vec<CustomerField>, StorageError> {
        Err(unavailable())
    }
}

#[async_trait]
impl UserRepository for UnavailableStore {
    async fn find_by_email(&self, _email: &EmailAddress) -> Result<Option<User>, StorageError> {
        Err(unavailable())
    }
}

#[async_trait]
impl OverviewRepository for UnavailableStore {
    async fn list_revenue(&self) -> Result<Vec<Revenue>, StorageError> {
        Err(unavailable())
    }

    async fn card_data(&self) -> Result<CardData, StorageError> {
        Err(unavailable())
    }
}

fn customer(name: &str, email: &str) -> Customer {
    let slug = name.to_lowercase().replace(' ', "-");
    Customer {
        id: CustomerId::new(),
        name: name.to_string(),
        email: email.to_string(),
        image_url: format!("/customers/{}.png", slug),
    }
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Seed one user, eight customers, thirteen invoices and a year of revenue.
///
/// Five invoices are pending; every invoice date is distinct.
pub async fn seed(store: &InMemoryStore, authenticator: &Authenticator) -> Fixtures {
    store
        .insert_user(User {
            id: UserId::new(),
            name: "User".to_string(),
            email: EmailAddress::new(USER_EMAIL.to_string()).unwrap(),
            password_hash: authenticator.hash_password(USER_PASSWORD).unwrap(),
        })
        .await;

    let evil = customer("Evil Rabbit", "evil@rabbit.com");
    let delba = customer("Delba de Oliveira", "delba@oliveira.com");
    let lee = customer("Lee Robinson", "lee@robinson.com");
    let michael = customer("Michael Novotny", "michael@novotny.com");
    let amy = customer("Amy Burns", "amy@burns.com");
    let balazs = customer("Balazs Orban", "balazs@orban.com");
    let hector = customer("Hector Simpson", "hector@simpson.com");
    let steph = customer("Steph Dietz", "steph@dietz.com");

    for c in [&evil, &delba, &lee, &michael, &amy, &balazs, &hector, &steph] {
        store.insert_customer(c.clone()).await;
    }

    let invoices = [
        (&evil, 15795, InvoiceStatus::Pending, "2022-12-06"),
        (&delba, 20348, InvoiceStatus::Pending, "2022-11-14"),
        (&amy, 3040, InvoiceStatus::Paid, "2022-10-29"),
        (&michael, 44800, InvoiceStatus::Paid, "2023-09-10"),
        (&balazs, 34577, InvoiceStatus::Pending, "2023-08-05"),
        (&hector, 54246, InvoiceStatus::Pending, "2023-07-16"),
        (&evil, 666, InvoiceStatus::Pending, "2023-06-27"),
        (&michael, 32545, InvoiceStatus::Paid, "2023-06-09"),
        (&amy, 1250, InvoiceStatus::Paid, "2023-06-17"),
        (&balazs, 8546, InvoiceStatus::Paid, "2023-06-07"),
        (&delba, 500, InvoiceStatus::Paid, "2023-08-19"),
        (&balazs, 8945, InvoiceStatus::Paid, "2023-06-03"),
    ];

    for (customer, cents, status, day) in invoices {
        store
            .insert_invoice(Invoice {
                id: InvoiceId::new(),
                customer_id: customer.id,
                amount: Amount::from_cents(cents).unwrap(),
                status,
                date: date(day),
            })
            .await;
    }

    let oldest_invoice_id = InvoiceId::new();
    store
        .insert_invoice(Invoice {
            id: oldest_invoice_id,
            customer_id: lee.id,
            amount: Amount::from_cents(1000).unwrap(),
            status: InvoiceStatus::Paid,
            date: date("2022-06-05"),
        })
        .await;

    let revenue = [
        ("Jan", 2000),
        ("Feb", 1800),
        ("Mar", 2200),
        ("Apr", 2500),
        ("May", 2300),
        ("Jun", 3200),
        ("Jul", 3500),
        ("Aug", 3700),
        ("Sep", 2500),
        ("Oct", 2800),
        ("Nov", 3000),
        ("Dec", 4800),
    ];
    for (month, value) in revenue {
        store
            .insert_revenue(Revenue {
                month: month.to_string(),
                amount: Amount::from_cents(value).unwrap(),
            })
            .await;
    }

    Fixtures {
        oldest_invoice_id,
        lee_robinson_id: lee.id,
    }
}
