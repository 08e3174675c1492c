pub mod customer;
pub mod invoice;
pub mod memory;
pub mod overview;
pub mod user;

pub use customer::PostgresCustomerRepository;
pub use invoice::PostgresInvoiceRepository;
pub use memory::InMemoryStore;
pub use overview::PostgresOverviewRepository;
pub use user::PostgresUserRepository;

use crate::domain::errors::StorageError;

fn database_error(e: sqlx::Error) -> StorageError {
    StorageError::Database(e.to_string())
}

fn corrupt_row(table: &'static str, reason: impl ToString) -> StorageError {
    StorageError::CorruptRow {
        table,
        reason: reason.to_string(),
    }
}
