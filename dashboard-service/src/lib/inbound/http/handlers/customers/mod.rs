pub mod list_customers;
pub mod search_customers;

pub use list_customers::list_customer_fields;
pub use search_customers::count_customer_pages;
pub use search_customers::search_customers;
