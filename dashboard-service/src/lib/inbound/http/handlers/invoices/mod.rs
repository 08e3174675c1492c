pub mod get_invoice;
pub mod latest_invoices;
pub mod search_invoices;

pub use get_invoice::get_invoice;
pub use latest_invoices::latest_invoices;
pub use search_invoices::count_invoice_pages;
pub use search_invoices::search_invoices;
