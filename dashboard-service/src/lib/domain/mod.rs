pub mod currency;
pub mod customer;
pub mod errors;
pub mod invoice;
pub mod overview;
pub mod pagination;
pub mod search;
pub mod user;
