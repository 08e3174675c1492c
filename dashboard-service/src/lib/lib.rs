pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::customer;
pub use domain::invoice;
pub use domain::overview;
pub use domain::user;
pub use outbound::repositories;
