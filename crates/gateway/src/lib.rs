pub mod error;
pub mod query;
pub mod rest;

pub use error::{GatewayError, Result};
pub use query::{Page, QueryOptions, SearchQuery};
pub use rest::RestGateway;
