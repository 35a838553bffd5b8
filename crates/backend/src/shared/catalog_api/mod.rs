pub mod http_gateway;
#[cfg(test)]
pub mod memory;
pub mod types;

pub use http_gateway::HttpCatalogGateway;
pub use types::{CatalogEntity, CatalogGateway, GatewayError};
