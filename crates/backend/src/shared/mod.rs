pub mod catalog_api;
pub mod config;
