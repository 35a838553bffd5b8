//! Common types shared by all catalog aggregates

pub mod catalog_ref;

pub use catalog_ref::CatalogRef;
