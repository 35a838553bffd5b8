pub mod a001_catalog_category;
pub mod a002_catalog_subcategory;
pub mod a003_catalog_product;
pub mod common;
