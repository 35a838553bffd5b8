pub mod u501_catalog;
