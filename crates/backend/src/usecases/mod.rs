pub mod u501_resolve_catalog_path;
