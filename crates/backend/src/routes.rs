use std::sync::Arc;

use axum::http::{header, Method};
use axum::{middleware, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::handlers;
use crate::system::middleware::request_logger::request_logger;
use crate::usecases::u501_resolve_catalog_path::ResolveExecutor;

/// Общее состояние обработчиков
pub struct AppState {
    pub executor: ResolveExecutor,
}

impl AppState {
    pub fn new(executor: ResolveExecutor) -> Self {
        Self { executor }
    }
}

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // UseCase u501: Resolve catalog path
        // `*path` не совпадает с пустым остатком: корень каталога и завершающий `/` отдельно
        .route("/api/catalog/page", get(handlers::u501_catalog::page))
        .route("/api/catalog/page/", get(handlers::u501_catalog::page))
        .route("/api/catalog/page/*path", get(handlers::u501_catalog::page))
        .route("/api/catalog/metadata", get(handlers::u501_catalog::metadata))
        .route("/api/catalog/metadata/", get(handlers::u501_catalog::metadata))
        .route(
            "/api/catalog/metadata/*path",
            get(handlers::u501_catalog::metadata),
        )
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
        .with_state(state)
}
