use std::sync::Arc;

use axum::extract::{OriginalUri, State};
use axum::http::{StatusCode, Uri};
use axum::Json;
use contracts::usecases::common::UseCaseError;
use contracts::usecases::u501_resolve_catalog_path::{
    CatalogPageResponse, CatalogPath, PageMetadata,
};

use crate::routes::AppState;
use crate::usecases::u501_resolve_catalog_path::ResolveError;

type ApiError = (StatusCode, Json<UseCaseError>);

/// Префиксы маршрутов; остаток пути после них и есть путь каталога
pub const PAGE_PREFIX: &str = "/api/catalog/page";
pub const METADATA_PREFIX: &str = "/api/catalog/metadata";

/// Страница «не найдено» отдается с полным телом и кодом 404
fn status_for(response: &CatalogPageResponse) -> StatusCode {
    if response.page.is_missing() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    }
}

fn unavailable(path: &CatalogPath, e: ResolveError) -> ApiError {
    tracing::warn!("Catalog unavailable while resolving {}: {}", path, e);
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(
            UseCaseError::catalog_unavailable("Catalog is temporarily unavailable")
                .with_details(e.to_string()),
        ),
    )
}

async fn respond_page(
    state: &AppState,
    path: CatalogPath,
) -> Result<(StatusCode, Json<CatalogPageResponse>), ApiError> {
    match state.executor.page_response(&path).await {
        Ok(response) => Ok((status_for(&response), Json(response))),
        Err(e) => Err(unavailable(&path, e)),
    }
}

async fn respond_metadata(
    state: &AppState,
    path: CatalogPath,
) -> Result<(StatusCode, Json<PageMetadata>), ApiError> {
    match state.executor.page_response(&path).await {
        Ok(response) => Ok((status_for(&response), Json(response.metadata))),
        Err(e) => Err(unavailable(&path, e)),
    }
}

/// Сегменты берутся из исходного URI и декодируются по одному: `%2F` не делит slug
fn catalog_path(uri: &Uri, prefix: &str) -> CatalogPath {
    CatalogPath::from_encoded(uri.path().strip_prefix(prefix).unwrap_or_default())
}

/// GET /api/catalog/page[/*path]
pub async fn page(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
) -> Result<(StatusCode, Json<CatalogPageResponse>), ApiError> {
    respond_page(&state, catalog_path(&uri, PAGE_PREFIX)).await
}

/// GET /api/catalog/metadata[/*path]
pub async fn metadata(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
) -> Result<(StatusCode, Json<PageMetadata>), ApiError> {
    respond_metadata(&state, catalog_path(&uri, METADATA_PREFIX)).await
}
