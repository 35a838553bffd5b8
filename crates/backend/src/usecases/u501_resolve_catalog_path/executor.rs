use std::sync::Arc;

use contracts::shared::site::SiteInfo;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_resolve_catalog_path::{
    CatalogPage, CatalogPageResponse, CatalogPath, ResolveCatalogPath,
};
use tracing::Instrument;

use super::resolver::{PathResolver, ResolveError};
use crate::shared::catalog_api::CatalogGateway;

/// Executor для UseCase разбора пути каталога
///
/// Один разбор на запрос; хлебные крошки и метаданные строятся из его результата.
pub struct ResolveExecutor {
    resolver: PathResolver,
    site: SiteInfo,
}

impl ResolveExecutor {
    pub fn new(gateway: Arc<dyn CatalogGateway>, site: SiteInfo) -> Self {
        Self {
            resolver: PathResolver::new(gateway),
            site,
        }
    }

    pub async fn resolve_page(&self, path: &CatalogPath) -> Result<CatalogPage, ResolveError> {
        let span = tracing::info_span!("usecase", name = %ResolveCatalogPath::full_name(), path = %path);
        self.resolver.resolve(path).instrument(span).await
    }

    /// Страница вместе с хлебными крошками и метаданными
    pub async fn page_response(
        &self,
        path: &CatalogPath,
    ) -> Result<CatalogPageResponse, ResolveError> {
        let page = self.resolve_page(path).await?;
        Ok(CatalogPageResponse::project(page, &self.site))
    }
}
