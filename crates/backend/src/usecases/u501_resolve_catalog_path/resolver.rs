use std::sync::Arc;

use contracts::usecases::u501_resolve_catalog_path::{CatalogPage, CatalogPath, PathShape};
use thiserror::Error;

use super::candidates::{ItemCandidate, ResolverChain};
use crate::shared::catalog_api::{CatalogGateway, GatewayError};

/// Ошибка разбора пути: хранилище каталога недоступно.
///
/// «Путь не найден» ошибкой не является — это `CatalogPage::Missing`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("{0}")]
    Unavailable(String),
}

/// Разбор пути каталога в страницу.
///
/// Без состояния между запросами: каждый вызов `resolve` заново обращается к
/// хранилищу, запросы внутри одного разбора идут строго последовательно.
pub struct PathResolver {
    gateway: Arc<dyn CatalogGateway>,
    item_chain: ResolverChain,
}

impl PathResolver {
    pub fn new(gateway: Arc<dyn CatalogGateway>) -> Self {
        Self {
            gateway,
            item_chain: ResolverChain::for_item_segment(),
        }
    }

    pub async fn resolve(&self, path: &CatalogPath) -> Result<CatalogPage, ResolveError> {
        let page = match path.shape() {
            PathShape::Root => self.category_index().await,
            PathShape::Category { category } => self.category(category).await,
            PathShape::CategoryItem { category, item } => self.category_item(category, item).await,
            PathShape::SubcategoryProduct { product, .. } => self.product(product).await,
            PathShape::TooDeep { depth } => {
                tracing::debug!("Catalog path {} is too deep ({} segments)", path, depth);
                Ok(CatalogPage::Missing)
            }
        }
        .map_err(|e| {
            tracing::error!("Failed to resolve catalog path {}: {}", path, e);
            ResolveError::Unavailable(e.to_string())
        })?;

        tracing::debug!("Catalog path {} resolved to {}", path, page.kind());
        Ok(page)
    }

    async fn category_index(&self) -> Result<CatalogPage, GatewayError> {
        let categories = self.gateway.list_categories().await?;
        Ok(CatalogPage::CategoryIndex { categories })
    }

    async fn category(&self, slug: &str) -> Result<CatalogPage, GatewayError> {
        not_found_as_missing(
            self.gateway
                .get_category(slug)
                .await
                .map(CatalogPage::from_category),
        )
    }

    async fn category_item(&self, category: &str, item: &str) -> Result<CatalogPage, GatewayError> {
        let Some(hit) = self.item_chain.first_match(self.gateway.as_ref(), item).await? else {
            return Ok(CatalogPage::Missing);
        };

        // Первый сегмент с реальным родителем не сверяется: ссылка остается рабочей,
        // даже если категория в URL другая.
        if hit.candidate == ItemCandidate::Subcategory {
            if let CatalogPage::ProductIndex {
                category: parent, ..
            } = &hit.page
            {
                if parent.slug != category {
                    tracing::debug!(
                        "Subcategory '{}' belongs to '{}', URL names '{}'",
                        item,
                        parent.slug,
                        category
                    );
                }
            }
        }

        Ok(hit.page)
    }

    /// Первые два сегмента пути из трех не проверяются
    async fn product(&self, slug: &str) -> Result<CatalogPage, GatewayError> {
        not_found_as_missing(
            self.gateway
                .get_product(slug)
                .await
                .map(|product| CatalogPage::ProductDetail { product }),
        )
    }
}

fn not_found_as_missing(
    result: Result<CatalogPage, GatewayError>,
) -> Result<CatalogPage, GatewayError> {
    match result {
        Err(GatewayError::NotFound { .. }) => Ok(CatalogPage::Missing),
        other => other,
    }
}
