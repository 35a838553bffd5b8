pub mod breadcrumbs;
pub mod metadata;
pub mod request;
pub mod response;

pub use breadcrumbs::{breadcrumbs, Breadcrumb};
pub use metadata::{page_metadata, PageMetadata};
pub use request::{CatalogPath, PathShape};
pub use response::{CatalogPage, CatalogPageResponse};

use crate::shared::site::SiteInfo;
use crate::usecases::common::UseCaseMetadata;

pub struct ResolveCatalogPath;

impl UseCaseMetadata for ResolveCatalogPath {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "resolve_catalog_path"
    }

    fn description() -> &'static str {
        "Разбор пути каталога: категории, подкатегории и карточки товаров"
    }
}

impl CatalogPageResponse {
    /// Собирает ответ из результата разбора пути: обе проекции читают одну страницу
    pub fn project(page: CatalogPage, site: &SiteInfo) -> Self {
        let breadcrumbs = breadcrumbs(&page, site);
        let metadata = page_metadata(&page, site);
        Self {
            page,
            breadcrumbs,
            metadata,
        }
    }
}
