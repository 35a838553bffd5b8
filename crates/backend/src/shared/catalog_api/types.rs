use async_trait::async_trait;
use contracts::domain::a001_catalog_category::aggregate::{Category, CategoryDetail};
use contracts::domain::a002_catalog_subcategory::aggregate::Subcategory;
use contracts::domain::a003_catalog_product::aggregate::Product;
use thiserror::Error;

/// Вид сущности каталога (для сообщений об ошибках и логов)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogEntity {
    Category,
    Subcategory,
    Product,
}

impl std::fmt::Display for CatalogEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Category => "category",
            Self::Subcategory => "subcategory",
            Self::Product => "product",
        })
    }
}

/// Ошибки хранилища каталога.
///
/// `NotFound` означает, что сущности нет; `Unavailable` — что хранилище не ответило
/// или ответило ошибкой. `Unavailable` ничего не говорит о существовании сущности.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("{entity} '{slug}' not found")]
    NotFound { entity: CatalogEntity, slug: String },

    #[error("catalog store unavailable: {0}")]
    Unavailable(String),
}

impl GatewayError {
    pub fn not_found(entity: CatalogEntity, slug: &str) -> Self {
        Self::NotFound {
            entity,
            slug: slug.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Доступ к хранилищу каталога: четыре операции чтения, по одному запросу каждая
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    /// Все категории в порядке хранилища. Никогда не возвращает `NotFound`.
    async fn list_categories(&self) -> Result<Vec<Category>, GatewayError>;

    /// Категория с подкатегориями либо с товарами
    async fn get_category(&self, slug: &str) -> Result<CategoryDetail, GatewayError>;

    /// Подкатегория по глобально уникальному slug, с родителем и товарами
    async fn get_subcategory(&self, slug: &str) -> Result<Subcategory, GatewayError>;

    /// Товар по глобально уникальному slug, с родительскими ссылками
    async fn get_product(&self, slug: &str) -> Result<Product, GatewayError>;
}
