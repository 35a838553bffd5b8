use serde::{Deserialize, Serialize};

use super::breadcrumbs::Breadcrumb;
use super::metadata::PageMetadata;
use crate::domain::a001_catalog_category::aggregate::{Category, CategoryContents, CategoryDetail};
use crate::domain::a002_catalog_subcategory::aggregate::{Subcategory, SubcategorySummary};
use crate::domain::a003_catalog_product::aggregate::{Product, ProductSummary};
use crate::domain::common::CatalogRef;

/// Итог разбора пути каталога.
///
/// Одно значение на запрос; хлебные крошки и SEO-метаданные строятся из него
/// чистыми функциями, без повторных запросов к хранилищу.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CatalogPage {
    /// Все категории
    CategoryIndex { categories: Vec<Category> },

    /// Категория с подкатегориями
    SubcategoryIndex {
        category: Category,
        subcategories: Vec<SubcategorySummary>,
    },

    /// Товары категории без подкатегорий или товары подкатегории.
    ///
    /// `category` — реальный родитель, даже если в URL указана другая категория.
    ProductIndex {
        category: CatalogRef,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subcategory: Option<CatalogRef>,
        /// Описание показываемого узла (подкатегории, если она есть)
        description: String,
        products: Vec<ProductSummary>,
    },

    /// Карточка товара
    ProductDetail { product: Product },

    /// Путь не соответствует ни одному узлу каталога
    Missing,
}

impl CatalogPage {
    /// Страница категории: подкатегории или товары, в зависимости от содержимого
    pub fn from_category(detail: CategoryDetail) -> Self {
        let CategoryDetail { category, contents } = detail;
        match contents {
            CategoryContents::Subcategories(subcategories) => Self::SubcategoryIndex {
                category,
                subcategories,
            },
            CategoryContents::Products(products) => Self::ProductIndex {
                category: category.to_ref(),
                subcategory: None,
                description: category.description,
                products,
            },
        }
    }

    /// Товары подкатегории; родитель берется из самой подкатегории
    pub fn from_subcategory(subcategory: Subcategory) -> Self {
        Self::ProductIndex {
            subcategory: Some(subcategory.to_ref()),
            category: subcategory.category_ref,
            description: subcategory.description,
            products: subcategory.products,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::CategoryIndex { .. } => "categoryIndex",
            Self::SubcategoryIndex { .. } => "subcategoryIndex",
            Self::ProductIndex { .. } => "productIndex",
            Self::ProductDetail { .. } => "productDetail",
            Self::Missing => "missing",
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// Ответ `GET /api/catalog/page/*path`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogPageResponse {
    pub page: CatalogPage,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub metadata: PageMetadata,
}
