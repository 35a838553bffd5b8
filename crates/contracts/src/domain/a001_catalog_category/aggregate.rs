use serde::{Deserialize, Serialize};

use crate::domain::a002_catalog_subcategory::aggregate::SubcategorySummary;
use crate::domain::a003_catalog_product::aggregate::ProductSummary;
use crate::domain::common::CatalogRef;

// ============================================================================
// Aggregate
// ============================================================================

/// Категория каталога (верхний уровень иерархии)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Стабильный идентификатор в URL, уникален среди категорий
    pub slug: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Category {
    pub fn new(
        slug: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            description: description.into(),
            image: None,
        }
    }

    /// Ссылка на категорию для хлебных крошек и canonical URL
    pub fn to_ref(&self) -> CatalogRef {
        CatalogRef::new(&self.slug, &self.name)
    }
}

// ============================================================================
// Category detail
// ============================================================================

/// Содержимое категории.
///
/// Категория содержит либо подкатегории, либо товары напрямую, но не то и другое
/// одновременно.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "items", rename_all = "camelCase")]
pub enum CategoryContents {
    Subcategories(Vec<SubcategorySummary>),
    Products(Vec<ProductSummary>),
}

/// Категория вместе с ее содержимым (ответ `GET /categories/{slug}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDetail {
    pub category: Category,
    pub contents: CategoryContents,
}

impl CategoryDetail {
    pub fn has_subcategories(&self) -> bool {
        matches!(self.contents, CategoryContents::Subcategories(_))
    }
}
