use serde::{Deserialize, Serialize};

use crate::domain::a003_catalog_product::aggregate::ProductSummary;
use crate::domain::common::CatalogRef;

/// Подкатегория в списке подкатегорий категории
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubcategorySummary {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Подкатегория с родительской категорией и товарами (ответ `GET /subcategories/{slug}`).
///
/// Slug подкатегории уникален во всем каталоге, а не только внутри категории:
/// подкатегорию ищут по одному slug, не зная родителя.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    pub slug: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(rename = "categoryRef")]
    pub category_ref: CatalogRef,

    #[serde(default)]
    pub products: Vec<ProductSummary>,
}

impl Subcategory {
    pub fn to_ref(&self) -> CatalogRef {
        CatalogRef::new(&self.slug, &self.name)
    }
}
