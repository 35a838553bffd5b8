use serde::{Deserialize, Serialize};

use super::response::CatalogPage;
use crate::domain::common::CatalogRef;
use crate::shared::site::SiteInfo;

pub const HOME_LABEL: &str = "Home";
pub const CATALOG_LABEL: &str = "Products";
pub const NOT_FOUND_LABEL: &str = "Not Found";

/// Элемент навигационной цепочки. У текущей страницы (последний элемент) ссылки нет.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl Breadcrumb {
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }

    pub fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }
}

/// Цепочка Home → Products → [Категория] → [Подкатегория] → [Товар].
///
/// Ссылки строятся по реальным родителям из данных каталога, а не по сегментам URL.
pub fn breadcrumbs(page: &CatalogPage, site: &SiteInfo) -> Vec<Breadcrumb> {
    let mut trail = vec![Breadcrumb::link(HOME_LABEL, "/")];

    // Узлы каталога ниже корня, от категории вглубь
    let nodes: Vec<&CatalogRef> = match page {
        CatalogPage::CategoryIndex { .. } => {
            trail.push(Breadcrumb::current(CATALOG_LABEL));
            return trail;
        }
        CatalogPage::Missing => {
            trail.push(Breadcrumb::link(CATALOG_LABEL, site.catalog_href(&[])));
            trail.push(Breadcrumb::current(NOT_FOUND_LABEL));
            return trail;
        }
        CatalogPage::SubcategoryIndex { category, .. } => {
            trail.push(Breadcrumb::link(CATALOG_LABEL, site.catalog_href(&[])));
            trail.push(Breadcrumb::current(&category.name));
            return trail;
        }
        CatalogPage::ProductIndex {
            category,
            subcategory,
            ..
        } => std::iter::once(category).chain(subcategory.as_ref()).collect(),
        CatalogPage::ProductDetail { product } => std::iter::once(&product.category_ref)
            .chain(product.subcategory_ref.as_ref())
            .collect(),
    };

    trail.push(Breadcrumb::link(CATALOG_LABEL, site.catalog_href(&[])));

    let mut slugs: Vec<&str> = Vec::with_capacity(nodes.len() + 1);
    for node in &nodes {
        slugs.push(&node.slug);
        trail.push(Breadcrumb::link(&node.name, site.catalog_href(&slugs)));
    }

    match page {
        CatalogPage::ProductDetail { product } => {
            trail.push(Breadcrumb::current(&product.name));
        }
        _ => {
            // Последний узел списка и есть текущая страница
            if let Some(last) = trail.last_mut() {
                last.href = None;
            }
        }
    }

    trail
}
