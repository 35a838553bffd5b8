use serde::{Deserialize, Serialize};

use super::response::CatalogPage;
use crate::shared::site::SiteInfo;

/// Максимальная длина meta description
pub const DESCRIPTION_LIMIT: usize = 160;

pub const NOT_FOUND_TITLE: &str = "Product Not Found";
pub const NOT_FOUND_DESCRIPTION: &str =
    "The requested product or category could not be found in our catalog.";

/// SEO-метаданные страницы каталога
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    #[serde(rename = "canonicalUrl", default, skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,
    /// Страница не должна индексироваться (404)
    #[serde(default)]
    pub noindex: bool,
}

/// Метаданные строятся из того же результата разбора пути, что и страница.
pub fn page_metadata(page: &CatalogPage, site: &SiteInfo) -> PageMetadata {
    match page {
        CatalogPage::CategoryIndex { .. } => PageMetadata {
            title: title(&[super::breadcrumbs::CATALOG_LABEL], site),
            description: summarize(&site.catalog_description, "products", site),
            canonical_url: Some(site.canonical_url(&[])),
            noindex: false,
        },
        CatalogPage::SubcategoryIndex { category, .. } => PageMetadata {
            title: title(&[category.name.as_str()], site),
            description: summarize(&category.description, category.name.as_str(), site),
            canonical_url: Some(site.canonical_url(&[category.slug.as_str()])),
            noindex: false,
        },
        CatalogPage::ProductIndex {
            category,
            subcategory: None,
            description,
            ..
        } => PageMetadata {
            title: title(&[category.name.as_str()], site),
            description: summarize(description, category.name.as_str(), site),
            canonical_url: Some(site.canonical_url(&[category.slug.as_str()])),
            noindex: false,
        },
        CatalogPage::ProductIndex {
            category,
            subcategory: Some(subcategory),
            description,
            ..
        } => PageMetadata {
            title: title(&[subcategory.name.as_str(), category.name.as_str()], site),
            description: summarize(description, subcategory.name.as_str(), site),
            canonical_url: Some(
                site.canonical_url(&[category.slug.as_str(), subcategory.slug.as_str()]),
            ),
            noindex: false,
        },
        CatalogPage::ProductDetail { product } => {
            let mut slugs: Vec<&str> = vec![product.category_ref.slug.as_str()];
            if let Some(subcategory) = &product.subcategory_ref {
                slugs.push(&subcategory.slug);
            }
            slugs.push(&product.slug);

            PageMetadata {
                title: title(&[product.name.as_str()], site),
                description: summarize(&product.description, product.name.as_str(), site),
                canonical_url: Some(site.canonical_url(&slugs)),
                noindex: false,
            }
        }
        CatalogPage::Missing => PageMetadata {
            title: title(&[NOT_FOUND_TITLE], site),
            description: NOT_FOUND_DESCRIPTION.to_string(),
            canonical_url: None,
            noindex: true,
        },
    }
}

/// "PTZ Cameras - IP Cameras | Site"
fn title(parts: &[&str], site: &SiteInfo) -> String {
    format!("{} | {}", parts.join(" - "), site.name)
}

fn summarize(text: &str, subject: &str, site: &SiteInfo) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        return format!("Browse {} from {}.", subject, site.name);
    }
    truncate_chars(&collapsed, DESCRIPTION_LIMIT)
}

/// Обрезает строку до `limit` символов (не байт) с многоточием
fn truncate_chars(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(limit - 1).collect();
    cut.truncate(cut.trim_end().len());
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_catalog_category::aggregate::Category;
    use crate::domain::a003_catalog_product::aggregate::Product;
    use crate::domain::common::CatalogRef;

    fn site() -> SiteInfo {
        SiteInfo {
            name: "Surveillance Solutions".into(),
            base_url: "https://www.example.com".into(),
            catalog_root: "/products".into(),
            catalog_description: "Cameras, recorders and accessories.".into(),
        }
    }

    #[test]
    fn test_category_index_metadata() {
        let meta = page_metadata(&CatalogPage::CategoryIndex { categories: vec![] }, &site());
        assert_eq!(meta.title, "Products | Surveillance Solutions");
        assert_eq!(meta.description, "Cameras, recorders and accessories.");
        assert_eq!(
            meta.canonical_url.as_deref(),
            Some("https://www.example.com/products")
        );
        assert!(!meta.noindex);
    }

    #[test]
    fn test_subcategory_index_falls_back_when_description_empty() {
        let page = CatalogPage::SubcategoryIndex {
            category: Category::new("cameras", "Cameras", "   "),
            subcategories: vec![],
        };
        let meta = page_metadata(&page, &site());
        assert_eq!(meta.title, "Cameras | Surveillance Solutions");
        assert_eq!(meta.description, "Browse Cameras from Surveillance Solutions.");
        assert_eq!(
            meta.canonical_url.as_deref(),
            Some("https://www.example.com/products/cameras")
        );
    }

    #[test]
    fn test_subcategory_product_index_metadata() {
        let page = CatalogPage::ProductIndex {
            category: CatalogRef::new("ip-cameras", "IP Cameras"),
            subcategory: Some(CatalogRef::new("ptz", "PTZ Cameras")),
            description: "Pan, tilt and\n zoom.".into(),
            products: vec![],
        };
        let meta = page_metadata(&page, &site());
        assert_eq!(meta.title, "PTZ Cameras - IP Cameras | Surveillance Solutions");
        assert_eq!(meta.description, "Pan, tilt and zoom.");
        assert_eq!(
            meta.canonical_url.as_deref(),
            Some("https://www.example.com/products/ip-cameras/ptz")
        );
    }

    #[test]
    fn test_product_detail_canonical_uses_real_parents() {
        let product = Product {
            slug: "nvr-200".into(),
            name: "NVR 200".into(),
            description: "x".repeat(400),
            images: vec![],
            features: vec![],
            price: Some(999.0),
            in_stock: true,
            category_ref: CatalogRef::new("recorders", "Recorders"),
            subcategory_ref: Some(CatalogRef::new("nvr", "NVR")),
        };
        let meta = page_metadata(&CatalogPage::ProductDetail { product }, &site());
        assert_eq!(meta.title, "NVR 200 | Surveillance Solutions");
        assert_eq!(meta.description.chars().count(), DESCRIPTION_LIMIT);
        assert!(meta.description.ends_with('…'));
        assert_eq!(
            meta.canonical_url.as_deref(),
            Some("https://www.example.com/products/recorders/nvr/nvr-200")
        );
    }

    #[test]
    fn test_missing_is_noindex_without_canonical() {
        let meta = page_metadata(&CatalogPage::Missing, &site());
        assert_eq!(meta.title, "Product Not Found | Surveillance Solutions");
        assert_eq!(meta.canonical_url, None);
        assert!(meta.noindex);
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let text = "камера ".repeat(40);
        let cut = truncate_chars(text.trim(), 20);
        assert!(cut.chars().count() <= 20);
        assert!(cut.ends_with('…'));
    }
}
