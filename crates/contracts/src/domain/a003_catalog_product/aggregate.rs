use serde::{Deserialize, Serialize};

use crate::domain::common::CatalogRef;

fn default_in_stock() -> bool {
    true
}

/// Товар в списке товаров категории или подкатегории
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub slug: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(rename = "inStock", default = "default_in_stock")]
    pub in_stock: bool,
}

/// Товар (ответ `GET /products/{slug}`).
///
/// Slug товара уникален во всем каталоге. Множества slug товаров и slug
/// подкатегорий не должны пересекаться, иначе товар недостижим по пути из
/// двух сегментов.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub slug: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub features: Vec<String>,

    /// Цена; `None` — цена по запросу
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(rename = "inStock", default = "default_in_stock")]
    pub in_stock: bool,

    #[serde(rename = "categoryRef")]
    pub category_ref: CatalogRef,

    /// Пусто, если товар лежит прямо в категории без подкатегорий
    #[serde(rename = "subcategoryRef", default)]
    pub subcategory_ref: Option<CatalogRef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_without_subcategory_deserializes() {
        let json = r#"{
            "slug": "nvr-200",
            "name": "NVR 200",
            "categoryRef": { "slug": "recorders", "name": "Recorders" }
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.category_ref, CatalogRef::new("recorders", "Recorders"));
        assert!(product.subcategory_ref.is_none());
        assert!(product.in_stock);
        assert!(product.features.is_empty());
        assert!(product.images.is_empty());
    }

    #[test]
    fn test_product_summary_reads_camel_case_stock_flag() {
        let json = r#"{ "slug": "dome-x1", "name": "Dome X1", "inStock": false, "price": 149.5 }"#;
        let summary: ProductSummary = serde_json::from_str(json).unwrap();
        assert!(!summary.in_stock);
        assert_eq!(summary.price, Some(149.5));
    }
}
