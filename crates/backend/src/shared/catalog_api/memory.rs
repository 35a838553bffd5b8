//! In-memory catalog store for tests: records every call and can simulate an
//! unreachable store per operation.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use contracts::domain::a001_catalog_category::aggregate::{
    Category, CategoryContents, CategoryDetail,
};
use contracts::domain::a002_catalog_subcategory::aggregate::{Subcategory, SubcategorySummary};
use contracts::domain::a003_catalog_product::aggregate::{Product, ProductSummary};
use contracts::domain::common::CatalogRef;

use super::types::{CatalogEntity, CatalogGateway, GatewayError};

pub const LIST_CATEGORIES: &str = "list_categories";
pub const GET_CATEGORY: &str = "get_category";
pub const GET_SUBCATEGORY: &str = "get_subcategory";
pub const GET_PRODUCT: &str = "get_product";

#[derive(Default)]
pub struct InMemoryCatalog {
    categories: Vec<Category>,
    contents: HashMap<String, CategoryContents>,
    subcategories: HashMap<String, Subcategory>,
    products: HashMap<String, Product>,
    unavailable: HashSet<&'static str>,
    calls: Mutex<Vec<String>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Категория с подкатегориями; подкатегории регистрируются глобально
    pub fn with_subcategories(mut self, category: Category, subcategories: Vec<Subcategory>) -> Self {
        let summaries = subcategories
            .iter()
            .map(|s| SubcategorySummary {
                slug: s.slug.clone(),
                name: s.name.clone(),
                description: s.description.clone(),
                image: s.image.clone(),
            })
            .collect();
        self.contents.insert(
            category.slug.clone(),
            CategoryContents::Subcategories(summaries),
        );
        self.categories.push(category);
        for subcategory in subcategories {
            self.subcategories.insert(subcategory.slug.clone(), subcategory);
        }
        self
    }

    /// Категория с товарами напрямую
    pub fn with_products(mut self, category: Category, products: Vec<ProductSummary>) -> Self {
        self.contents
            .insert(category.slug.clone(), CategoryContents::Products(products));
        self.categories.push(category);
        self
    }

    pub fn with_product(mut self, product: Product) -> Self {
        self.products.insert(product.slug.clone(), product);
        self
    }

    /// Операция будет отвечать `Unavailable`
    pub fn failing(mut self, operation: &'static str) -> Self {
        self.unavailable.insert(operation);
        self
    }

    /// Журнал вызовов вида `get_product:dome-x1`
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, operation: &'static str, slug: Option<&str>) -> Result<(), GatewayError> {
        let entry = match slug {
            Some(slug) => format!("{}:{}", operation, slug),
            None => operation.to_string(),
        };
        self.calls.lock().unwrap().push(entry);
        if self.unavailable.contains(operation) {
            return Err(GatewayError::Unavailable(format!("{} failed", operation)));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogGateway for InMemoryCatalog {
    async fn list_categories(&self) -> Result<Vec<Category>, GatewayError> {
        self.record(LIST_CATEGORIES, None)?;
        Ok(self.categories.clone())
    }

    async fn get_category(&self, slug: &str) -> Result<CategoryDetail, GatewayError> {
        self.record(GET_CATEGORY, Some(slug))?;
        let category = self
            .categories
            .iter()
            .find(|c| c.slug == slug)
            .cloned()
            .ok_or_else(|| GatewayError::not_found(CatalogEntity::Category, slug))?;
        let contents = self
            .contents
            .get(slug)
            .cloned()
            .unwrap_or(CategoryContents::Products(vec![]));
        Ok(CategoryDetail { category, contents })
    }

    async fn get_subcategory(&self, slug: &str) -> Result<Subcategory, GatewayError> {
        self.record(GET_SUBCATEGORY, Some(slug))?;
        self.subcategories
            .get(slug)
            .cloned()
            .ok_or_else(|| GatewayError::not_found(CatalogEntity::Subcategory, slug))
    }

    async fn get_product(&self, slug: &str) -> Result<Product, GatewayError> {
        self.record(GET_PRODUCT, Some(slug))?;
        self.products
            .get(slug)
            .cloned()
            .ok_or_else(|| GatewayError::not_found(CatalogEntity::Product, slug))
    }
}

// ============================================================================
// Fixture
// ============================================================================

pub fn product(slug: &str, name: &str, category: &CatalogRef, subcategory: Option<&CatalogRef>) -> Product {
    Product {
        slug: slug.into(),
        name: name.into(),
        description: format!("{} for professional installations.", name),
        images: vec![format!("/images/{}.jpg", slug)],
        features: vec!["IP67".into()],
        price: Some(199.0),
        in_stock: true,
        category_ref: category.clone(),
        subcategory_ref: subcategory.cloned(),
    }
}

pub fn summary(product: &Product) -> ProductSummary {
    ProductSummary {
        slug: product.slug.clone(),
        name: product.name.clone(),
        description: product.description.clone(),
        images: product.images.clone(),
        price: product.price,
        in_stock: product.in_stock,
    }
}

fn subcategory(slug: &str, name: &str, parent: &CatalogRef, products: &[&Product]) -> Subcategory {
    Subcategory {
        slug: slug.into(),
        name: name.into(),
        description: format!("{} range.", name),
        image: None,
        category_ref: parent.clone(),
        products: products.iter().map(|p| summary(p)).collect(),
    }
}

/// Каталог дистрибьютора:
///
/// - `cameras` → подкатегории `ptz` (`ptz-4k`), `bullet` (`dome-x1`, `hybrid`)
/// - `recorders` → подкатегории `nvr` (`nvr-200`), `hybrid` (без товаров)
/// - `accessories` → товар `mount-kit` без подкатегории
/// - `cables` → пустая категория без подкатегорий
///
/// `hybrid` одновременно slug подкатегории и товара (нарушение уникальности).
pub fn surveillance_catalog() -> InMemoryCatalog {
    let cameras = Category::new("cameras", "Cameras", "Indoor and outdoor cameras.");
    let recorders = Category::new("recorders", "Recorders", "Video recorders.");
    let accessories = Category::new("accessories", "Accessories", "");
    let cables = Category::new("cables", "Cables", "Cabling.");

    let ptz_ref = CatalogRef::new("ptz", "PTZ Cameras");
    let bullet_ref = CatalogRef::new("bullet", "Bullet Cameras");
    let nvr_ref = CatalogRef::new("nvr", "Network Recorders");

    let ptz_4k = product("ptz-4k", "PTZ 4K", &cameras.to_ref(), Some(&ptz_ref));
    let dome_x1 = product("dome-x1", "Dome X1", &cameras.to_ref(), Some(&bullet_ref));
    let hybrid_camera = product("hybrid", "Hybrid Camera", &cameras.to_ref(), Some(&bullet_ref));
    let nvr_200 = product("nvr-200", "NVR 200", &recorders.to_ref(), Some(&nvr_ref));
    let mount_kit = product("mount-kit", "Mount Kit", &accessories.to_ref(), None);

    let camera_subcategories = vec![
        subcategory("ptz", "PTZ Cameras", &cameras.to_ref(), &[&ptz_4k]),
        subcategory("bullet", "Bullet Cameras", &cameras.to_ref(), &[&dome_x1, &hybrid_camera]),
    ];
    let recorder_subcategories = vec![
        subcategory("nvr", "Network Recorders", &recorders.to_ref(), &[&nvr_200]),
        subcategory("hybrid", "Hybrid Recorders", &recorders.to_ref(), &[]),
    ];
    let accessory_products = vec![summary(&mount_kit)];

    InMemoryCatalog::new()
        .with_subcategories(cameras, camera_subcategories)
        .with_subcategories(recorders, recorder_subcategories)
        .with_products(accessories, accessory_products)
        .with_products(cables, vec![])
        .with_product(ptz_4k)
        .with_product(dome_x1)
        .with_product(hybrid_camera)
        .with_product(nvr_200)
        .with_product(mount_kit)
}
