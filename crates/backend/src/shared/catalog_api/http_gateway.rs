use std::time::Duration;

use async_trait::async_trait;
use contracts::domain::a001_catalog_category::aggregate::{
    Category, CategoryContents, CategoryDetail,
};
use contracts::domain::a002_catalog_subcategory::aggregate::{Subcategory, SubcategorySummary};
use contracts::domain::a003_catalog_product::aggregate::{Product, ProductSummary};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::types::{CatalogEntity, CatalogGateway, GatewayError};
use crate::shared::config::CatalogApiConfig;

/// HTTP-клиент хранилища каталога (четыре JSON-эндпоинта только для чтения)
pub struct HttpCatalogGateway {
    client: reqwest::Client,
    base_url: String,
}

/// Ответ хранилища до разбора конверта
enum Reply<T> {
    Envelope(T),
    /// HTTP 404 с конвертом `success: false`
    NotFound,
}

impl HttpCatalogGateway {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create catalog HTTP client: {}", e))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &CatalogApiConfig) -> anyhow::Result<Self> {
        Self::new(
            &config.api_base_url,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}", self.base_url, collection)
    }

    fn entity_url(&self, collection: &str, slug: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            collection,
            urlencoding::encode(slug)
        )
    }

    async fn get_envelope<T: DeserializeOwned>(&self, url: &str) -> Result<Reply<T>, GatewayError> {
        tracing::debug!("Catalog API: GET {}", url);

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| transport_error(url, e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            // 404 без конверта отдает прокси или неверный api_base_url, а не хранилище
            let body = response.text().await.map_err(|e| transport_error(url, e))?;
            return match serde_json::from_str::<Rejection>(&body) {
                Ok(Rejection { success: false }) => {
                    tracing::debug!("Catalog API: 404 for {}", url);
                    Ok(Reply::NotFound)
                }
                _ => {
                    tracing::warn!(
                        "Catalog API: 404 without catalog envelope for {}: {}",
                        url,
                        preview(&body)
                    );
                    Err(GatewayError::Unavailable(format!(
                        "HTTP 404 without catalog envelope from {}",
                        url
                    )))
                }
            };
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Catalog API: HTTP {} for {}: {}", status, url, preview(&body));
            return Err(GatewayError::Unavailable(format!(
                "HTTP {} from {}",
                status, url
            )));
        }

        let body = response.text().await.map_err(|e| transport_error(url, e))?;
        serde_json::from_str::<T>(&body)
            .map(Reply::Envelope)
            .map_err(|e| {
                tracing::error!(
                    "Catalog API: failed to parse response from {}: {}. Body: {}",
                    url,
                    e,
                    preview(&body)
                );
                GatewayError::Unavailable(format!("invalid JSON from {}: {}", url, e))
            })
    }
}

#[async_trait]
impl CatalogGateway for HttpCatalogGateway {
    async fn list_categories(&self) -> Result<Vec<Category>, GatewayError> {
        let url = self.collection_url("categories");
        match self.get_envelope::<CategoriesEnvelope>(&url).await? {
            Reply::Envelope(CategoriesEnvelope {
                success: true,
                categories,
            }) => {
                tracing::debug!("Catalog API: got {} categories", categories.len());
                Ok(categories)
            }
            // Список категорий существует всегда; отказ означает сбой хранилища
            _ => Err(GatewayError::Unavailable(format!(
                "category list rejected by {}",
                url
            ))),
        }
    }

    async fn get_category(&self, slug: &str) -> Result<CategoryDetail, GatewayError> {
        let url = self.entity_url("categories", slug);
        let envelope = match self.get_envelope::<CategoryEnvelope>(&url).await? {
            Reply::Envelope(envelope) if envelope.success => envelope,
            _ => return Err(GatewayError::not_found(CatalogEntity::Category, slug)),
        };

        let category = envelope
            .category
            .ok_or_else(|| missing_field(&url, "category"))?;
        let contents = if envelope.has_subcategories {
            CategoryContents::Subcategories(envelope.subcategories.unwrap_or_default())
        } else {
            CategoryContents::Products(envelope.products.unwrap_or_default())
        };

        Ok(CategoryDetail { category, contents })
    }

    async fn get_subcategory(&self, slug: &str) -> Result<Subcategory, GatewayError> {
        let url = self.entity_url("subcategories", slug);
        match self.get_envelope::<SubcategoryEnvelope>(&url).await? {
            Reply::Envelope(envelope) if envelope.success => envelope
                .subcategory
                .ok_or_else(|| missing_field(&url, "subcategory")),
            _ => Err(GatewayError::not_found(CatalogEntity::Subcategory, slug)),
        }
    }

    async fn get_product(&self, slug: &str) -> Result<Product, GatewayError> {
        let url = self.entity_url("products", slug);
        match self.get_envelope::<ProductEnvelope>(&url).await? {
            Reply::Envelope(envelope) if envelope.success => envelope
                .product
                .ok_or_else(|| missing_field(&url, "product")),
            _ => Err(GatewayError::not_found(CatalogEntity::Product, slug)),
        }
    }
}

fn transport_error(url: &str, e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        tracing::warn!("Catalog API: timeout for {}", url);
        GatewayError::Unavailable(format!("timeout while requesting {}", url))
    } else {
        tracing::warn!("Catalog API: network error for {}: {}", url, e);
        GatewayError::Unavailable(format!("network error while requesting {}: {}", url, e))
    }
}

fn missing_field(url: &str, field: &str) -> GatewayError {
    tracing::error!("Catalog API: successful response from {} has no '{}'", url, field);
    GatewayError::Unavailable(format!("response from {} has no '{}'", url, field))
}

fn preview(body: &str) -> String {
    let preview: String = body.chars().take(300).collect();
    if preview.len() < body.len() {
        format!("{}...", preview)
    } else {
        preview
    }
}

// ============================================================================
// Response envelopes
// ============================================================================

/// Отказ хранилища; поля сущности не нужны
#[derive(Debug, Deserialize)]
struct Rejection {
    success: bool,
}

#[derive(Debug, Deserialize)]
struct CategoriesEnvelope {
    success: bool,
    #[serde(default)]
    categories: Vec<Category>,
}

#[derive(Debug, Deserialize)]
struct CategoryEnvelope {
    success: bool,
    category: Option<Category>,
    #[serde(rename = "hasSubcategories", default)]
    has_subcategories: bool,
    subcategories: Option<Vec<SubcategorySummary>>,
    products: Option<Vec<ProductSummary>>,
}

#[derive(Debug, Deserialize)]
struct SubcategoryEnvelope {
    success: bool,
    subcategory: Option<Subcategory>,
}

#[derive(Debug, Deserialize)]
struct ProductEnvelope {
    success: bool,
    product: Option<Product>,
}
