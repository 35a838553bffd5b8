use contracts::usecases::u501_resolve_catalog_path::CatalogPage;

use crate::shared::catalog_api::{CatalogGateway, GatewayError};

/// Возможная интерпретация второго сегмента пути `/{category}/{item}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemCandidate {
    /// `item` — slug подкатегории: страница товаров подкатегории
    Subcategory,
    /// `item` — slug товара: карточка товара
    Product,
}

/// Порядок проверки второго сегмента. Подкатегория проверяется первой, поэтому при
/// совпадении slug подкатегории и товара товар по такому пути недостижим.
pub const ITEM_PRECEDENCE: [ItemCandidate; 2] = [ItemCandidate::Subcategory, ItemCandidate::Product];

impl ItemCandidate {
    pub fn name(self) -> &'static str {
        match self {
            Self::Subcategory => "subcategory",
            Self::Product => "product",
        }
    }

    /// Один запрос к хранилищу; `NotFound` означает «не эта интерпретация»
    pub async fn probe(
        self,
        gateway: &dyn CatalogGateway,
        slug: &str,
    ) -> Result<CatalogPage, GatewayError> {
        match self {
            Self::Subcategory => gateway
                .get_subcategory(slug)
                .await
                .map(CatalogPage::from_subcategory),
            Self::Product => gateway
                .get_product(slug)
                .await
                .map(|product| CatalogPage::ProductDetail { product }),
        }
    }
}

/// Совпавший кандидат и построенная им страница
#[derive(Debug, Clone, PartialEq)]
pub struct ChainMatch {
    pub candidate: ItemCandidate,
    pub page: CatalogPage,
}

/// Цепочка «первое совпадение»: кандидаты проверяются строго по порядку.
///
/// `NotFound` передает ход следующему кандидату, любой другой исход завершает
/// цепочку. `Unavailable` возвращается как есть и никогда не запускает следующего
/// кандидата.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverChain {
    candidates: Vec<ItemCandidate>,
}

impl ResolverChain {
    pub fn new(candidates: impl Into<Vec<ItemCandidate>>) -> Self {
        Self {
            candidates: candidates.into(),
        }
    }

    /// Цепочка для второго сегмента пути
    pub fn for_item_segment() -> Self {
        Self::new(ITEM_PRECEDENCE)
    }

    pub fn candidates(&self) -> &[ItemCandidate] {
        &self.candidates
    }

    pub async fn first_match(
        &self,
        gateway: &dyn CatalogGateway,
        slug: &str,
    ) -> Result<Option<ChainMatch>, GatewayError> {
        for &candidate in &self.candidates {
            match candidate.probe(gateway, slug).await {
                Ok(page) => return Ok(Some(ChainMatch { candidate, page })),
                Err(GatewayError::NotFound { .. }) => {
                    tracing::debug!("'{}' is not a {}", slug, candidate.name());
                }
                Err(err) => return Err(err),
            }
        }
        Ok(None)
    }
}
