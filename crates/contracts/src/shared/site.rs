use serde::{Deserialize, Serialize};

/// Параметры сайта, нужные для построения ссылок и SEO-метаданных
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteInfo {
    /// Название сайта, добавляется к заголовкам страниц
    pub name: String,

    /// Абсолютный адрес сайта без завершающего `/`, например `https://www.example.com`
    #[serde(rename = "baseUrl")]
    pub base_url: String,

    /// Корень каталога, например `/products`
    #[serde(rename = "catalogRoot")]
    pub catalog_root: String,

    /// Описание корневой страницы каталога
    #[serde(rename = "catalogDescription")]
    pub catalog_description: String,
}

impl SiteInfo {
    /// Относительная ссылка на узел каталога; slug кодируются для URL
    pub fn catalog_href(&self, slugs: &[&str]) -> String {
        let mut href = self.catalog_root.clone();
        for slug in slugs {
            href.push('/');
            href.push_str(&urlencoding::encode(slug));
        }
        href
    }

    /// Абсолютная ссылка на узел каталога (canonical URL)
    pub fn canonical_url(&self, slugs: &[&str]) -> String {
        format!("{}{}", self.base_url, self.catalog_href(slugs))
    }
}
