use serde::{Deserialize, Serialize};

/// Ссылка на родительский узел каталога (категорию или подкатегорию).
///
/// Хранилище каталога отдает ссылки уже развернутыми: `{ "slug": ..., "name": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRef {
    pub slug: String,
    pub name: String,
}

impl CatalogRef {
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
        }
    }
}
