use serde::{Deserialize, Serialize};

/// Путь внутри каталога — сегменты после корня каталога.
///
/// Пустые сегменты (ведущий, завершающий или двойной `/`) отбрасываются.
/// `parse` берет сегменты как есть; `from_encoded` сначала делит путь по `/`,
/// потом декодирует каждый сегмент, так что `%2F` остается внутри slug.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogPath {
    segments: Vec<String>,
}

/// Форма пути по числу сегментов
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathShape<'a> {
    /// Корень каталога — список всех категорий
    Root,
    /// `/{category}`
    Category { category: &'a str },
    /// `/{category}/{item}` — item может быть подкатегорией или товаром
    CategoryItem { category: &'a str, item: &'a str },
    /// `/{category}/{subcategory}/{product}`
    SubcategoryProduct {
        category: &'a str,
        subcategory: &'a str,
        product: &'a str,
    },
    /// Больше трех сегментов
    TooDeep { depth: usize },
}

impl CatalogPath {
    pub fn parse(raw: &str) -> Self {
        Self::from_segments(raw.split('/'))
    }

    /// Путь из URL до декодирования: `cameras/a%2Fb` дает сегменты `cameras` и `a/b`
    pub fn from_encoded(raw: &str) -> Self {
        Self::from_segments(raw.split('/').map(|s| {
            String::from_utf8_lossy(&urlencoding::decode_binary(s.as_bytes())).into_owned()
        }))
    }

    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            segments: segments
                .into_iter()
                .filter(|s| !s.as_ref().is_empty())
                .map(|s| s.as_ref().to_string())
                .collect(),
        }
    }

    pub fn root() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn shape(&self) -> PathShape<'_> {
        match self.segments.as_slice() {
            [] => PathShape::Root,
            [category] => PathShape::Category { category },
            [category, item] => PathShape::CategoryItem { category, item },
            [category, subcategory, product] => PathShape::SubcategoryProduct {
                category,
                subcategory,
                product,
            },
            deeper => PathShape::TooDeep {
                depth: deeper.len(),
            },
        }
    }
}

impl std::fmt::Display for CatalogPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_drops_empty_segments() {
        let path = CatalogPath::parse("/cameras//ptz/");
        assert_eq!(path.segments(), ["cameras", "ptz"]);
        assert_eq!(path.to_string(), "/cameras/ptz");
    }

    #[test]
    fn test_encoded_slash_stays_inside_segment() {
        let path = CatalogPath::from_encoded("/cameras/ip%2Fpoe/");
        assert_eq!(path.segments(), ["cameras", "ip/poe"]);
        assert_eq!(path.depth(), 2);

        let path = CatalogPath::from_encoded("wi%20fi/%D0%BA%D0%B0%D0%BC%D0%B5%D1%80%D1%8B");
        assert_eq!(path.segments(), ["wi fi", "камеры"]);
    }

    #[test]
    fn test_empty_path_is_root() {
        assert_eq!(CatalogPath::parse("").shape(), PathShape::Root);
        assert_eq!(CatalogPath::parse("///").shape(), PathShape::Root);
        assert_eq!(CatalogPath::root().to_string(), "/");
    }

    #[test]
    fn test_shapes_by_segment_count() {
        assert_eq!(
            CatalogPath::parse("cameras").shape(),
            PathShape::Category { category: "cameras" }
        );
        assert_eq!(
            CatalogPath::parse("cameras/dome-x1").shape(),
            PathShape::CategoryItem {
                category: "cameras",
                item: "dome-x1"
            }
        );
        assert_eq!(
            CatalogPath::parse("cameras/nvr/nvr-200").shape(),
            PathShape::SubcategoryProduct {
                category: "cameras",
                subcategory: "nvr",
                product: "nvr-200"
            }
        );
        assert_eq!(
            CatalogPath::parse("a/b/c/d/e").shape(),
            PathShape::TooDeep { depth: 5 }
        );
    }
}
