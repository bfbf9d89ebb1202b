//! Slug-keyed article lookup

use indexmap::IndexMap;

use super::catalog::Article;
use crate::error::CatalogError;

/// Maps article slugs to articles, keeping declaration order
#[derive(Debug, Clone, Default)]
pub struct ArticleStore {
    articles: IndexMap<String, Article>,
}

impl ArticleStore {
    /// Build a store, rejecting duplicate slugs
    pub fn new(articles: &[Article]) -> Result<Self, CatalogError> {
        let mut map = IndexMap::with_capacity(articles.len());
        for article in articles {
            if map.contains_key(&article.slug) {
                return Err(CatalogError::DuplicateSlug(article.slug.clone()));
            }
            map.insert(article.slug.clone(), article.clone());
        }
        Ok(Self { articles: map })
    }

    /// Look up an article; `None` is the "not found" case
    pub fn get(&self, slug: &str) -> Option<&Article> {
        self.articles.get(slug)
    }

    /// Like `get`, but as an error for callers that propagate with `?`
    pub fn require(&self, slug: &str) -> Result<&Article, CatalogError> {
        self.get(slug)
            .ok_or_else(|| CatalogError::NotFound(slug.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(slug: &str) -> Article {
        Article::new(slug.to_uppercase(), slug.to_string())
    }

    #[test]
    fn test_lookup_by_slug() {
        let store = ArticleStore::new(&[article("a"), article("b")]).unwrap();
        assert_eq!(store.get("b").map(|a| a.title.as_str()), Some("B"));
        assert!(store.get("missing").is_none());
    }

    #[test]
    fn test_require_reports_not_found() {
        let store = ArticleStore::new(&[article("a")]).unwrap();
        let err = store.require("nope").unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(ref s) if s == "nope"));
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let err = ArticleStore::new(&[article("a"), article("a")]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateSlug(_)));
    }
}
