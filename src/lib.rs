//! folio: content engine for a personal portfolio and blog
//!
//! The crate holds a static catalog of articles and projects, filters it by
//! free text and tag, and renders article bodies into typed content blocks.
//! The CLI and the HTTP server in this crate are thin callers of those two
//! operations.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod filter;
pub mod render;
pub mod server;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{Article, ArticleStore, Catalog};
use error::CatalogError;
use render::ContentBlock;

/// A site rooted at a directory
#[derive(Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content directory (articles and projects)
    pub content_dir: PathBuf,
}

impl Folio {
    /// Create a new instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
        })
    }

    /// Load the catalog without validating it
    pub fn load_catalog(&self) -> Result<Catalog> {
        content::loader::ContentLoader::new(self).load()
    }

    /// Load the catalog and index its articles by slug
    pub fn load_site(&self) -> Result<Site> {
        Ok(Site::new(self.load_catalog()?)?)
    }
}

/// A loaded catalog plus the slug lookup over its articles
#[derive(Debug, Clone)]
pub struct Site {
    pub catalog: Catalog,
    pub store: ArticleStore,
}

impl Site {
    pub fn new(catalog: Catalog) -> std::result::Result<Self, CatalogError> {
        let store = ArticleStore::new(&catalog.articles)?;
        Ok(Self { catalog, store })
    }

    /// Find an article by slug
    pub fn article(&self, slug: &str) -> Option<&Article> {
        self.store.get(slug)
    }

    /// Render an article body, or `None` if the slug is unknown
    pub fn render_article(&self, slug: &str) -> Option<Vec<ContentBlock>> {
        self.article(slug).map(|a| render::render(&a.body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        assert_eq!(folio.content_dir, dir.path().join("content"));
    }

    #[test]
    fn test_config_changes_content_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("_config.yml"), "content_dir: site\n").unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        assert_eq!(folio.content_dir, dir.path().join("site"));
    }

    #[test]
    fn test_render_article_by_slug() {
        let dir = tempfile::tempdir().unwrap();
        let site = Folio::new(dir.path()).unwrap().load_site().unwrap();

        let blocks = site.render_article("nextjs-app-router-deep-dive").unwrap();
        assert!(blocks
            .iter()
            .any(|b| matches!(b, ContentBlock::Heading { level: 2, .. })));
        assert!(site.render_article("does-not-exist").is_none());
    }
}
