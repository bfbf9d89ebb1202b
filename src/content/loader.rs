//! Content loader - loads the catalog from the content directory

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::catalog::{Article, Catalog, Project};
use super::{builtin, FrontMatter};
use crate::Folio;

/// Loads articles and projects for a site
pub struct ContentLoader<'a> {
    folio: &'a Folio,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(folio: &'a Folio) -> Self {
        Self { folio }
    }

    /// Load the catalog, falling back to the built-in one
    pub fn load(&self) -> Result<Catalog> {
        if !self.folio.content_dir.exists() {
            tracing::debug!(
                "No content directory at {:?}, using built-in catalog",
                self.folio.content_dir
            );
            return builtin::catalog();
        }

        let catalog = Catalog {
            articles: self.load_articles()?,
            projects: self.load_projects()?,
        };

        tracing::info!(
            "Loaded {} articles and {} projects",
            catalog.articles.len(),
            catalog.projects.len()
        );

        Ok(catalog)
    }

    /// Load all articles from content/articles, ordered by weight then file name
    pub fn load_articles(&self) -> Result<Vec<Article>> {
        let articles_dir = self.folio.content_dir.join("articles");
        if !articles_dir.exists() {
            return Ok(Vec::new());
        }

        let mut articles = Vec::new();

        for entry in WalkDir::new(&articles_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !(path.is_file() && is_markdown_file(path)) {
                continue;
            }

            match load_article(path) {
                Ok(weighted) => articles.push(weighted),
                Err(e) => {
                    tracing::warn!("Failed to load article {:?}: {}", path, e);
                }
            }
        }

        articles.sort_by_key(|(weight, _)| *weight);

        Ok(articles.into_iter().map(|(_, article)| article).collect())
    }

    /// Load content/projects.yml
    pub fn load_projects(&self) -> Result<Vec<Project>> {
        let path = self.folio.content_dir.join("projects.yml");
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)?;
        parse_projects(&content).with_context(|| format!("Failed to parse {:?}", path))
    }
}

fn load_article(path: &Path) -> Result<(i64, Article)> {
    let content = fs::read_to_string(path)?;
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("untitled");

    let (fm, _) = FrontMatter::parse(&content)?;
    let weight = fm
        .extra
        .get("weight")
        .and_then(|w| w.as_i64())
        .unwrap_or(0);

    Ok((weight, parse_article(stem, &content)?))
}

/// Build an article from a front-matter file; `stem` is the fallback slug
pub fn parse_article(stem: &str, content: &str) -> Result<Article> {
    let (fm, body) = FrontMatter::parse(content)?;

    if fm.title.is_none() {
        tracing::warn!("Article {} has no title in its front-matter", stem);
    }

    let slug = fm.slug.unwrap_or_else(|| stem.to_string());
    let title = fm.title.unwrap_or_else(|| stem.to_string());

    let mut article = Article::new(title, slug);
    article.description = fm.description.unwrap_or_default();
    article.date = fm.date.unwrap_or_default();
    article.read_time = fm.read_time.unwrap_or_default();
    article.tags = fm.tags;
    article.body = body.to_string();

    Ok(article)
}

/// Parse a YAML list of projects
pub fn parse_projects(content: &str) -> Result<Vec<Project>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut projects: Vec<Project> = serde_yaml::from_str(content)?;
    for project in &mut projects {
        project.ensure_slug();
    }
    Ok(projects)
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}
