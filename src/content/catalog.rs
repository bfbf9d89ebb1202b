//! Article and Project models

use serde::{Deserialize, Serialize};

/// Fields the content filter reads from every catalog entry
pub trait CatalogItem {
    /// Display title, searched by the free-text query
    fn title(&self) -> &str;

    /// Short description, searched by the free-text query
    fn description(&self) -> &str;

    /// Labels in declaration order
    fn tags(&self) -> &[String];

    /// Stable identifier, unique across the catalog
    fn identifier(&self) -> &str;
}

/// A blog article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Article title
    pub title: String,

    /// Short summary shown on the article list
    pub description: String,

    /// Publication date, kept as written
    pub date: String,

    /// Estimated reading time, kept as written
    pub read_time: String,

    /// Article tags
    pub tags: Vec<String>,

    /// URL-friendly identifier
    pub slug: String,

    /// Raw article body
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub body: String,
}

impl Article {
    /// Create a new article with minimal required fields
    pub fn new(title: String, slug: String) -> Self {
        Self {
            title,
            description: String::new(),
            date: String::new(),
            read_time: String::new(),
            tags: Vec::new(),
            slug,
            body: String::new(),
        }
    }

    /// Same article without its body, for list views
    pub fn summary(&self) -> Self {
        Self {
            body: String::new(),
            ..self.clone()
        }
    }
}

impl CatalogItem for Article {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn identifier(&self) -> &str {
        &self.slug
    }
}

/// A portfolio project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,

    pub description: String,

    /// Longer text used on the featured cards
    #[serde(default)]
    pub long_description: String,

    #[serde(default)]
    pub technologies: Vec<String>,

    /// A project belongs to exactly one category
    pub category: String,

    /// Live demo URL
    #[serde(default)]
    pub link: Option<String>,

    #[serde(default)]
    pub github: Option<String>,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub featured: bool,

    /// Derived from the title when not given
    #[serde(default)]
    pub slug: String,
}

impl Project {
    /// Create a new project in the given category
    pub fn new(title: String, category: String) -> Self {
        let slug = slug::slugify(&title);
        Self {
            title,
            description: String::new(),
            long_description: String::new(),
            technologies: Vec::new(),
            category,
            link: None,
            github: None,
            image: None,
            featured: false,
            slug,
        }
    }

    /// Fill in the slug from the title if it is missing
    pub fn ensure_slug(&mut self) {
        if self.slug.is_empty() {
            self.slug = slug::slugify(&self.title);
        }
    }
}

impl CatalogItem for Project {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn tags(&self) -> &[String] {
        std::slice::from_ref(&self.category)
    }

    fn identifier(&self) -> &str {
        &self.slug
    }
}

/// The full static catalog of a site
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub articles: Vec<Article>,
    pub projects: Vec<Project>,
}
