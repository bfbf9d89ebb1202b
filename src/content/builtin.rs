//! Catalog embedded in the binary, used when a site has no content directory

use anyhow::Result;

use super::catalog::{Article, Catalog, Project};
use super::loader::{parse_article, parse_projects};

/// Article files in catalog order: (file stem, source)
pub const ARTICLE_SOURCES: &[(&str, &str)] = &[
    (
        "react-performance-optimizasyonu",
        include_str!("../../data/articles/react-performance-optimizasyonu.md"),
    ),
    (
        "nextjs-app-router-deep-dive",
        include_str!("../../data/articles/nextjs-app-router-deep-dive.md"),
    ),
    (
        "css-grid-vs-flexbox",
        include_str!("../../data/articles/css-grid-vs-flexbox.md"),
    ),
    (
        "typescript-type-safe-react-hooks",
        include_str!("../../data/articles/typescript-type-safe-react-hooks.md"),
    ),
    (
        "tailwind-css-responsive-design-mastery",
        include_str!("../../data/articles/tailwind-css-responsive-design-mastery.md"),
    ),
    (
        "frontend-testing-strategies",
        include_str!("../../data/articles/frontend-testing-strategies.md"),
    ),
];

pub const PROJECTS_SOURCE: &str = include_str!("../../data/projects.yml");

/// Parse the embedded catalog
pub fn catalog() -> Result<Catalog> {
    let articles = ARTICLE_SOURCES
        .iter()
        .map(|(stem, source)| parse_article(stem, source))
        .collect::<Result<Vec<Article>>>()?;
    let projects: Vec<Project> = parse_projects(PROJECTS_SOURCE)?;

    Ok(Catalog { articles, projects })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ArticleStore;
    use crate::render::{render, ContentBlock};

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = catalog().unwrap();
        assert_eq!(catalog.articles.len(), 6);
        assert_eq!(catalog.projects.len(), 6);
        assert_eq!(catalog.articles[0].slug, "react-performance-optimizasyonu");
        assert_eq!(catalog.articles[0].tags, vec!["React", "Performance", "Optimization"]);
        assert_eq!(catalog.projects[0].slug, "e-commerce-dashboard");
    }

    #[test]
    fn test_builtin_bodies_and_store() {
        let catalog = catalog().unwrap();
        let store = ArticleStore::new(&catalog.articles).unwrap();
        let article = store.get("css-grid-vs-flexbox").unwrap();
        assert!(article.body.contains("```css"));
        assert_eq!(article.read_time, "6 dakika");
        assert!(store.get("typescript-type-safe-react-hooks").unwrap().body.is_empty());
    }

    #[test]
    fn test_builtin_bodies_are_complete() {
        let catalog = catalog().unwrap();
        let store = ArticleStore::new(&catalog.articles).unwrap();

        for (slug, code_blocks, headings) in [
            ("react-performance-optimizasyonu", 4, 5),
            ("nextjs-app-router-deep-dive", 5, 6),
            ("css-grid-vs-flexbox", 5, 7),
        ] {
            let blocks = render(&store.get(slug).unwrap().body);
            let code = blocks
                .iter()
                .filter(|b| matches!(b, ContentBlock::CodeBlock { .. }))
                .count();
            let titles: Vec<&str> = blocks
                .iter()
                .filter_map(|b| match b {
                    ContentBlock::Heading { text, .. } => Some(text.as_str()),
                    _ => None,
                })
                .collect();
            assert_eq!(code, code_blocks, "code blocks in {}", slug);
            assert_eq!(titles.len(), headings, "headings in {}", slug);
        }

        let css = render(&store.get("css-grid-vs-flexbox").unwrap().body);
        for heading in ["Responsive Card Grid", "Component İçi Layout", "Karar Verme Kriterleri"] {
            assert!(css.contains(&ContentBlock::Heading {
                level: 2,
                text: heading.to_string(),
            }));
        }
    }
}
