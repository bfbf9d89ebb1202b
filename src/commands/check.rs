//! Validate the catalog

use anyhow::Result;
use std::collections::HashSet;

use crate::content::{Catalog, CatalogItem};
use crate::error::CatalogError;
use crate::Folio;

/// Outcome of a catalog check
#[derive(Debug, Default)]
pub struct Report {
    pub errors: Vec<CatalogError>,
    pub warnings: Vec<String>,
}

impl Report {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Check the site's catalog and print the findings
pub fn run(folio: &Folio) -> Result<()> {
    let catalog = folio.load_catalog()?;
    let report = check(&catalog);

    for warning in &report.warnings {
        tracing::warn!("{}", warning);
    }
    for error in &report.errors {
        tracing::error!("{}", error);
    }

    if !report.is_ok() {
        anyhow::bail!("Catalog has {} problem(s)", report.errors.len());
    }

    println!(
        "Catalog OK: {} articles, {} projects ({} warnings)",
        catalog.articles.len(),
        catalog.projects.len(),
        report.warnings.len()
    );
    Ok(())
}

/// Look for duplicate identifiers, empty titles and missing bodies
pub fn check(catalog: &Catalog) -> Report {
    let mut report = Report::default();

    check_items("article", &catalog.articles, &mut report);
    check_items("project", &catalog.projects, &mut report);

    for article in &catalog.articles {
        if article.body.trim().is_empty() {
            report
                .warnings
                .push(format!("article {} has no body", article.slug));
        }
    }

    report
}

fn check_items<T: CatalogItem>(kind: &'static str, items: &[T], report: &mut Report) {
    let mut seen = HashSet::new();
    for (index, item) in items.iter().enumerate() {
        if item.title().trim().is_empty() {
            report.errors.push(CatalogError::EmptyTitle { kind, index });
        }
        if !seen.insert(item.identifier()) {
            report
                .errors
                .push(CatalogError::DuplicateSlug(item.identifier().to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{builtin, Article, Project};

    #[test]
    fn test_builtin_catalog_is_valid() {
        let report = check(&builtin::catalog().unwrap());
        assert!(report.is_ok());
        assert_eq!(report.warnings.len(), 3);
    }

    #[test]
    fn test_detects_problems() {
        let mut article = Article::new("A".to_string(), "a".to_string());
        article.body = "text".to_string();
        let catalog = Catalog {
            articles: vec![article.clone(), article],
            projects: vec![Project::new(" ".to_string(), "UI".to_string())],
        };

        let report = check(&catalog);
        assert_eq!(report.errors.len(), 2);
        assert!(matches!(report.errors[0], CatalogError::DuplicateSlug(_)));
        assert!(matches!(
            report.errors[1],
            CatalogError::EmptyTitle { kind: "project", index: 0 }
        ));
    }
}
