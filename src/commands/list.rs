//! List site content

use anyhow::Result;
use std::fmt::Write;

use crate::filter::{self, FilterState};
use crate::{Folio, Site};

/// List site content by type, narrowed by the filter state
pub fn run(folio: &Folio, content_type: &str, state: &FilterState) -> Result<()> {
    let site = folio.load_site()?;
    print!("{}", format_listing(folio, &site, content_type, state)?);
    Ok(())
}

/// Filter state from command-line options; an empty tag means "all"
pub fn filter_state(query: String, tag: Option<String>) -> FilterState {
    FilterState {
        query,
        selected_tag: tag.filter(|t| !t.is_empty()),
    }
}

/// Build the listing text for a content type
pub fn format_listing(
    folio: &Folio,
    site: &Site,
    content_type: &str,
    state: &FilterState,
) -> Result<String> {
    let mut out = String::new();
    let catalog = &site.catalog;

    match content_type {
        "article" | "articles" => {
            let articles = filter::filter(&catalog.articles, state);
            tracing::debug!(
                "{} of {} articles match {:?}",
                articles.len(),
                catalog.articles.len(),
                state
            );
            writeln!(out, "Articles ({}):", articles.len())?;
            for article in articles {
                writeln!(
                    out,
                    "  {} - {} [{}] ({})",
                    article.date,
                    article.title,
                    article.slug,
                    article.tags.join(", ")
                )?;
            }
        }
        "project" | "projects" => {
            let state = match &state.selected_tag {
                Some(category) => state
                    .clone()
                    .with_category(category, &folio.config.projects.all_label),
                None => state.clone(),
            };
            let projects = filter::filter(&catalog.projects, &state);
            writeln!(out, "Projects ({}):", projects.len())?;
            for project in projects {
                let star = if project.featured { " *" } else { "" };
                writeln!(out, "  {} [{}]{}", project.title, project.category, star)?;
            }
        }
        "featured" => {
            let projects = filter::featured(&catalog.projects);
            writeln!(out, "Featured projects ({}):", projects.len())?;
            for project in projects {
                writeln!(out, "  {} [{}]", project.title, project.category)?;
            }
        }
        "tag" | "tags" => {
            let tags = filter::all_tags(&catalog.articles);
            writeln!(out, "Tags ({}):", tags.len())?;
            for tag in tags {
                let state = FilterState::new().with_tag(tag.as_str());
                let count = filter::filter(&catalog.articles, &state).len();
                writeln!(out, "  {} ({})", tag, count)?;
            }
        }
        "category" | "categories" => {
            let categories = filter::project_categories(&folio.config.projects, &catalog.projects);
            writeln!(out, "Categories ({}):", categories.len())?;
            for category in categories {
                let state =
                    FilterState::new().with_category(&category, &folio.config.projects.all_label);
                let count = filter::filter(&catalog.projects, &state).len();
                writeln!(out, "  {} ({})", category, count)?;
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: articles, projects, featured, tags, categories",
                content_type
            );
        }
    }

    Ok(out)
}
