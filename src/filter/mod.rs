//! Client-side style filtering of the catalog
//!
//! Everything here is a pure function of its inputs: callers keep the
//! `FilterState` and call back in whenever the query or tag changes.

use indexmap::IndexSet;

use crate::config::ProjectsConfig;
use crate::content::{CatalogItem, Project};

/// Current search box text and selected tag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Free text, matched case-insensitively against title and description
    pub query: String,
    /// At most one tag; `None` means "all"
    pub selected_tag: Option<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.selected_tag = Some(tag.into());
        self
    }

    /// Select a menu entry, where `all_label` clears the selection
    pub fn with_category(mut self, category: &str, all_label: &str) -> Self {
        self.selected_tag = if category == all_label {
            None
        } else {
            Some(category.to_string())
        };
        self
    }

    fn matches_query<T: CatalogItem>(&self, needle: &str, item: &T) -> bool {
        self.query.is_empty()
            || item.title().to_lowercase().contains(needle)
            || item.description().to_lowercase().contains(needle)
    }

    fn matches_tag<T: CatalogItem>(&self, item: &T) -> bool {
        match &self.selected_tag {
            None => true,
            Some(tag) => item.tags().iter().any(|t| t == tag),
        }
    }

    /// Whether a single item passes both constraints
    pub fn matches<T: CatalogItem>(&self, item: &T) -> bool {
        let needle = self.query.to_lowercase();
        self.matches_query(&needle, item) && self.matches_tag(item)
    }
}

/// Items matching `state`, in catalog order
pub fn filter<'a, T: CatalogItem>(catalog: &'a [T], state: &FilterState) -> Vec<&'a T> {
    let needle = state.query.to_lowercase();
    catalog
        .iter()
        .filter(|item| state.matches_query(&needle, *item) && state.matches_tag(*item))
        .collect()
}

/// Distinct tags across the catalog, in first-occurrence order
pub fn all_tags<T: CatalogItem>(catalog: &[T]) -> Vec<String> {
    let tags: IndexSet<&String> = catalog.iter().flat_map(|item| item.tags()).collect();
    tags.into_iter().cloned().collect()
}

/// Projects flagged as featured, in catalog order
pub fn featured(projects: &[Project]) -> Vec<&Project> {
    projects.iter().filter(|p| p.featured).collect()
}

/// Category menu for the project list, "all" entry first
pub fn project_categories(config: &ProjectsConfig, projects: &[Project]) -> Vec<String> {
    let categories = if config.categories.is_empty() {
        all_tags(projects)
    } else {
        config.categories.clone()
    };

    std::iter::once(config.all_label.clone())
        .chain(categories.into_iter().filter(|c| *c != config.all_label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Article;

    fn article(title: &str, description: &str, tags: &[&str]) -> Article {
        let mut a = Article::new(title.to_string(), slug::slugify(title));
        a.description = description.to_string();
        a.tags = tags.iter().map(|t| t.to_string()).collect();
        a
    }

    fn catalog() -> Vec<Article> {
        vec![
            article("React Basics", "Hooks and state", &["React", "Frontend"]),
            article("CSS Grid", "Layout with grid", &["CSS", "Layout", "Frontend"]),
            article("Testing React", "Jest and friends", &["Testing", "React"]),
            article("Rust Notes", "Ownership explained", &["Rust"]),
        ]
    }

    fn titles<'a>(items: &[&'a Article]) -> Vec<&'a str> {
        items.iter().map(|a| a.title.as_str()).collect()
    }

    #[test]
    fn test_identity_state_returns_full_catalog() {
        let catalog = catalog();
        let result = filter(&catalog, &FilterState::default());
        assert_eq!(result.len(), catalog.len());
        for (got, expected) in result.iter().zip(catalog.iter()) {
            assert_eq!(*got, expected);
        }
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let catalog = vec![article("React Basics", "", &[])];
        let result = filter(&catalog, &FilterState::new().with_query("REACT"));
        assert_eq!(titles(&result), vec!["React Basics"]);
    }

    #[test]
    fn test_query_matches_description() {
        let catalog = catalog();
        let result = filter(&catalog, &FilterState::new().with_query("ownership"));
        assert_eq!(titles(&result), vec!["Rust Notes"]);
    }

    #[test]
    fn test_query_handles_non_ascii_case() {
        let catalog = vec![article("Performans İpuçları", "Öneriler", &[])];
        let result = filter(&catalog, &FilterState::new().with_query("öneri"));
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_tag_is_exact_and_case_sensitive() {
        let catalog = catalog();
        let result = filter(&catalog, &FilterState::new().with_tag("React"));
        assert_eq!(titles(&result), vec!["React Basics", "Testing React"]);

        let result = filter(&catalog, &FilterState::new().with_tag("react"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_result_is_ordered_subsequence() {
        let catalog = catalog();
        let result = filter(&catalog, &FilterState::new().with_tag("Frontend"));
        let positions: Vec<usize> = result
            .iter()
            .map(|a| catalog.iter().position(|c| c == *a).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_tag_never_widens_query_result() {
        let catalog = catalog();
        let query_only = filter(&catalog, &FilterState::new().with_query("react"));
        for tag in all_tags(&catalog) {
            let both = filter(
                &catalog,
                &FilterState::new().with_query("react").with_tag(tag),
            );
            assert!(both.len() <= query_only.len());
            assert!(both.iter().all(|a| query_only.contains(a)));
        }
    }

    #[test]
    fn test_empty_catalog_and_unknown_tag() {
        let empty: Vec<Article> = Vec::new();
        assert!(filter(&empty, &FilterState::new().with_query("x")).is_empty());

        let catalog = catalog();
        assert!(filter(&catalog, &FilterState::new().with_tag("Go")).is_empty());
    }

    #[test]
    fn test_all_tags_first_occurrence_order() {
        let catalog = catalog();
        assert_eq!(
            all_tags(&catalog),
            vec!["React", "Frontend", "CSS", "Layout", "Testing", "Rust"]
        );
    }

    #[test]
    fn test_matches_single_item() {
        let item = article("React Basics", "Hooks", &["React"]);
        assert!(FilterState::new().with_query("hook").matches(&item));
        assert!(!FilterState::new().with_tag("CSS").matches(&item));
    }

    #[test]
    fn test_with_category_all_label_clears_tag() {
        let state = FilterState::new().with_tag("React").with_category("Tümü", "Tümü");
        assert_eq!(state.selected_tag, None);

        let state = FilterState::new().with_category("Next", "Tümü");
        assert_eq!(state.selected_tag.as_deref(), Some("Next"));
    }

    fn project(title: &str, category: &str, featured: bool) -> Project {
        let mut p = Project::new(title.to_string(), category.to_string());
        p.featured = featured;
        p
    }

    #[test]
    fn test_featured_and_category_filter() {
        let projects = vec![
            project("Dashboard", "Fullstack", true),
            project("Tasks", "React", true),
            project("Weather", "React", false),
        ];

        let names: Vec<_> = featured(&projects).iter().map(|p| p.title.as_str()).collect();
        assert_eq!(names, vec!["Dashboard", "Tasks"]);

        let state = FilterState::new().with_category("React", "Tümü");
        let names: Vec<_> = filter(&projects, &state)
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(names, vec!["Tasks", "Weather"]);
    }

    #[test]
    fn test_project_categories_menu() {
        let projects = vec![
            project("Dashboard", "Fullstack", true),
            project("Tasks", "React", true),
            project("Blog", "Fullstack", false),
        ];

        let derived = project_categories(&ProjectsConfig::default(), &projects);
        assert_eq!(derived, vec!["Tümü", "Fullstack", "React"]);

        let configured = ProjectsConfig {
            all_label: "All".to_string(),
            categories: vec!["All".to_string(), "React".to_string(), "UI".to_string()],
        };
        assert_eq!(
            project_categories(&configured, &projects),
            vec!["All", "React", "UI"]
        );
    }
}
