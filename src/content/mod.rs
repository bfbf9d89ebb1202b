//! Content module - articles, projects and the catalog that holds them

pub mod builtin;
mod catalog;
mod frontmatter;
pub mod loader;
mod store;

pub use catalog::{Article, Catalog, CatalogItem, Project};
pub use frontmatter::FrontMatter;
pub use store::ArticleStore;
