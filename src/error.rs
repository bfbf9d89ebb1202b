//! Catalog errors

use thiserror::Error;

/// Problems found while assembling or querying a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate slug: {0}")]
    DuplicateSlug(String),

    #[error("{kind} at position {index} has an empty title")]
    EmptyTitle { kind: &'static str, index: usize },

    #[error("article not found: {0}")]
    NotFound(String),
}
