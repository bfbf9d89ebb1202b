//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::content::builtin;

const DEFAULT_CONFIG: &str = r#"# Site
title: Portfolio
description: ''
author: Tolga Ince
language: tr

# Directory
content_dir: content

# Code blocks
highlight:
  enable: true
  theme: base16-ocean.dark

# Project list menu
projects:
  all_label: Tümü
  categories: [Tümü, React, Next, Fullstack, UI]

# folio serve
server:
  ip: localhost
  port: 4000
"#;

/// Initialize a new site in the given directory, seeded with the built-in catalog
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        anyhow::bail!("Site already initialized: {:?}", config_path);
    }

    let articles_dir = target_dir.join("content/articles");
    fs::create_dir_all(&articles_dir)?;

    fs::write(&config_path, DEFAULT_CONFIG)?;
    fs::write(
        target_dir.join("content/projects.yml"),
        builtin::PROJECTS_SOURCE,
    )?;

    for (weight, (stem, source)) in builtin::ARTICLE_SOURCES.iter().enumerate() {
        let path = articles_dir.join(format!("{}.md", stem));
        fs::write(&path, with_weight(source, weight + 1))?;
        tracing::debug!("Wrote {:?}", path);
    }

    Ok(())
}

/// Add a `weight` key so files keep the built-in order on disk
fn with_weight(source: &str, weight: usize) -> String {
    match source.strip_prefix("---\n") {
        Some(rest) => format!("---\nweight: {}\n{}", weight, rest),
        None => source.to_string(),
    }
}
