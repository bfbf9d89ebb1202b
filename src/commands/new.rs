//! Create a new article

use anyhow::Result;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

use crate::Folio;

/// Front-matter written into a fresh article file
#[derive(Serialize)]
struct Scaffold<'a> {
    title: &'a str,
    description: &'a str,
    date: &'a str,
    read_time: &'a str,
    tags: &'a [String],
}

/// Create content/articles/<slug>.md and return its path
pub fn create_article(folio: &Folio, title: &str, tags: &[String]) -> Result<PathBuf> {
    let slug = slug::slugify(title);
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a slug from title {:?}", title);
    }

    let target_dir = folio.content_dir.join("articles");
    fs::create_dir_all(&target_dir)?;

    let file_path = target_dir.join(format!("{}.md", slug));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let front_matter = serde_yaml::to_string(&Scaffold {
        title,
        description: "",
        date: "",
        read_time: "",
        tags,
    })?;

    fs::write(&file_path, format!("---\n{}---\n", front_matter))?;
    tracing::info!("Created article {}", slug);

    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::loader::ContentLoader;

    #[test]
    fn test_new_article_is_loadable() {
        let dir = tempfile::tempdir().unwrap();
        let folio = Folio::new(dir.path()).unwrap();

        let path = create_article(&folio, "Rust: İlk Adımlar", &["Rust".to_string()]).unwrap();
        assert!(path.ends_with("rust-ilk-adimlar.md"));

        let articles = ContentLoader::new(&folio).load_articles().unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Rust: İlk Adımlar");
        assert_eq!(articles[0].tags, vec!["Rust"]);
        assert!(articles[0].body.is_empty());
    }

    #[test]
    fn test_new_article_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        create_article(&folio, "Hello", &[]).unwrap();
        assert!(create_article(&folio, "Hello", &[]).is_err());
    }
}
