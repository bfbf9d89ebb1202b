//! Render a single article

use anyhow::Result;
use std::fmt::Write;

use crate::render::{self, ContentBlock, HtmlRenderer, SegmentKind};
use crate::Folio;

/// Output format for `show`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
    Html,
}

impl std::str::FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            "html" => Ok(Format::Html),
            _ => anyhow::bail!("Unknown format: {}. Available: text, json, html", s),
        }
    }
}

/// Print the rendered article for `slug`
pub fn run(folio: &Folio, slug: &str, format: Format) -> Result<()> {
    let site = folio.load_site()?;
    let article = site.store.require(slug)?;
    let blocks = render::render(&article.body);
    tracing::debug!("Rendered {} into {} blocks", slug, blocks.len());

    let output = match format {
        Format::Text => format_text(&blocks)?,
        Format::Json => serde_json::to_string_pretty(&blocks)?,
        Format::Html => HtmlRenderer::from_config(&folio.config.highlight).render(&blocks),
    };

    println!("{}", article.title);
    println!("{}", output);
    Ok(())
}

/// Plain terminal rendering of blocks
pub fn format_text(blocks: &[ContentBlock]) -> Result<String> {
    let mut out = String::new();

    for block in blocks {
        match block {
            ContentBlock::Heading { level, text } => {
                writeln!(out, "{} {}", "#".repeat(*level as usize), text)?;
            }
            ContentBlock::CodeBlock { language, code } => {
                writeln!(out, "--- {} ---", language)?;
                out.push_str(code);
                if !code.ends_with('\n') {
                    out.push('\n');
                }
                writeln!(out, "---")?;
            }
            ContentBlock::Paragraph { segments } => {
                for segment in segments {
                    match segment.kind {
                        SegmentKind::Text => out.push_str(&segment.value),
                        SegmentKind::InlineCode => write!(out, "`{}`", segment.value)?,
                    }
                }
                out.push('\n');
            }
            ContentBlock::Blank => out.push('\n'),
        }
    }

    Ok(out)
}
