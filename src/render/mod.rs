//! Article body rendering
//!
//! Article bodies are prose with fenced code segments. `render` turns a body
//! into an ordered list of typed blocks; `html::HtmlRenderer` turns those
//! blocks into markup.

pub mod html;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

pub use html::HtmlRenderer;

/// Code fence delimiter
pub const FENCE: &str = "```";

lazy_static! {
    static ref INLINE_CODE: Regex = Regex::new(r"`([^`]+)`").unwrap();
}

/// One piece of a paragraph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    Text,
    InlineCode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub kind: SegmentKind,
    pub value: String,
}

impl Segment {
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            kind: SegmentKind::Text,
            value: value.into(),
        }
    }

    pub fn code(value: impl Into<String>) -> Self {
        Self {
            kind: SegmentKind::InlineCode,
            value: value.into(),
        }
    }
}

/// A rendered unit of article content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Heading { level: u8, text: String },
    CodeBlock { language: String, code: String },
    Paragraph { segments: Vec<Segment> },
    Blank,
}

impl ContentBlock {
    /// Paragraph made of a single plain-text segment
    pub fn paragraph(text: impl Into<String>) -> Self {
        ContentBlock::Paragraph {
            segments: vec![Segment::text(text)],
        }
    }
}

/// Render an article body into blocks, top to bottom
///
/// Segments between fence delimiters alternate prose / code by position, so
/// an unmatched delimiter makes everything after it a code block.
pub fn render(content: &str) -> Vec<ContentBlock> {
    let mut blocks = Vec::new();

    for (index, part) in content.split(FENCE).enumerate() {
        if index % 2 == 1 {
            blocks.push(render_fenced(part));
        } else {
            render_prose(part, &mut blocks);
        }
    }

    blocks
}

fn render_fenced(part: &str) -> ContentBlock {
    let (language, code) = part.split_once('\n').unwrap_or((part, ""));
    ContentBlock::CodeBlock {
        language: language.to_string(),
        code: code.to_string(),
    }
}

fn render_prose(part: &str, blocks: &mut Vec<ContentBlock>) {
    for line in part.split('\n') {
        blocks.push(render_line(line));
    }
}

fn render_line(line: &str) -> ContentBlock {
    if let Some(text) = line.strip_prefix("## ") {
        return ContentBlock::Heading {
            level: 2,
            text: text.to_string(),
        };
    }
    if let Some(text) = line.strip_prefix("# ") {
        return ContentBlock::Heading {
            level: 1,
            text: text.to_string(),
        };
    }
    if line.trim().is_empty() {
        return ContentBlock::Blank;
    }
    if line.contains('`') && !line.contains(FENCE) {
        return ContentBlock::Paragraph {
            segments: split_inline_code(line),
        };
    }
    ContentBlock::paragraph(line)
}

/// Alternate plain text and inline code; empty text pieces are dropped
fn split_inline_code(line: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;

    for caps in INLINE_CODE.captures_iter(line) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last {
            segments.push(Segment::text(&line[last..whole.start()]));
        }
        segments.push(Segment::code(inner.as_str()));
        last = whole.end();
    }

    if last < line.len() {
        segments.push(Segment::text(&line[last..]));
    }

    segments
}
