//! HTML output for rendered blocks, with syntax highlighting

use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use super::{ContentBlock, Segment, SegmentKind};
use crate::config::HighlightConfig;

/// Turns content blocks into HTML
pub struct HtmlRenderer {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
    highlight: bool,
}

impl HtmlRenderer {
    /// Create a renderer with the default theme
    pub fn new() -> Self {
        Self::with_options("base16-ocean.dark", true)
    }

    /// Create with custom settings
    pub fn with_options(theme: &str, highlight: bool) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: theme.to_string(),
            highlight,
        }
    }

    pub fn from_config(config: &HighlightConfig) -> Self {
        Self::with_options(&config.theme, config.enable)
    }

    /// Render a block sequence to an HTML fragment
    pub fn render(&self, blocks: &[ContentBlock]) -> String {
        let mut html = String::new();
        for block in blocks {
            match block {
                ContentBlock::Heading { level, text } => {
                    html.push_str(&format!("<h{level}>{}</h{level}>", html_escape(text)));
                }
                ContentBlock::CodeBlock { language, code } => {
                    html.push_str(&self.highlight_code(code, language));
                }
                ContentBlock::Paragraph { segments } => {
                    html.push_str("<p>");
                    for segment in segments {
                        push_segment(&mut html, segment);
                    }
                    html.push_str("</p>");
                }
                ContentBlock::Blank => html.push_str("<br>"),
            }
            html.push('\n');
        }
        html
    }

    /// Highlight a code block
    fn highlight_code(&self, code: &str, lang: &str) -> String {
        let lang = if lang.trim().is_empty() {
            "text"
        } else {
            lang.trim()
        };

        if !self.highlight {
            return plain_code_block(code, lang);
        }

        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let theme = match self
            .theme_set
            .themes
            .get(&self.theme_name)
            .or_else(|| self.theme_set.themes.values().next())
        {
            Some(theme) => theme,
            None => return plain_code_block(code, lang),
        };

        match highlighted_html_for_string(code, &self.syntax_set, syntax, theme) {
            Ok(highlighted) => format!(
                r#"<figure class="highlight {}">{}</figure>"#,
                html_escape(lang),
                highlighted
            ),
            Err(e) => {
                tracing::debug!("Highlighting {} failed: {}", lang, e);
                plain_code_block(code, lang)
            }
        }
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn push_segment(html: &mut String, segment: &Segment) {
    match segment.kind {
        SegmentKind::Text => html.push_str(&html_escape(&segment.value)),
        SegmentKind::InlineCode => {
            html.push_str("<code>");
            html.push_str(&html_escape(&segment.value));
            html.push_str("</code>");
        }
    }
}

fn plain_code_block(code: &str, lang: &str) -> String {
    format!(
        r#"<pre><code class="language-{}">{}</code></pre>"#,
        html_escape(lang),
        html_escape(code)
    )
}

/// Simple HTML escaping
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
