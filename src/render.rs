//! Renderers turn sentence fragments into a concrete surface. The
//! formatters know nothing about any of them.

use std::fmt;

use clap::ValueEnum;
use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::{Deserialize, Serialize};

use crate::fragment::{Segment, SentenceFragment};
use crate::page::Section;

pub trait Render {
    fn render(&self, fragment: &SentenceFragment) -> String;

    /// Render a sequence of sentences, one per line.
    fn render_all(&self, fragments: &[SentenceFragment]) -> String {
        fragments
            .iter()
            .map(|f| self.render(f))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn heading(&self, title: &str) -> String {
        title.to_string()
    }

    /// A whole page: the title, then each section as a heading followed by
    /// its sentences.
    fn document(&self, title: &str, sections: &[Section]) -> String {
        let mut out = vec![self.heading(title)];
        for section in sections {
            out.push(self.heading(&section.heading));
            out.push(self.render_all(&section.sentences));
        }
        out.join("\n\n")
    }
}

/// Links reduced to their display text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainText;

impl Render for PlainText {
    fn render(&self, fragment: &SentenceFragment) -> String {
        fragment.plain_text()
    }
}

/// Anchors inside one `<p>` per sentence.
#[derive(Debug, Clone, Copy, Default)]
pub struct Html;

impl Render for Html {
    fn render(&self, fragment: &SentenceFragment) -> String {
        fragment
            .segments()
            .iter()
            .map(|segment| match segment {
                Segment::Text { text } => encode_text(text).into_owned(),
                Segment::Link { text, target } => format!(
                    "<a href=\"{}\">{}</a>",
                    encode_double_quoted_attribute(target),
                    encode_text(text)
                ),
            })
            .collect()
    }

    fn render_all(&self, fragments: &[SentenceFragment]) -> String {
        fragments
            .iter()
            .map(|f| format!("<p>{}</p>", self.render(f)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn heading(&self, title: &str) -> String {
        format!("<h1>{}</h1>", encode_text(title))
    }
}

/// Inline `[text](target)` links. Brackets in link text are backslash
/// escaped and spaces or parentheses in targets are percent-encoded; plain
/// text runs are emitted as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct Markdown;

impl Render for Markdown {
    fn render(&self, fragment: &SentenceFragment) -> String {
        fragment
            .segments()
            .iter()
            .map(|segment| match segment {
                Segment::Text { text } => text.clone(),
                Segment::Link { text, target } => format!(
                    "[{}]({})",
                    escape_link_text(text),
                    escape_link_target(target)
                ),
            })
            .collect()
    }

    fn render_all(&self, fragments: &[SentenceFragment]) -> String {
        fragments
            .iter()
            .map(|f| self.render(f))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn heading(&self, title: &str) -> String {
        format!("# {}", title)
    }
}

fn escape_link_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '\\' | '[' | ']') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

fn escape_link_target(target: &str) -> String {
    let mut out = String::with_capacity(target.len());
    for ch in target.chars() {
        match ch {
            ' ' => out.push_str("%20"),
            '(' => out.push_str("%28"),
            ')' => out.push_str("%29"),
            _ => out.push(ch),
        }
    }
    out
}

/// Fragments serialized as JSON segment arrays.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl Render for Json {
    fn render(&self, fragment: &SentenceFragment) -> String {
        serde_json::to_string(fragment).unwrap_or_else(|_| "[]".to_string())
    }

    fn render_all(&self, fragments: &[SentenceFragment]) -> String {
        serde_json::to_string_pretty(fragments).unwrap_or_else(|_| "[]".to_string())
    }

    fn heading(&self, title: &str) -> String {
        serde_json::to_string(title).unwrap_or_default()
    }

    /// One JSON object with the title and every section, so the output
    /// parses as a single document.
    fn document(&self, title: &str, sections: &[Section]) -> String {
        let page = serde_json::json!({ "title": title, "sections": sections });
        serde_json::to_string_pretty(&page).unwrap_or_else(|_| "{}".to_string())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Markdown,
    Json,
}

impl OutputFormat {
    pub fn renderer(self) -> Box<dyn Render> {
        match self {
            OutputFormat::Text => Box::new(PlainText),
            OutputFormat::Html => Box::new(Html),
            OutputFormat::Markdown => Box::new(Markdown),
            OutputFormat::Json => Box::new(Json),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
