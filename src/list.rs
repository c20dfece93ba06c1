//! Turns a list of named references into a linked sentence fragment:
//! `fighting, rock and steel`.

use tracing::warn;

use crate::fragment::SentenceFragment;
use crate::names::{NameStyle, DEFAULT_DELIMITER};
use crate::reference::{link_target, NamedReference};
use crate::separator::separator_at;

/// Link text used when an item arrives without a name.
pub const UNNAMED_PLACEHOLDER: &str = "unknown";

/// List formatting with Title-styled link text.
///
/// Returns an empty fragment for an empty list; callers decide what fallback
/// sentence to show around it.
pub fn format_list(items: &[NamedReference], link_base: &str) -> SentenceFragment {
    ListFormatter::new(link_base).format(items)
}

#[derive(Debug, Clone)]
pub struct ListFormatter {
    link_base: String,
    style: NameStyle,
    delimiter: String,
}

impl ListFormatter {
    pub fn new(link_base: impl Into<String>) -> Self {
        Self {
            link_base: link_base.into(),
            style: NameStyle::Title,
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }

    pub fn with_style(mut self, style: NameStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// One link per item, each followed by its positional separator.
    pub fn format(&self, items: &[NamedReference]) -> SentenceFragment {
        let mut fragment = SentenceFragment::new();
        let total = items.len();

        for (index, item) in items.iter().enumerate() {
            fragment.push_link(
                self.link_text(item),
                link_target(&self.link_base, &item.name),
            );
            fragment.push_text(separator_at(index, total));
        }

        fragment
    }

    fn link_text(&self, item: &NamedReference) -> String {
        if item.name.trim().is_empty() {
            warn!(
                "list item without a name (target {:?}), using placeholder",
                item.target
            );
            return UNNAMED_PLACEHOLDER.to_string();
        }
        self.style.apply(&item.name, &self.delimiter)
    }
}
