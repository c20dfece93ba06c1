use serde::{Deserialize, Serialize};

/// One piece of a sentence: literal text or a navigable link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    Text { text: String },
    Link { text: String, target: String },
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Segment::Text { text } | Segment::Link { text, .. } => text,
        }
    }
}

/// An ordered run of segments that a renderer turns into prose.
///
/// Empty text runs are dropped and adjacent text runs are merged, so two
/// fragments with the same rendered output compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SentenceFragment {
    segments: Vec<Segment>,
}

impl SentenceFragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fragment consisting of a single text run.
    pub fn from_text(text: impl Into<String>) -> Self {
        let mut fragment = Self::new();
        fragment.push_text(text);
        fragment
    }

    pub fn push_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        if let Some(Segment::Text { text: last }) = self.segments.last_mut() {
            last.push_str(&text);
            return;
        }
        self.segments.push(Segment::Text { text });
    }

    pub fn push_link(&mut self, text: impl Into<String>, target: impl Into<String>) {
        self.segments.push(Segment::Link {
            text: text.into(),
            target: target.into(),
        });
    }

    /// Append another fragment's segments, merging text at the seam.
    pub fn append(&mut self, other: SentenceFragment) {
        for segment in other.segments {
            match segment {
                Segment::Text { text } => self.push_text(text),
                link => self.segments.push(link),
            }
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// `(text, target)` for every link, in order.
    pub fn links(&self) -> impl Iterator<Item = (&str, &str)> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Link { text, target } => Some((text.as_str(), target.as_str())),
            Segment::Text { .. } => None,
        })
    }

    /// Rendered text with links reduced to their display text.
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(Segment::text).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_dropped() {
        let mut f = SentenceFragment::new();
        f.push_text("");
        assert!(f.is_empty());
    }

    #[test]
    fn test_adjacent_text_merges() {
        let mut f = SentenceFragment::new();
        f.push_text("During ");
        f.push_link("generation-i", "/g?name=generation-i");
        f.push_text(", ");
        f.push_text("Ice took");
        assert_eq!(f.len(), 3);
        assert_eq!(f.segments()[2].text(), ", Ice took");
    }

    #[test]
    fn test_append_merges_at_seam() {
        let mut a = SentenceFragment::from_text("Ice takes ");
        let mut b = SentenceFragment::from_text("double damage from ");
        b.push_link("rock", "/t?name=rock");
        a.append(b);
        assert_eq!(a.len(), 2);
        assert_eq!(a.plain_text(), "Ice takes double damage from rock");
    }

    #[test]
    fn test_links_iterator() {
        let mut f = SentenceFragment::new();
        f.push_link("a", "/x?name=a");
        f.push_text(" and ");
        f.push_link("b", "/x?name=b");
        let links: Vec<_> = f.links().collect();
        assert_eq!(links, vec![("a", "/x?name=a"), ("b", "/x?name=b")]);
    }

    #[test]
    fn test_serializes_as_tagged_segments() {
        let mut f = SentenceFragment::from_text("see ");
        f.push_link("rock", "/t?name=rock");
        let json = serde_json::to_value(&f).unwrap();
        assert_eq!(json[0]["kind"], "text");
        assert_eq!(json[1]["kind"], "link");
        assert_eq!(json[1]["target"], "/t?name=rock");
    }
}
