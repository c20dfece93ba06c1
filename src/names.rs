use serde::{Deserialize, Serialize};

pub const DEFAULT_DELIMITER: &str = "-";

/// How a resource name is turned into link text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameStyle {
    /// Name as given: `fire-red`
    Raw,
    /// Delimiter split, each word capitalized: `Fire Red`
    #[default]
    Title,
    /// First letter capitalized only: `Fire-red`
    Capitalized,
}

impl NameStyle {
    pub fn apply(self, name: &str, delimiter: &str) -> String {
        match self {
            NameStyle::Raw => name.to_string(),
            NameStyle::Title => display_name_with(name, delimiter),
            NameStyle::Capitalized => capitalize_first(name),
        }
    }
}

/// `fire-red` -> `Fire Red`
pub fn display_name(name: &str) -> String {
    display_name_with(name, DEFAULT_DELIMITER)
}

/// Split on `delimiter`, capitalize the first character of each word and
/// join with single spaces. Idempotent on already title-cased, space-joined
/// input. An empty delimiter leaves the name as one word.
pub fn display_name_with(name: &str, delimiter: &str) -> String {
    if name.is_empty() {
        return String::new();
    }
    if delimiter.is_empty() {
        return capitalize_first(name);
    }
    name.split(delimiter)
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first character only.
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("fire-red"), "Fire Red");
        assert_eq!(display_name("ice"), "Ice");
        assert_eq!(display_name("generation-iii"), "Generation Iii");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn test_display_name_keeps_empty_words() {
        // Mirrors a plain split/join: a doubled delimiter yields a double space.
        assert_eq!(display_name("a--b"), "A  B");
    }

    #[test]
    fn test_display_name_custom_delimiter() {
        assert_eq!(display_name_with("mr_mime", "_"), "Mr Mime");
        assert_eq!(display_name_with("mr-mime", ""), "Mr-mime");
    }

    #[test]
    fn test_display_name_idempotent() {
        for name in ["fire-red", "lets-go-pikachu-lets-go-eevee", "x-y", "ho-oh"] {
            let once = display_name(name);
            assert_eq!(display_name(&once), once);
        }
    }

    #[test]
    fn test_display_name_unicode() {
        assert_eq!(display_name("éclair-ß"), "Éclair SS");
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("kanto"), "Kanto");
        assert_eq!(capitalize_first("red-blue"), "Red-blue");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_styles() {
        assert_eq!(NameStyle::Raw.apply("red-blue", "-"), "red-blue");
        assert_eq!(NameStyle::Title.apply("red-blue", "-"), "Red Blue");
        assert_eq!(NameStyle::Capitalized.apply("red-blue", "-"), "Red-blue");
    }
}
