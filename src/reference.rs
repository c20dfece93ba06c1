//! Named references handed over by the data source, plus small helpers for
//! the ids and entry numbers embedded in them.

use serde::{Deserialize, Serialize};

/// A linkable domain entity: a type, move, generation, version group...
///
/// `target` is an opaque locator (PokeAPI hands us a `url`). The formatters
/// never dereference it; links they build use `name` instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedReference {
    pub name: String,
    #[serde(alias = "url", default)]
    pub target: String,
}

impl NamedReference {
    pub fn new(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
        }
    }

    /// Reference with no locator, handy when only the name matters.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, String::new())
    }
}

/// Marks a sentence as describing a historical state, e.g. a generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporalContext {
    pub label: String,
    pub target: String,
}

impl TemporalContext {
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }

    /// Context for a generation reference, linking to `generation_base?name=<name>`.
    pub fn generation(generation: &NamedReference, generation_base: &str) -> Self {
        Self {
            label: generation.name.clone(),
            target: link_target(generation_base, &generation.name),
        }
    }
}

/// Navigation target for a named entity under a base path.
pub fn link_target(base: &str, name: &str) -> String {
    format!("{}?name={}", base, name)
}

/// Last non-empty path segment of a resource url.
/// `https://pokeapi.co/api/v2/pokemon-species/1/` -> `1`
pub fn resource_id_from_url(url: &str) -> Option<&str> {
    url.split('/').filter(|part| !part.is_empty()).next_back()
}

/// Four-digit, zero-padded entry number. Wider numbers are left as they are.
pub fn format_entry_number(number: u32) -> String {
    format!("{:04}", number)
}
