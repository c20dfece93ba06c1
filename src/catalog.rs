//! Static presentation metadata for each type: badge color, icon and a short
//! description. Passed explicitly to whatever composes a page.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::names::capitalize_first;

pub const DEFAULT_BADGE_CLASS: &str = "bgGray";
pub const NO_DESCRIPTION: &str = "No description available";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeMetadata {
    pub color: String,
    pub icon: String,
    pub description: String,
    pub badge_class: String,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read type catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed type catalog {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeCatalog {
    entries: BTreeMap<String, TypeMetadata>,
}

const BUILTIN: &[(&str, &str, &str)] = &[
    ("normal", "#A8A77A", "Normal-type moves and Pokémon have no special strengths; only Fighting hits them hard."),
    ("fire", "#EE8130", "Fire burns through Grass, Ice, Bug and Steel but is doused by Water."),
    ("water", "#6390F0", "Water douses Fire and erodes Ground and Rock."),
    ("electric", "#F7D02C", "Electric strikes Water and Flying but fizzles against Ground."),
    ("grass", "#7AC74C", "Grass soaks up Water and roots into Ground and Rock."),
    ("ice", "#96D9D6", "Ice freezes Grass, Ground, Flying and Dragon but melts before Fire."),
    ("fighting", "#C22E28", "Fighting overpowers Normal, Ice, Rock, Dark and Steel."),
    ("poison", "#A33EA1", "Poison corrodes Grass and Fairy."),
    ("ground", "#E2BF65", "Ground shakes Fire, Electric, Poison, Rock and Steel."),
    ("flying", "#A98FF3", "Flying soars over Grass, Fighting and Bug."),
    ("psychic", "#F95587", "Psychic outwits Fighting and Poison."),
    ("bug", "#A6B91A", "Bug preys on Grass, Psychic and Dark."),
    ("rock", "#B6A136", "Rock crushes Fire, Ice, Flying and Bug."),
    ("ghost", "#735797", "Ghost haunts Psychic and Ghost and cannot touch Normal."),
    ("dragon", "#6F35FC", "Dragon is strong against Dragon and stopped cold by Fairy."),
    ("dark", "#705746", "Dark preys on Psychic and Ghost."),
    ("steel", "#B7B7CE", "Steel resists most types and hits Ice, Rock and Fairy hard."),
    ("fairy", "#D685AD", "Fairy charms Fighting, Dragon and Dark."),
];

impl TypeCatalog {
    /// The eighteen standard types.
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|(name, color, description)| {
                (
                    name.to_string(),
                    TypeMetadata {
                        color: color.to_string(),
                        icon: format!("{}.svg", name),
                        description: description.to_string(),
                        badge_class: format!("bg{}", capitalize_first(name)),
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// Load a catalog from a JSON object keyed by type name.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        debug!("Loading type catalog from {:?}", path);
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let raw: BTreeMap<String, TypeMetadata> =
            serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        // Lookups are case-insensitive, so keys are stored lowercased.
        let entries = raw
            .into_iter()
            .map(|(name, metadata)| (name.to_lowercase(), metadata))
            .collect();
        Ok(Self { entries })
    }

    pub fn get(&self, type_name: &str) -> Option<&TypeMetadata> {
        self.entries.get(&type_name.to_lowercase())
    }

    pub fn badge_class(&self, type_name: &str) -> &str {
        self.get(type_name)
            .map(|m| m.badge_class.as_str())
            .unwrap_or(DEFAULT_BADGE_CLASS)
    }

    pub fn description(&self, type_name: &str) -> &str {
        self.get(type_name)
            .map(|m| m.description.as_str())
            .unwrap_or(NO_DESCRIPTION)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
