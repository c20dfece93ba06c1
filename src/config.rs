use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::catalog::TypeCatalog;
use crate::names::{NameStyle, DEFAULT_DELIMITER};
use crate::relations::{RelationFormatter, RelationWording, DEFAULT_TYPE_PATH};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub links: LinkPaths,
    #[serde(default)]
    pub names: NameConfig,
    #[serde(default)]
    pub wording: RelationWording,

    /// Optional JSON file replacing the built-in type catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
}

/// Base paths links are built under, one per resource kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkPaths {
    #[serde(default = "default_type_path")]
    pub r#type: String,
    #[serde(default = "default_generation_path")]
    pub generation: String,
    #[serde(default = "default_version_group_path")]
    pub version_group: String,
    #[serde(default = "default_pokemon_path")]
    pub pokemon: String,
    #[serde(default = "default_pokedex_path")]
    pub pokedex: String,
    #[serde(default = "default_region_path")]
    pub region: String,
    #[serde(default = "default_move_path")]
    pub r#move: String,
}

impl Default for LinkPaths {
    fn default() -> Self {
        Self {
            r#type: default_type_path(),
            generation: default_generation_path(),
            version_group: default_version_group_path(),
            pokemon: default_pokemon_path(),
            pokedex: default_pokedex_path(),
            region: default_region_path(),
            r#move: default_move_path(),
        }
    }
}

fn default_type_path() -> String {
    DEFAULT_TYPE_PATH.to_string()
}

fn default_generation_path() -> String {
    "/pokemon/generation".to_string()
}

fn default_version_group_path() -> String {
    "/pokemon/game".to_string()
}

fn default_pokemon_path() -> String {
    "/pokemon".to_string()
}

fn default_pokedex_path() -> String {
    "/pokedex".to_string()
}

fn default_region_path() -> String {
    "/pokemon/region".to_string()
}

fn default_move_path() -> String {
    "/pokemon/move".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameConfig {
    /// Word delimiter in resource names (default: "-")
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Link text style in damage-relation sentences (default: "raw")
    #[serde(default = "default_relation_style")]
    pub relation_style: NameStyle,

    /// Link text style in plain lists (default: "title")
    #[serde(default)]
    pub list_style: NameStyle,
}

impl Default for NameConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            relation_style: default_relation_style(),
            list_style: NameStyle::Title,
        }
    }
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

fn default_relation_style() -> NameStyle {
    NameStyle::Raw
}

impl Config {
    /// Load config from the working directory or user config directory
    pub fn load() -> Result<Self> {
        Self::load_with_path(None)
    }

    /// Load configuration from a specific path, or use default search paths
    pub fn load_with_path(path: Option<String>) -> Result<Self> {
        // An explicit path must exist and parse
        if let Some(config_path) = path {
            debug!("Loading config from explicit path: {}", config_path);
            return Self::load_from_path(&config_path)
                .with_context(|| format!("Failed to load config from {}", config_path));
        }

        if let Ok(config) = Self::load_from_path("pokeprose.toml") {
            debug!("Loaded config from ./pokeprose.toml");
            return Ok(config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("pokeprose").join("config.toml");
            if let Ok(config) = Self::load_from_path(&config_path) {
                debug!("Loaded config from {:?}", config_path);
                return Ok(config);
            }
        }

        debug!("Using default config");
        Ok(Self::default())
    }

    fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Relation formatter built from the configured wording, type path and
    /// name style.
    pub fn relation_formatter(&self) -> RelationFormatter {
        RelationFormatter::new(self.wording.clone(), self.links.r#type.clone())
            .with_name_style(self.names.relation_style)
            .with_delimiter(self.names.delimiter.clone())
    }

    /// The configured type catalog, or the built-in one.
    pub fn type_catalog(&self) -> Result<TypeCatalog> {
        match &self.catalog {
            Some(path) => Ok(TypeCatalog::from_json_file(path)?),
            None => Ok(TypeCatalog::builtin()),
        }
    }
}
