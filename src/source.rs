//! Records the formatters consume, in the shape PokeAPI serves them, and the
//! interface of whatever supplies them.
//!
//! Only the fields the sentence builders read are modelled; everything else
//! in a PokeAPI document is ignored on deserialization.

use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::reference::NamedReference;
use crate::relations::{RelationBucket, RelationBuckets};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DamageRelations {
    pub double_damage_from: Vec<NamedReference>,
    pub double_damage_to: Vec<NamedReference>,
    pub half_damage_from: Vec<NamedReference>,
    pub half_damage_to: Vec<NamedReference>,
    pub no_damage_from: Vec<NamedReference>,
    pub no_damage_to: Vec<NamedReference>,
}

impl DamageRelations {
    pub fn bucket(&self, bucket: RelationBucket) -> &[NamedReference] {
        match bucket {
            RelationBucket::DoubleDamageFrom => &self.double_damage_from,
            RelationBucket::DoubleDamageTo => &self.double_damage_to,
            RelationBucket::HalfDamageFrom => &self.half_damage_from,
            RelationBucket::HalfDamageTo => &self.half_damage_to,
            RelationBucket::NoDamageFrom => &self.no_damage_from,
            RelationBucket::NoDamageTo => &self.no_damage_to,
        }
    }

    pub fn to_buckets(&self) -> RelationBuckets {
        RelationBucket::ALL
            .iter()
            .map(|b| (*b, self.bucket(*b).to_vec()))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PastDamageRelations {
    pub generation: NamedReference,
    #[serde(default)]
    pub damage_relations: DamageRelations,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationGameIndex {
    pub game_index: u32,
    pub generation: NamedReference,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypePokemon {
    pub slot: u32,
    pub pokemon: NamedReference,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeResource {
    pub name: String,
    #[serde(default)]
    pub damage_relations: DamageRelations,
    #[serde(default)]
    pub past_damage_relations: Vec<PastDamageRelations>,
    #[serde(default)]
    pub game_indices: Vec<GenerationGameIndex>,
    #[serde(default)]
    pub generation: Option<NamedReference>,
    #[serde(default)]
    pub move_damage_class: Option<NamedReference>,
    #[serde(default)]
    pub pokemon: Vec<TypePokemon>,
    #[serde(default)]
    pub moves: Vec<NamedReference>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonEntry {
    pub entry_number: u32,
    pub pokemon_species: NamedReference,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokedexResource {
    pub name: String,
    #[serde(default)]
    pub is_main_series: bool,
    #[serde(default)]
    pub region: Option<NamedReference>,
    #[serde(default)]
    pub version_groups: Vec<NamedReference>,
    #[serde(default)]
    pub pokemon_entries: Vec<PokemonEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionResource {
    pub name: String,
    #[serde(default)]
    pub main_generation: Option<NamedReference>,
    #[serde(default)]
    pub version_groups: Vec<NamedReference>,
    #[serde(default)]
    pub pokedexes: Vec<NamedReference>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResource {
    pub name: String,
    #[serde(default)]
    pub main_region: Option<NamedReference>,
    #[serde(default)]
    pub version_groups: Vec<NamedReference>,
    #[serde(default)]
    pub types: Vec<NamedReference>,
    #[serde(default)]
    pub pokemon_species: Vec<NamedReference>,
    #[serde(default)]
    pub moves: Vec<NamedReference>,
    #[serde(default)]
    pub abilities: Vec<NamedReference>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Type,
    Pokedex,
    Region,
    Generation,
}

impl ResourceKind {
    /// PokeAPI path segment for this kind.
    pub fn path_segment(self) -> &'static str {
        match self {
            ResourceKind::Type => "type",
            ResourceKind::Pokedex => "pokedex",
            ResourceKind::Region => "region",
            ResourceKind::Generation => "generation",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("{kind} '{name}' not found")]
    NotFound { kind: ResourceKind, name: String },
    #[error("invalid {kind} name: {name:?}")]
    InvalidName { kind: ResourceKind, name: String },
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed {kind} record in {path:?}: {source}")]
    Parse {
        kind: ResourceKind,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Supplies already-fetched records. Implementations decide where records
/// come from; the formatters never call this directly.
pub trait ResourceSource {
    fn fetch_type(&self, name: &str) -> Result<TypeResource, SourceError>;
    fn fetch_pokedex(&self, name: &str) -> Result<PokedexResource, SourceError>;
    fn fetch_region(&self, name: &str) -> Result<RegionResource, SourceError>;
    fn fetch_generation(&self, name: &str) -> Result<GenerationResource, SourceError>;
}

/// Reads PokeAPI JSON dumps laid out as `<root>/<kind>/<name>.json`.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn record_path(&self, kind: ResourceKind, name: &str) -> Result<PathBuf, SourceError> {
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(SourceError::InvalidName {
                kind,
                name: name.to_string(),
            });
        }
        Ok(self
            .root
            .join(kind.path_segment())
            .join(format!("{}.json", name)))
    }

    fn load<T: serde::de::DeserializeOwned>(
        &self,
        kind: ResourceKind,
        name: &str,
    ) -> Result<T, SourceError> {
        let path = self.record_path(kind, name)?;
        debug!("Loading {} record from {:?}", kind, path);

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(SourceError::NotFound {
                    kind,
                    name: name.to_string(),
                })
            }
            Err(source) => return Err(SourceError::Io { path, source }),
        };

        serde_json::from_str(&content).map_err(|source| SourceError::Parse { kind, path, source })
    }
}

impl ResourceSource for DirectorySource {
    fn fetch_type(&self, name: &str) -> Result<TypeResource, SourceError> {
        self.load(ResourceKind::Type, name)
    }

    fn fetch_pokedex(&self, name: &str) -> Result<PokedexResource, SourceError> {
        self.load(ResourceKind::Pokedex, name)
    }

    fn fetch_region(&self, name: &str) -> Result<RegionResource, SourceError> {
        self.load(ResourceKind::Region, name)
    }

    fn fetch_generation(&self, name: &str) -> Result<GenerationResource, SourceError> {
        self.load(ResourceKind::Generation, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ICE: &str = r#"{
        "id": 15,
        "name": "ice",
        "damage_relations": {
            "double_damage_from": [
                {"name": "fighting", "url": "https://pokeapi.co/api/v2/type/2/"},
                {"name": "rock", "url": "https://pokeapi.co/api/v2/type/6/"}
            ],
            "double_damage_to": [],
            "half_damage_from": [{"name": "ice", "url": "https://pokeapi.co/api/v2/type/15/"}],
            "half_damage_to": [],
            "no_damage_from": [],
            "no_damage_to": []
        },
        "past_damage_relations": [],
        "game_indices": [
            {"game_index": 25, "generation": {"name": "generation-i", "url": ""}}
        ],
        "generation": {"name": "generation-i", "url": ""},
        "move_damage_class": {"name": "special", "url": ""},
        "pokemon": [
            {"slot": 1, "pokemon": {"name": "jynx", "url": ""}},
            {"slot": 2, "pokemon": {"name": "dewgong", "url": ""}}
        ],
        "moves": [{"name": "ice-punch", "url": ""}]
    }"#;

    #[test]
    fn test_parse_type_resource() {
        let ice: TypeResource = serde_json::from_str(ICE).unwrap();
        assert_eq!(ice.name, "ice");
        assert_eq!(ice.damage_relations.double_damage_from.len(), 2);
        assert_eq!(ice.game_indices[0].game_index, 25);
        assert_eq!(ice.moves.len(), 1);
        assert_eq!(ice.move_damage_class.unwrap().name, "special");
        assert_eq!(ice.pokemon[1].pokemon.name, "dewgong");
    }

    #[test]
    fn test_directory_source_loads_region_and_generation() {
        let dir = tempfile::TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("region")).unwrap();
        fs::create_dir_all(dir.path().join("generation")).unwrap();
        fs::write(
            dir.path().join("region").join("kanto.json"),
            r#"{"name": "kanto", "main_generation": {"name": "generation-i", "url": ""},
                "pokedexes": [{"name": "kanto", "url": ""}], "locations": []}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("generation").join("generation-ii.json"),
            r#"{"name": "generation-ii", "main_region": null,
                "types": [{"name": "dark", "url": ""}, {"name": "steel", "url": ""}]}"#,
        )
        .unwrap();

        let source = DirectorySource::new(dir.path());
        let kanto = source.fetch_region("kanto").unwrap();
        assert_eq!(kanto.main_generation.unwrap().name, "generation-i");
        assert!(kanto.version_groups.is_empty());

        let gen2 = source.fetch_generation("generation-ii").unwrap();
        assert!(gen2.main_region.is_none());
        assert_eq!(gen2.types.len(), 2);
        assert_eq!(
            source.fetch_region("johto").unwrap_err().to_string(),
            "region 'johto' not found"
        );
    }

    #[test]
    fn test_missing_relation_arrays_default_to_empty() {
        let r: DamageRelations =
            serde_json::from_str(r#"{"no_damage_to": [{"name": "ghost"}]}"#).unwrap();
        assert!(r.double_damage_from.is_empty());
        assert_eq!(r.bucket(RelationBucket::NoDamageTo)[0].name, "ghost");
    }

    #[test]
    fn test_to_buckets_has_every_key() {
        let buckets = DamageRelations::default().to_buckets();
        assert_eq!(buckets.len(), 6);
        assert!(buckets.values().all(|v| v.is_empty()));
    }

    #[test]
    fn test_directory_source_loads_record() {
        let dir = tempfile::TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("type")).unwrap();
        fs::write(dir.path().join("type").join("ice.json"), ICE).unwrap();

        let source = DirectorySource::new(dir.path());
        let ice = source.fetch_type("ice").unwrap();
        assert_eq!(ice.name, "ice");
    }

    #[test]
    fn test_directory_source_not_found() {
        let dir = tempfile::TempDir::new().unwrap();
        let source = DirectorySource::new(dir.path());
        let err = source.fetch_type("fire").unwrap_err();
        assert!(matches!(err, SourceError::NotFound { .. }));
        assert_eq!(err.to_string(), "type 'fire' not found");
    }

    #[test]
    fn test_directory_source_rejects_path_names() {
        let source = DirectorySource::new("/tmp");
        let err = source.fetch_pokedex("../etc/passwd").unwrap_err();
        assert!(matches!(err, SourceError::InvalidName { .. }));
    }

    #[test]
    fn test_directory_source_parse_error() {
        let dir = tempfile::TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("pokedex")).unwrap();
        fs::write(dir.path().join("pokedex").join("kanto.json"), "{ not json").unwrap();

        let err = DirectorySource::new(dir.path())
            .fetch_pokedex("kanto")
            .unwrap_err();
        assert!(matches!(err, SourceError::Parse { .. }));
    }
}
