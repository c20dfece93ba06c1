//! Configuration loading from disk

use anyhow::Result;
use pokeprose::config::Config;
use pokeprose::{NameStyle, RelationBucket, Tense};
use std::fs;

#[test]
fn test_config_has_defaults() -> Result<()> {
    let config = Config::default();

    assert_eq!(config.links.r#type, "/pokemon/type");
    assert_eq!(config.links.version_group, "/pokemon/game");
    assert_eq!(config.names.list_style, NameStyle::Title);
    assert_eq!(
        config.wording.verb(RelationBucket::NoDamageTo, Tense::Present),
        "deals no damage to"
    );

    Ok(())
}

#[test]
fn test_config_load_returns_valid_config() -> Result<()> {
    // Either a discovered config or the defaults
    let config = Config::load()?;
    assert!(!config.links.r#type.is_empty());
    Ok(())
}

#[test]
fn test_load_explicit_path() -> Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("pokeprose.toml");
    fs::write(
        &path,
        r#"
[names]
relation_style = "title"

[wording]
during = "In"

[wording.present]
no_relations = "lists no damage relations"
"#,
    )?;

    let config = Config::load_with_path(Some(path.to_string_lossy().to_string()))?;
    assert_eq!(config.names.relation_style, NameStyle::Title);
    assert_eq!(config.names.delimiter, "-");
    assert_eq!(config.wording.during, "In");
    assert_eq!(
        config.wording.no_relations(Tense::Present),
        "lists no damage relations"
    );
    assert_eq!(
        config.wording.no_relations(Tense::Past),
        "has no specific damage relations listed"
    );

    let out = config
        .relation_formatter()
        .format("Ice", &Default::default(), Tense::Present, None);
    assert_eq!(out[0].plain_text(), "Ice lists no damage relations.");

    Ok(())
}

#[test]
fn test_load_malformed_file_fails() -> Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[names\nrelation_style = ")?;

    let result = Config::load_with_path(Some(path.to_string_lossy().to_string()));
    assert!(result.is_err());
    Ok(())
}

#[test]
fn test_unknown_name_style_fails() -> Result<()> {
    let result: std::result::Result<Config, _> = toml::from_str("[names]\nlist_style = \"shouty\"\n");
    assert!(result.is_err());
    Ok(())
}

#[test]
fn test_catalog_path_is_loaded() -> Result<()> {
    let dir = tempfile::TempDir::new()?;
    let catalog_path = dir.path().join("types.json");
    fs::write(
        &catalog_path,
        r##"{"ice": {"color": "#000", "icon": "i.png", "description": "Cold.", "badge_class": "bgCold"}}"##,
    )?;

    let config = Config {
        catalog: Some(catalog_path.to_string_lossy().to_string()),
        ..Default::default()
    };
    let catalog = config.type_catalog()?;
    assert_eq!(catalog.badge_class("ice"), "bgCold");
    assert_eq!(catalog.badge_class("fire"), "bgGray");
    Ok(())
}
