use anyhow::{Context, Result};
use tracing::info;

use crate::page::{render_generation_page, GenerationPage};
use crate::render::OutputFormat;
use crate::source::ResourceSource;

pub fn run(name: &str, data_dir: &str, format: OutputFormat, config: Option<String>) -> Result<()> {
    println!("{}", render(name, data_dir, format, config)?);
    Ok(())
}

pub fn render(
    name: &str,
    data_dir: &str,
    format: OutputFormat,
    config: Option<String>,
) -> Result<String> {
    let (config, source) = super::setup(data_dir, config)?;

    let resource = source
        .fetch_generation(&name.to_lowercase())
        .with_context(|| format!("Failed to load generation '{}'", name))?;
    info!(
        "Composing generation page for {} ({} species, {} types)",
        resource.name,
        resource.pokemon_species.len(),
        resource.types.len()
    );

    let page = GenerationPage::compose(&resource, &config);
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(&page)?);
    }
    Ok(render_generation_page(format.renderer().as_ref(), &page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_render_text() {
        let dir = tempfile::TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("generation")).unwrap();
        fs::write(
            dir.path().join("generation").join("generation-i.json"),
            r#"{
                "name": "generation-i",
                "main_region": {"name": "kanto", "url": ""},
                "types": [{"name": "normal", "url": ""}, {"name": "fire", "url": ""}, {"name": "water", "url": ""}],
                "pokemon_species": [{"name": "bulbasaur", "url": ""}],
                "moves": [{"name": "pound", "url": ""}]
            }"#,
        )
        .unwrap();

        let out = render("generation-i", dir.path().to_str().unwrap(), OutputFormat::Text, None).unwrap();
        assert!(out.starts_with("Generation I (generation)"));
        assert!(out.contains("1 Pokémon\n3 Pokémon Types\n1 Moves\n0 Abilities"));
        assert!(out.contains("The main region for Generation I is kanto."));
        assert!(out.contains("Generation I introduced the following pokémon types: Normal, Fire and Water"));
        assert!(out.contains("Generation I is not associated with any specific version groups"));
    }

    #[test]
    fn test_missing_generation_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = render("generation-x", dir.path().to_str().unwrap(), OutputFormat::Text, None);
        assert!(result.is_err());
    }
}
