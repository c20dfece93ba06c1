use anyhow::{Context, Result};
use tracing::info;

use crate::page::{render_pokedex_page, PokedexPage};
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
        .fetch_pokedex(&name.to_lowercase())
        .with_context(|| format!("Failed to load pokedex '{}'", name))?;
    info!(
        "Composing pokedex page for {} ({} entries)",
        resource.name,
        resource.pokemon_entries.len()
    );

    let page = PokedexPage::compose(&resource, &config);
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(&page)?);
    }
    Ok(render_pokedex_page(format.renderer().as_ref(), &page))
}
