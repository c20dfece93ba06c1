use anyhow::{Context, Result};
use tracing::info;

use crate::page::{render_region_page, RegionPage};
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
        .fetch_region(&name.to_lowercase())
        .with_context(|| format!("Failed to load region '{}'", name))?;
    info!(
        "Composing region page for {} ({} pokedexes)",
        resource.name,
        resource.pokedexes.len()
    );

    let page = RegionPage::compose(&resource, &config);
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(&page)?);
    }
    Ok(render_region_page(format.renderer().as_ref(), &page))
}
