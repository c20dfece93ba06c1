use anyhow::{Context, Result};
use tracing::info;

use crate::page::{render_type_page, TypePage};
use crate::render::OutputFormat;
use crate::source::ResourceSource;

pub fn run(name: &str, data_dir: &str, format: OutputFormat, config: Option<String>) -> Result<()> {
    println!("{}", render(name, data_dir, format, config)?);
    Ok(())
}

/// Load the type record and catalog, compose the page and render it.
pub fn render(
    name: &str,
    data_dir: &str,
    format: OutputFormat,
    config: Option<String>,
) -> Result<String> {
    let (config, source) = super::setup(data_dir, config)?;
    let catalog = config.type_catalog()?;

    let resource = source
        .fetch_type(&name.to_lowercase())
        .with_context(|| format!("Failed to load type '{}'", name))?;
    info!(
        "Composing type page for {} ({} past relation entries)",
        resource.name,
        resource.past_damage_relations.len()
    );

    let page = TypePage::compose(&resource, &catalog, &config);
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(&page)?);
    }
    Ok(render_type_page(format.renderer().as_ref(), &page))
}
