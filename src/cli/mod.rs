pub mod generation;
pub mod pokedex;
pub mod region;
pub mod type_page;

use anyhow::Result;

use crate::config::Config;
use crate::source::DirectorySource;

/// Config and data source shared by every subcommand.
pub(crate) fn setup(data_dir: &str, config: Option<String>) -> Result<(Config, DirectorySource)> {
    let config = Config::load_with_path(config)?;
    Ok((config, DirectorySource::new(data_dir)))
}
