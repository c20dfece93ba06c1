use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pokeprose::cli;
use pokeprose::render::OutputFormat;

#[derive(Parser)]
#[command(name = "pokeprose", version)]
#[command(about = "Render linked prose for Pokémon types, Pokédexes, regions and generations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Describe a type: damage relations, past relations, game indices, moves
    Type {
        /// Type name (e.g. "ice")
        name: String,

        /// Directory holding PokeAPI JSON dumps as <kind>/<name>.json
        #[arg(long, default_value = ".")]
        data_dir: String,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Path to config file (defaults to ./pokeprose.toml or ~/.config/pokeprose/config.toml)
        #[arg(long)]
        config: Option<String>,
    },
    /// Describe a Pokédex: region, game versions and numbered entries
    Pokedex {
        /// Pokédex name (e.g. "kanto")
        name: String,

        /// Directory holding PokeAPI JSON dumps as <kind>/<name>.json
        #[arg(long, default_value = ".")]
        data_dir: String,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Path to config file (defaults to ./pokeprose.toml or ~/.config/pokeprose/config.toml)
        #[arg(long)]
        config: Option<String>,
    },
    /// Describe a region: main generation, game versions and Pokédexes
    Region {
        /// Region name (e.g. "kanto")
        name: String,

        /// Directory holding PokeAPI JSON dumps as <kind>/<name>.json
        #[arg(long, default_value = ".")]
        data_dir: String,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Path to config file (defaults to ./pokeprose.toml or ~/.config/pokeprose/config.toml)
        #[arg(long)]
        config: Option<String>,
    },
    /// Describe a generation: main region, game versions and what it introduced
    Generation {
        /// Generation name (e.g. "generation-i")
        name: String,

        /// Directory holding PokeAPI JSON dumps as <kind>/<name>.json
        #[arg(long, default_value = ".")]
        data_dir: String,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Path to config file (defaults to ./pokeprose.toml or ~/.config/pokeprose/config.toml)
        #[arg(long)]
        config: Option<String>,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the rendered page
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Type {
            name,
            data_dir,
            format,
            config,
        } => cli::type_page::run(&name, &data_dir, format, config)?,
        Commands::Pokedex {
            name,
            data_dir,
            format,
            config,
        } => cli::pokedex::run(&name, &data_dir, format, config)?,
        Commands::Region {
            name,
            data_dir,
            format,
            config,
        } => cli::region::run(&name, &data_dir, format, config)?,
        Commands::Generation {
            name,
            data_dir,
            format,
            config,
        } => cli::generation::run(&name, &data_dir, format, config)?,
    }

    Ok(())
}
