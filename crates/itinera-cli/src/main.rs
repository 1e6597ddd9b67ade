mod config;
mod lookup_cmd;
mod render_cmd;

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use itinera_core::Assembler;
use itinera_model::Country;

use config::{ConfigFile, ItineraConfig};
use render_cmd::RenderOptions;

#[derive(Parser)]
#[command(name = "itinera", about = "Turn safari proposals into presentation documents")]
struct Cli {
    /// Config file (overrides ITINERA_CONFIG env var)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default itinera config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Render a proposal JSON file into a presentation document
    Render {
        /// Path to the hydrated proposal JSON
        proposal: PathBuf,
        /// JSON map of park page id to featured image URL
        #[arg(long)]
        pages: Option<PathBuf>,
        /// Output file path (defaults to stdout)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Date of day one when the proposal has no start date (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,
        /// Emit single-line JSON
        #[arg(long)]
        compact: bool,
    },
    /// Print the country a destination is classified as
    Infer {
        /// Free-text destination, e.g. "Serengeti"
        text: String,
    },
    /// Look up gazetteer coordinates
    Lookup {
        #[command(subcommand)]
        command: LookupCommands,
    },
}

#[derive(Subcommand)]
pub enum LookupCommands {
    /// Resolve a city or town
    City {
        /// City name or alias
        name: String,
    },
    /// Resolve a national park
    Park {
        /// Park name or alias
        name: String,
        /// Country whose capital is used when the park is unknown
        #[arg(long)]
        country: Option<Country>,
    },
}

/// Execute the `itinera init` command: write config file.
fn cmd_init(cli_config: Option<&Path>, force: bool) -> anyhow::Result<()> {
    let (path, _) = config::locate_config(cli_config);

    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let cfg = ConfigFile::default();
    config::save_config(&path, &cfg)?;

    println!("Config written to {}", path.display());
    println!("  render.currency = {}", cfg.render.currency);
    println!("  render.guest_label = {}", cfg.render.guest_label);
    println!("  render.important_notes = {} notes", cfg.render.important_notes.len());

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.as_deref();
    let assembler = || -> anyhow::Result<Assembler> {
        ItineraConfig::resolve(config_path)?.assembler()
    };

    match cli.command {
        Commands::Init { force } => {
            cmd_init(config_path, force)?;
        }
        Commands::Render {
            proposal,
            pages,
            output,
            today,
            compact,
        } => {
            let options = RenderOptions {
                proposal,
                pages,
                output,
                today,
                compact,
            };
            render_cmd::run_render(assembler()?, options).await?;
        }
        Commands::Infer { text } => {
            println!("{}", lookup_cmd::infer_line(&assembler()?, &text));
        }
        Commands::Lookup { command } => match command {
            LookupCommands::City { name } => {
                println!("{}", lookup_cmd::city_line(&assembler()?, &name)?);
            }
            LookupCommands::Park { name, country } => {
                println!("{}", lookup_cmd::park_line(&assembler()?, &name, country));
            }
        },
    }

    Ok(())
}
