use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use pantry::{cli, config, server};

#[derive(Parser)]
#[command(name = "pantry", version, about = "Recipe suggestions from the ingredients you have")]
struct Cli {
    /// Config file (defaults to ~/.pantry/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP API
    Serve,
    /// Interactive ingredient search in the terminal
    Chat,
    /// Run a single search and print the top recipes
    Search {
        /// Ingredients, e.g. "Egg, Onion, Tomato"
        query: String,
    },
    /// Check dataset and model files
    Doctor,
    /// Manage the embedding model
    Model {
        #[command(subcommand)]
        action: ModelAction,
    },
}

#[derive(Subcommand)]
enum ModelAction {
    /// Download the embedding model to ~/.pantry/models/
    Download,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => config::PantryConfig::load_from(path)?,
        None => config::PantryConfig::load()?,
    };

    // Log to stderr so stdout carries only command output.
    let filter = EnvFilter::try_new(&config.server.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    config.log_origin();

    match cli.command {
        Command::Serve => server::serve(config).await?,
        Command::Chat => cli::chat::chat(&config)?,
        Command::Search { query } => cli::search::search(&config, &query)?,
        Command::Doctor => cli::doctor::doctor(&config)?,
        Command::Model { action } => match action {
            ModelAction::Download => cli::model_download(&config.embedding).await?,
        },
    }

    Ok(())
}
