mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use stratus_config::Config;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stratusd")]
#[command(about = "Maps service definitions into provisioning models", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file (default: discovered stratus.kdl)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer line-delimited JSON requests on stdin
    Serve,
    /// Validate a definition file
    Validate {
        /// Definition in YAML
        definition: PathBuf,
    },
    /// Show what a payload would create, update and delete
    Plan {
        /// Request payload in JSON
        payload: PathBuf,
        /// Provisioning model of the previous build
        #[arg(short, long)]
        previous: Option<PathBuf>,
    },
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    Ok(match path {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    // stdout carries replies only
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log)),
        )
        .init();

    match cli.command {
        Commands::Serve => commands::serve::handle(&config).await?,
        Commands::Validate { definition } => commands::validate::handle(&definition)?,
        Commands::Plan { payload, previous } => {
            commands::plan::handle(&payload, previous.as_deref())?
        }
    }

    Ok(())
}
