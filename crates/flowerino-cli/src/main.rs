mod commands;
mod host;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "flowerino",
    version,
    about = "Keep a project in sync with its Flowerino repository",
    long_about = "Flowerino links a local project to a repository on the Flower Platform\n\
        hub and regenerates the project's files from it on demand.\n\n\
        Quick start:\n  \
        flowerino link\n  \
        flowerino sync\n  \
        flowerino open diagrams"
)]
struct Cli {
    /// Enable verbose logging (set log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Override the hub server URL for this invocation
    #[arg(long, global = true)]
    server_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// (Re)generate the project from its linked Flowerino repository
    ///
    /// Prompts for a repository link when the project has none, fetches the
    /// generated files from the hub, and reconciles them into the project
    /// folder. Runs the plugin version check first unless suppressed.
    ///
    /// Example: flowerino sync --path /path/to/sketch
    Sync {
        /// Path to the project folder (default: current directory)
        #[arg(short, long)]
        path: Option<String>,

        /// Skip the startup plugin version check
        #[arg(long)]
        no_version_check: bool,
    },
    /// Add or edit the link to a Flowerino repository
    ///
    /// Example: flowerino link --path /path/to/sketch
    Link {
        /// Path to the project folder (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
    },
    /// Check required libraries for the linked repository
    Libs {
        /// Path to the project folder (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
    },
    /// Open hub pages in the external browser
    Open {
        #[command(subcommand)]
        target: OpenTarget,
    },
}

#[derive(Subcommand)]
enum OpenTarget {
    /// Diagram editor for the project's linked repository
    Diagrams {
        /// Path to the project folder (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
    },
    /// Repository browser on the hub
    Repositories,
    /// Flowerino web site
    Website,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let server_url = commands::effective_server_url(cli.server_url.as_deref())?;

    match cli.command {
        Commands::Sync {
            path,
            no_version_check,
        } => {
            let path = resolve_path(path)?;
            commands::sync::run(&path, &server_url, no_version_check)?;
        }
        Commands::Link { path } => {
            let path = resolve_path(path)?;
            commands::link::run(&path)?;
        }
        Commands::Libs { path } => {
            let path = resolve_path(path)?;
            commands::libraries::run(&path)?;
        }
        Commands::Open { target } => match target {
            OpenTarget::Diagrams { path } => {
                let path = resolve_path(path)?;
                commands::open::diagrams(&path, &server_url)?;
            }
            OpenTarget::Repositories => commands::open::repositories(&server_url)?,
            OpenTarget::Website => commands::open::website()?,
        },
    }

    Ok(())
}

fn resolve_path(path: Option<String>) -> anyhow::Result<std::path::PathBuf> {
    match path {
        Some(p) => Ok(std::path::PathBuf::from(p)),
        None => Ok(std::env::current_dir()?),
    }
}
