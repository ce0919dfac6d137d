//! CLI Adapter.

mod config;
mod generate;
mod registries;
mod validate;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::adapters::{EmbeddedCatalog, FilesystemConfigStore};
use crate::app::AppContext;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "hagicode-compose")]
#[command(version)]
#[command(about = "Generate Docker Compose manifests for Hagicode deployments", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the docker-compose manifest
    #[clap(visible_alias = "g")]
    Generate {
        /// Configuration file (toml, json, yml or yaml); defaults to the stored configuration
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Locale for header comments (zh-CN, en-US)
        #[arg(short, long, default_value = "zh-CN")]
        locale: String,
        /// Generation time in RFC 3339; defaults to now
        #[arg(long)]
        timestamp: Option<String>,
        /// Write the manifest to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check a configuration and list its errors
    #[clap(visible_alias = "v")]
    Validate {
        /// Configuration file (toml, json, yml or yaml); defaults to the stored configuration
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Inspect or edit the stored configuration
    #[clap(visible_alias = "c")]
    Config {
        #[command(subcommand)]
        command: config::ConfigCommands,
    },
    /// List supported image registries
    #[clap(visible_alias = "r")]
    Registries,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

type CliContext = AppContext<FilesystemConfigStore, EmbeddedCatalog>;

fn context() -> Result<CliContext, AppError> {
    Ok(AppContext::new(FilesystemConfigStore::new_default()?, EmbeddedCatalog))
}

/// Logs go to stderr so stdout only carries command output.
fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("hagicode_compose=warn"));

    fmt().with_env_filter(filter).with_target(false).with_writer(std::io::stderr).init();
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Generate { config, locale, timestamp, output } => {
            generate::run_generate(config, &locale, timestamp.as_deref(), output).map(|_| 0)
        }
        Commands::Validate { config, format } => validate::run_validate(config, format),
        Commands::Config { command } => config::run_config(command).map(|_| 0),
        Commands::Registries => registries::run_registries().map(|_| 0),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
