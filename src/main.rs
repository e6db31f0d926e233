//! qexpand: Command-line interface for search query expansion

use anyhow::Result;
use clap::{Parser, Subcommand};
use qexpand::config::{app_config::AppConfig, path_resolver};
use qexpand::expand::{preprocess_search_text, QueryExpander};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Load the config from an explicit path, or fall back to the standard
/// resolution order (QEXPAND_CONFIG, then the XDG config path)
fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    let config = match config_path {
        Some(path) => {
            let resolved = path_resolver::resolve_path(path)?;
            AppConfig::from_file(&resolved)?
        }
        None => AppConfig::load()?,
    };
    config.validate()?;
    Ok(config)
}

/// Print a variant list as numbered text or a JSON array
fn print_variants(variants: &[String], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(variants)?);
    } else {
        for (i, variant) in variants.iter().enumerate() {
            println!("{}. {}", i + 1, variant);
        }
    }
    Ok(())
}

/// qexpand: query expansion for search retrieval pipelines
#[derive(Parser)]
#[command(name = "qexpand")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize qexpand configuration
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
    /// Expand a query into candidate search strings
    Expand {
        /// The raw user query
        query: String,

        /// Path to a config file (default: QEXPAND_CONFIG or the XDG config path)
        #[arg(short, long)]
        config: Option<String>,

        /// Output as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Show the lexical preprocessing variants of a text fragment
    Preprocess {
        /// The text fragment
        text: String,

        /// Output as a JSON array
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging to stderr so stdout stays machine-readable
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Init { force } => {
            let config_dir = path_resolver::get_config_dir();
            let config_path = config_dir.join("config.toml");

            eprintln!("Initializing qexpand configuration...");
            eprintln!("Config directory: {}", config_dir.display());

            if !config_dir.exists() {
                std::fs::create_dir_all(&config_dir)?;
                eprintln!("Created config directory");
            }

            if config_path.exists() && !force {
                eprintln!(
                    "Configuration file already exists: {}",
                    config_path.display()
                );
                eprintln!("Use --force to overwrite");
                return Ok(());
            }

            let default_config = AppConfig::default();
            let toml_content = default_config.to_toml()?;
            std::fs::write(&config_path, &toml_content)?;

            eprintln!("Created configuration file: {}", config_path.display());
            eprintln!("\nEdit {} to customize the synonym table.", config_path.display());

            Ok(())
        }
        Commands::Expand {
            query,
            config,
            json,
        } => {
            let config = load_config(config.as_deref())?;
            let expander = QueryExpander::new(config.synonyms().clone());

            let queries = expander.expand(&query);
            tracing::info!(count = queries.len(), "expanded query");
            print_variants(&queries, json)
        }
        Commands::Preprocess { text, json } => {
            let variants = preprocess_search_text(&text);
            print_variants(&variants, json)
        }
    }
}
