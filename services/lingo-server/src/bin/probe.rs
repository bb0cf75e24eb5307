//! lingo-probe - check which Gemini models the configured API key can use.

use anyhow::Result;
use clap::{Parser, Subcommand};
use lingo_common::config::Config;
use lingo_common::logging::init_logging;
use lingo_common::Error;
use lingo_server::provider::DEFAULT_PROBE_MODELS;
use lingo_server::GeminiProvider;

const API_KEY_PAGE: &str = "https://makersuite.google.com/app/apikey";

#[derive(Parser, Debug)]
#[command(name = "lingo-probe")]
#[command(version)]
#[command(about = "Diagnose Gemini model access for lingo-server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the Gemini models visible to the API key
    Models,

    /// Send a short prompt to each model and report the first that answers
    Probe {
        /// Models to try, in order (defaults to a built-in list)
        models: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load_with_env()?;
    init_logging(
        &config.observability.log_level,
        &config.observability.log_format,
    );
    for warning in &config.override_warnings {
        tracing::warn!("{}", warning);
    }

    let Some(api_key) = config.model.credential() else {
        println!("No API key found. Set GEMINI_API_KEY in the environment or in a .env file.");
        return Err(Error::Config("missing GEMINI_API_KEY".into()).into());
    };

    let provider = GeminiProvider::from_config(api_key, &config.model)
        .map_err(|e| Error::External(e.to_string()))?;

    match cli.command {
        Commands::Models => {
            let models = provider.list_models().await.map_err(|e| {
                println!("The API rejected the request. Check the key at {}", API_KEY_PAGE);
                Error::External(e.to_string())
            })?;

            if models.is_empty() {
                println!("No Gemini models available for this key.");
            } else {
                println!("Available Gemini models:");
                for model in &models {
                    println!("  - {}", model);
                }
            }
        }
        Commands::Probe { models } => {
            let candidates: Vec<String> = if models.is_empty() {
                DEFAULT_PROBE_MODELS.iter().map(|m| m.to_string()).collect()
            } else {
                models
            };

            let working = provider
                .probe(&candidates)
                .await
                .map_err(|e| Error::External(e.to_string()))?;

            println!("Model {} is working. Set LINGO_MODEL={} to use it.", working, working);
        }
    }

    Ok(())
}
