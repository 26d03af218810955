mod cli;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "guid_words=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    let dict = cli::load_dictionary(cli.dictionary.as_ref()).with_context(|| match &cli.dictionary {
        Some(path) => format!("Failed to load dictionary from {}", path.display()),
        None => "Failed to load built-in dictionary".to_string(),
    })?;

    match cli.command {
        Commands::Generate { count } => {
            cli::generate(&dict, count, cli.format)?;
        }
        Commands::Encode { hex } => {
            cli::encode(&dict, &hex, cli.format)?;
        }
        Commands::Decode { words } => {
            cli::decode(&dict, &words, cli.format)?;
        }
        Commands::Hash { input, algorithm } => {
            cli::hash(&dict, &input, &algorithm, cli.format)?;
        }
        Commands::Words => {
            cli::list_words(&dict, cli.format)?;
        }
    }

    Ok(())
}
