use std::path::PathBuf;

use clap::{Parser, Subcommand};
use leadchat::Result;
use leadchat::commands::{ask, index_content, search, show_config, show_status};
use leadchat::config::{Config, get_config_dir};

#[derive(Parser)]
#[command(name = "leadchat")]
#[command(about = "Retrieval-augmented lead qualification chat engine")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the resolved configuration
    Config,
    /// Index a JSON seed file of content entries
    Index {
        /// Path to the seed file (JSON array of {title, body, url, metadata})
        file: PathBuf,
    },
    /// Run one chat turn and print the reply with suggested actions
    Ask {
        /// The user message
        message: String,
        /// Session identifier; generated when omitted
        #[arg(long)]
        session: Option<String>,
    },
    /// Run a similarity search against the document store
    Search {
        /// The search query
        query: String,
        /// Maximum number of results
        #[arg(long, default_value_t = 5)]
        limit: usize,
    },
    /// Show document store status
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load(get_config_dir().map_err(anyhow::Error::from)?)?;

    match cli.command {
        Commands::Config => {
            show_config(&config)?;
        }
        Commands::Index { file } => {
            index_content(&config, &file).await?;
        }
        Commands::Ask { message, session } => {
            ask(&config, &message, session).await?;
        }
        Commands::Search { query, limit } => {
            search(&config, &query, limit).await?;
        }
        Commands::Status => {
            show_status(&config).await?;
        }
    }

    Ok(())
}
