use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod browse;
pub mod search;

use crate::core::AppConfig;

#[derive(Subcommand)]
enum Command {
    /// Search once and print the matching books
    Search {
        /// Title or author to search for
        query: String,

        /// Open the detail page of result N (1-based) in a browser
        #[arg(long)]
        open: Option<usize>,

        /// Percent-encode the query instead of sending it as typed
        #[arg(long, action, default_value = "false")]
        escape: bool,

        /// Print results as JSON
        #[arg(long, action, default_value = "false")]
        json: bool,
    },
    /// Start an interactive search session
    Browse {
        /// Re-run the last query from the previous session
        #[arg(long, action, default_value = "false")]
        resume: bool,

        /// Percent-encode queries instead of sending them as typed
        #[arg(long, action, default_value = "false")]
        escape: bool,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Logs go to stderr so results on stdout stay clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = AppConfig::default();

    match args.command {
        Some(Command::Search {
            query,
            open,
            escape,
            json,
        }) => {
            config.escape_query |= escape;
            search::run(config, query, open, json).await?;
        }
        Some(Command::Browse { resume, escape }) => {
            config.escape_query |= escape;
            browse::run(config, resume).await?;
        }
        None => {}
    }

    Ok(())
}
