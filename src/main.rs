//! tubetalk - YouTube metadata, AI summaries, and Q&A from the terminal
//!
//! Entry point for the tubetalk CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tubetalk::cli::{Cli, Commands};
use tubetalk::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Completions { shell } => {
            tubetalk::cli::completions::print(shell);
        }
        command => {
            // Load configuration only for runtime commands.
            let settings = Settings::load()?;

            // Execute command
            match command {
                Commands::Info { url, json } => {
                    tubetalk::cli::commands::show_info(&url, json).await?;
                }
                Commands::Summarize { url, api_key } => {
                    tubetalk::cli::commands::summarize_video(&settings, &url, api_key).await?;
                }
                Commands::Ask {
                    url,
                    question,
                    api_key,
                } => {
                    tubetalk::cli::commands::ask_about_video(&settings, &url, &question, api_key)
                        .await?;
                }
                Commands::Config(config_cmd) => {
                    tubetalk::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}
