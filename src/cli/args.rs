//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// tubetalk - YouTube metadata, AI summaries, and Q&A from the terminal
#[derive(Parser, Debug)]
#[command(name = "tubetalk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show metadata for a video
    Info {
        /// YouTube video URL
        url: String,

        /// Print machine-readable JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Generate an AI summary of a video's content
    Summarize {
        /// YouTube video URL
        url: String,

        /// API key for this invocation (overrides config and environment)
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Ask a question about a video's content
    Ask {
        /// YouTube video URL
        url: String,

        /// The question to ask
        question: String,

        /// API key for this invocation (overrides config and environment)
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
