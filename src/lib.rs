//! tubetalk - A CLI companion for YouTube videos
//!
//! Paste a video URL, look at its metadata, and talk to an AI assistant
//! about the content.

pub mod cli;
pub mod config;
pub mod gateway;
pub mod video;

use thiserror::Error;

/// Main error type for tubetalk
#[derive(Error, Debug)]
pub enum TubetalkError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not a recognizable YouTube URL: {0}")]
    InvalidUrl(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, TubetalkError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "tubetalk";
