//! CLI command implementations

use anyhow::{Context, Result};

use crate::cli::args::ConfigCommand;
use crate::config::Settings;
use crate::gateway::{DegradeReason, Gateway};
use crate::video::{parse_video_url, MockVideoProvider, VideoInfo, VideoProvider};

/// Show metadata for a video
pub async fn show_info(url: &str, json: bool) -> Result<()> {
    let info = fetch_info(url).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("{}", info.title);
    println!();
    println!("Channel:    {}", info.channel);
    println!("Duration:   {}", info.duration_display());
    println!("Views:      {}", format_count(info.views));
    println!("Likes:      {}", format_count(info.likes));
    println!("Published:  {}", info.published.format("%Y-%m-%d"));
    println!("Formats:    {}", info.formats.join(", "));

    Ok(())
}

/// Generate an AI summary of a video's content
pub async fn summarize_video(settings: &Settings, url: &str, api_key: Option<String>) -> Result<()> {
    let info = fetch_info(url).await?;
    let credential = effective_credential(settings, api_key);
    let gateway = Gateway::from_settings(settings)?;

    let generation = gateway.summarize(&info.transcript, &credential).await;
    hint_if_degraded(&generation);

    println!("Summary of {}:", info.title);
    println!();
    println!("{}", generation.into_text());

    Ok(())
}

/// Ask a question about a video's content
pub async fn ask_about_video(
    settings: &Settings,
    url: &str,
    question: &str,
    api_key: Option<String>,
) -> Result<()> {
    let question = question.trim();
    if question.is_empty() {
        anyhow::bail!("Question cannot be empty");
    }

    let info = fetch_info(url).await?;
    let credential = effective_credential(settings, api_key);
    let gateway = Gateway::from_settings(settings)?;

    let generation = gateway.answer(&info.transcript, question, &credential).await;
    hint_if_degraded(&generation);

    println!("{}", generation.into_text());

    Ok(())
}

/// Manage the configuration file
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(settings)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

async fn fetch_info(url: &str) -> Result<VideoInfo> {
    let id = parse_video_url(url)?;
    let provider = MockVideoProvider::new();
    provider
        .fetch(&id)
        .await
        .with_context(|| format!("Failed to fetch info for video {}", id))
}

/// The key given on the command line beats the configured one.
fn effective_credential(settings: &Settings, api_key: Option<String>) -> String {
    api_key.unwrap_or_else(|| settings.llm.api_key.clone())
}

fn hint_if_degraded(generation: &crate::gateway::Generation) {
    match generation.degrade_reason() {
        Some(DegradeReason::MissingCredential) => {
            tracing::warn!(
                "No API key configured; showing built-in demo content. Set llm.api_key or TUBETALK_OPENAI_API_KEY."
            );
        }
        Some(DegradeReason::BackendFailure) => {
            tracing::warn!("The model request failed; showing built-in demo content.");
        }
        None => {}
    }
}

fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_count_groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(87_432), "87,432");
        assert_eq!(format_count(1_245_872), "1,245,872");
    }

    #[test]
    fn cli_flag_overrides_configured_key() {
        let mut settings = Settings::default();
        settings.llm.api_key = "sk-from-config".to_string();

        let from_flag = effective_credential(&settings, Some("sk-from-flag".to_string()));
        assert_eq!(from_flag, "sk-from-flag");

        let from_config = effective_credential(&settings, None);
        assert_eq!(from_config, "sk-from-config");
    }
}
