use anyhow::Result;
use async_trait::async_trait;

use crate::config::Settings;
use crate::gateway::openai::OpenAiClient;

/// A single text-generation task for the external model.
pub struct GenerationTask<'a> {
    pub system: &'a str,
    pub prompt: &'a str,
}

/// One round-trip to an external text-generation model.
///
/// The credential travels with each call and is never stored by
/// implementations; the backend decides whether it is actually authorized.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn generate(&self, credential: &str, task: GenerationTask<'_>) -> Result<String>;
}

/// Build a generation backend from runtime settings.
pub fn build_backend(settings: &Settings) -> Result<Box<dyn GenerationBackend>> {
    match settings.llm.provider.to_lowercase().as_str() {
        "openai" => Ok(Box::new(OpenAiClient::from_settings(settings)?)),
        other => anyhow::bail!(
            "Unsupported llm.provider '{}'. Supported providers: openai",
            other
        ),
    }
}
