//! Text-generation gateway
//!
//! The one piece of this tool that talks to the outside world: given a
//! transcript and a task, produce text through an external model when a
//! plausible API key is supplied, and degrade to canned responses otherwise.
//! Every path returns usable text; callers never see an error.

mod client;
mod fallback;
mod openai;
mod prompts;

pub use client::{build_backend, GenerationBackend, GenerationTask};
pub use fallback::{
    FallbackTable, ANSWER_FAILURE_FALLBACK, ANSWER_FALLBACK_DELAY, MOCK_ANSWERS, MOCK_SUMMARY,
    SUMMARY_FALLBACK_DELAY,
};
pub use openai::OpenAiClient;
pub use prompts::{
    build_answer_prompt, build_summary_prompt, ANSWER_SYSTEM_PROMPT, SUMMARY_SYSTEM_PROMPT,
};

use crate::config::Settings;
use anyhow::Result;

/// Why a response was served from the fallback tables instead of the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegradeReason {
    /// The credential was absent or not even shaped like an API key.
    MissingCredential,
    /// A real model call was attempted and failed.
    BackendFailure,
}

/// Outcome of a gateway call.
///
/// `text()` always yields something printable; the variant records whether
/// the model actually produced it, so tests and diagnostics can tell real
/// output from canned output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generation {
    /// Verbatim model output.
    Model(String),
    /// Canned text served in place of a model response.
    Degraded { text: String, reason: DegradeReason },
}

impl Generation {
    fn degraded(text: &str, reason: DegradeReason) -> Self {
        Self::Degraded {
            text: text.to_string(),
            reason,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Model(text) => text,
            Self::Degraded { text, .. } => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Model(text) => text,
            Self::Degraded { text, .. } => text,
        }
    }

    pub fn degrade_reason(&self) -> Option<DegradeReason> {
        match self {
            Self::Model(_) => None,
            Self::Degraded { reason, .. } => Some(*reason),
        }
    }
}

/// Syntactic plausibility check only. A key that passes may still be
/// rejected by the backend, which counts as a backend failure.
fn credential_is_plausible(credential: &str) -> bool {
    credential.starts_with("sk-")
}

/// Mediates between callers and the external text-generation backend.
///
/// Holds no per-request state: the credential travels with each call, the
/// fallback table is a process-wide constant, and nothing is cached or
/// retried.
pub struct Gateway {
    backend: Box<dyn GenerationBackend>,
    answers: &'static FallbackTable,
}

impl Gateway {
    pub fn new(backend: Box<dyn GenerationBackend>) -> Self {
        Self::with_fallbacks(backend, &fallback::MOCK_ANSWERS)
    }

    /// Use a specific fallback table instead of the built-in one.
    pub fn with_fallbacks(
        backend: Box<dyn GenerationBackend>,
        answers: &'static FallbackTable,
    ) -> Self {
        Self { backend, answers }
    }

    /// Build a gateway with the backend named in the settings.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self::new(build_backend(settings)?))
    }

    /// Summarize a transcript.
    ///
    /// Without a plausible credential this waits briefly and serves the
    /// canned summary; a failed model call serves the same canned summary
    /// without the wait.
    pub async fn summarize(&self, transcript: &str, credential: &str) -> Generation {
        if credential_is_plausible(credential) {
            let prompt = build_summary_prompt(transcript);
            match self
                .backend
                .generate(
                    credential,
                    GenerationTask {
                        system: SUMMARY_SYSTEM_PROMPT,
                        prompt: &prompt,
                    },
                )
                .await
            {
                Ok(text) => return Generation::Model(text),
                Err(err) => {
                    tracing::error!("Error generating summary: {:#}", err);
                    return Generation::degraded(MOCK_SUMMARY, DegradeReason::BackendFailure);
                }
            }
        }

        tokio::time::sleep(SUMMARY_FALLBACK_DELAY).await;
        Generation::degraded(MOCK_SUMMARY, DegradeReason::MissingCredential)
    }

    /// Answer a question about a transcript.
    ///
    /// Empty questions are the caller's problem; they pass through like any
    /// other. Without a plausible credential the answer comes from the
    /// fallback table; a failed model call gets the generic apology instead,
    /// so the two degraded paths stay distinguishable.
    pub async fn answer(&self, transcript: &str, question: &str, credential: &str) -> Generation {
        if credential_is_plausible(credential) {
            let prompt = build_answer_prompt(question, transcript);
            match self
                .backend
                .generate(
                    credential,
                    GenerationTask {
                        system: ANSWER_SYSTEM_PROMPT,
                        prompt: &prompt,
                    },
                )
                .await
            {
                Ok(text) => return Generation::Model(text),
                Err(err) => {
                    tracing::error!("Error answering question: {:#}", err);
                    return Generation::degraded(
                        ANSWER_FAILURE_FALLBACK,
                        DegradeReason::BackendFailure,
                    );
                }
            }
        }

        tokio::time::sleep(ANSWER_FALLBACK_DELAY).await;
        Generation::degraded(
            self.answers.lookup(question),
            DegradeReason::MissingCredential,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct EchoBackend;

    #[async_trait]
    impl GenerationBackend for EchoBackend {
        async fn generate(&self, _credential: &str, task: GenerationTask<'_>) -> Result<String> {
            Ok(format!("echo: {}", task.prompt))
        }
    }

    struct FailingBackend;

    #[async_trait]
    impl GenerationBackend for FailingBackend {
        async fn generate(&self, _credential: &str, _task: GenerationTask<'_>) -> Result<String> {
            anyhow::bail!("503 from upstream")
        }
    }

    #[tokio::test(start_paused = true)]
    async fn empty_credential_serves_canned_summary() {
        let gateway = Gateway::new(Box::new(EchoBackend));
        let generation = gateway.summarize("any transcript", "").await;
        assert_eq!(generation.text(), MOCK_SUMMARY);
        assert_eq!(
            generation.degrade_reason(),
            Some(DegradeReason::MissingCredential)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn wrong_prefix_is_treated_as_missing() {
        let gateway = Gateway::new(Box::new(EchoBackend));
        let generation = gateway.summarize("any transcript", "badkey").await;
        assert_eq!(generation.text(), MOCK_SUMMARY);
    }

    #[tokio::test]
    async fn plausible_credential_returns_model_output_verbatim() {
        let gateway = Gateway::new(Box::new(EchoBackend));
        let generation = gateway.summarize("the transcript", "sk-test").await;
        assert!(matches!(generation, Generation::Model(_)));
        assert!(generation.text().contains("the transcript"));
    }

    #[tokio::test(start_paused = true)]
    async fn answer_without_credential_uses_fallback_table() {
        let gateway = Gateway::new(Box::new(EchoBackend));
        let generation = gateway.answer("", "What is destructuring?", "").await;
        assert!(generation.text().starts_with("Destructuring is a JavaScript syntax"));
    }

    #[tokio::test]
    async fn backend_failure_on_summary_serves_canned_summary() {
        let gateway = Gateway::new(Box::new(FailingBackend));
        let generation = gateway.summarize("anything", "sk-valid-format").await;
        assert_eq!(generation.text(), MOCK_SUMMARY);
        assert_eq!(
            generation.degrade_reason(),
            Some(DegradeReason::BackendFailure)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn custom_fallback_table_can_be_injected() {
        static SUPPORT_ANSWERS: FallbackTable =
            FallbackTable::new(&[("refund", "See the refund policy.")], "Ask support.");

        let gateway = Gateway::with_fallbacks(Box::new(EchoBackend), &SUPPORT_ANSWERS);
        let generation = gateway.answer("", "How do I get a REFUND?", "").await;
        assert_eq!(generation.text(), "See the refund policy.");

        let generation = gateway.answer("", "unrelated", "").await;
        assert_eq!(generation.text(), "Ask support.");
    }

    #[tokio::test]
    async fn backend_failure_on_answer_serves_generic_apology() {
        let gateway = Gateway::new(Box::new(FailingBackend));
        let generation = gateway
            .answer("anything", "What is destructuring?", "sk-valid-format")
            .await;
        assert_eq!(generation.text(), ANSWER_FAILURE_FALLBACK);
        // The failure text is not the table's default entry.
        assert_ne!(generation.text(), MOCK_ANSWERS.default_answer());
    }
}
