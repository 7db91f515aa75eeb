//! Text-generation collaborator port.
//!
//! The pipeline only ever talks to [`TextGenerator`]; which backend sits
//! behind it (an OpenAI-compatible endpoint, or nothing at all) is decided
//! once, at construction time, by the hosting layer.

mod openai;

pub use openai::OpenAiTextGenerator;

use async_trait::async_trait;

/// Every variant is recoverable: callers treat any of these as "collaborator
/// unavailable" and fall back to their deterministic templates.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("no text generator is configured")]
    Disabled,
    #[error("generation request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("generation backend returned {status}: {body}")]
    Backend {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("generation backend returned no choices")]
    EmptyResponse,
}

/// Narrow contract for the external text-generation collaborator.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, system: &str, user: &str) -> Result<String, GenerationError>;
}

/// Stand-in used when no backend is configured. Every call reports
/// [`GenerationError::Disabled`], which routes callers onto the templated
/// fallback paths.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullTextGenerator;

#[async_trait]
impl TextGenerator for NullTextGenerator {
    async fn generate(&self, _system: &str, _user: &str) -> Result<String, GenerationError> {
        Err(GenerationError::Disabled)
    }
}
