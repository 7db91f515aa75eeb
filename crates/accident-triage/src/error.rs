use crate::config::ConfigError;
use crate::generation::GenerationError;
use crate::telemetry::TelemetryError;
use crate::workflows::triage::FilterError;

/// Failures surfaced to the binary layer. Collaborator errors are absent by
/// design: the pipeline recovers from those internally.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("server error: {0}")]
    Server(#[from] axum::Error),
    #[error("directive filter error: {0}")]
    Filter(#[from] FilterError),
    #[error("generation client error: {0}")]
    Generation(#[from] GenerationError),
    #[error("invalid facts payload: {0}")]
    Facts(#[from] serde_json::Error),
}
