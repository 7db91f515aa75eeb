use accident_triage::config::GeneratorConfig;
use accident_triage::error::AppError;
use accident_triage::generation::{NullTextGenerator, OpenAiTextGenerator, TextGenerator};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// OpenAI-compatible backend when a key is configured, otherwise the null
/// generator so the pipeline runs on its templated paths.
pub(crate) fn build_generator(
    config: &GeneratorConfig,
    offline: bool,
) -> Result<Arc<dyn TextGenerator>, AppError> {
    if offline {
        info!("text generation forced offline, templated fallbacks in use");
        return Ok(Arc::new(NullTextGenerator));
    }

    match OpenAiTextGenerator::from_config(config)? {
        Some(generator) => {
            info!(model = %config.model, "text generation enabled");
            Ok(Arc::new(generator))
        }
        None => {
            info!("no generator API key configured, templated fallbacks in use");
            Ok(Arc::new(NullTextGenerator))
        }
    }
}

pub(crate) fn parse_fact_pair(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected key=value, got '{raw}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fact_pairs_split_on_the_first_equals() {
        let (key, value) = parse_fact_pair("notes=bumper=scuffed").expect("pair parses");
        assert_eq!(key, "notes");
        assert_eq!(value, "bumper=scuffed");
    }

    #[test]
    fn fact_pairs_require_a_key() {
        assert!(parse_fact_pair("=yes").is_err());
        assert!(parse_fact_pair("injury").is_err());
    }
}
