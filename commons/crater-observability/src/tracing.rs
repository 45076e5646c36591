use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt,
};

#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub service_name: String,
    pub log_level: String,
    pub json_format: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            service_name: "crater-service".to_string(),
            log_level: "info".to_string(),
            json_format: false,
        }
    }
}

impl TracingConfig {
    pub fn new(service_name: &str, log_level: &str, json_format: bool) -> Self {
        Self {
            service_name: service_name.to_string(),
            log_level: log_level.to_string(),
            json_format,
        }
    }

    /// Picks the output format from a `LOG_FORMAT`-style value.
    ///
    /// `json`/`structured` select JSON; anything else, including no value,
    /// selects plain text.
    pub fn with_log_format(mut self, log_format: Option<&str>) -> Self {
        self.json_format = log_format
            .map(|s| s.to_ascii_lowercase())
            .is_some_and(|v| v == "json" || v == "structured");
        self
    }
}

pub fn setup_tracing(config: TracingConfig) -> Result<(), TracingError> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_file(true)
        .with_line_number(true);

    let fmt_layer = if config.json_format {
        fmt_layer.json().boxed()
    } else {
        fmt_layer.boxed()
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| TracingError::Filter(e.to_string()))?;

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| TracingError::Setup(e.to_string()))?;

    ::tracing::debug!(service = %config.service_name, "tracing initialized");
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Tracing setup error: {0}")]
    Setup(String),

    #[error("Invalid log filter: {0}")]
    Filter(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_selection() {
        let base = TracingConfig::new("svc", "info", false);
        assert!(base.clone().with_log_format(Some("JSON")).json_format);
        assert!(base.clone().with_log_format(Some("structured")).json_format);
        assert!(!base.clone().with_log_format(Some("pretty")).json_format);
        assert!(!base.clone().with_log_format(Some("text")).json_format);
        assert!(!base.with_log_format(None).json_format);
    }
}
