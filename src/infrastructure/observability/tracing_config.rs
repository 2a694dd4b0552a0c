use crate::presentation::config::{Environment, Settings};

const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: Environment,
    pub json_format: bool,
}

impl TracingConfig {
    /// JSON output is on when either `logging.json_format` or `LOG_FORMAT=json` asks for it.
    pub fn from_settings(environment: Environment, settings: &Settings) -> Self {
        Self {
            environment,
            json_format: settings.logging.json_format || log_format_is_json(),
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Local,
            json_format: log_format_is_json(),
        }
    }
}

fn log_format_is_json() -> bool {
    std::env::var(LOG_FORMAT_VAR)
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}
