use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
    #[error("delay range is inverted: min {min_ms}ms > max {max_ms}ms")]
    InvertedDelayRange { min_ms: u64, max_ms: u64 },
}

/// Runtime configuration for the crawler, sourced from environment variables.
///
/// All keys have defaults; an empty environment yields a working config.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Lower bound of the politeness pause inserted after every fetch.
    pub delay_min_ms: u64,
    /// Upper bound of the politeness pause.
    pub delay_max_ms: u64,
    pub log_level: String,
}

/// Load configuration from the process environment.
///
/// Calls `dotenvy::dotenv().ok()` first so a local `.env` file is honored.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable has an unparseable value or the
/// delay range is inverted.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_config(|key| std::env::var(key))
}

/// Build configuration from the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a plain
/// `HashMap` lookup.
fn build_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let request_timeout_secs = parse_u64("UAVPARTS_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("UAVPARTS_USER_AGENT", "uavparts/0.1 (component-index)");
    let delay_min_ms = parse_u64("UAVPARTS_DELAY_MIN_MS", "1000")?;
    let delay_max_ms = parse_u64("UAVPARTS_DELAY_MAX_MS", "4000")?;
    let log_level = or_default("UAVPARTS_LOG_LEVEL", "info");

    if delay_min_ms > delay_max_ms {
        return Err(ConfigError::InvertedDelayRange {
            min_ms: delay_min_ms,
            max_ms: delay_max_ms,
        });
    }

    Ok(AppConfig {
        request_timeout_secs,
        user_agent,
        delay_min_ms,
        delay_max_ms,
        log_level,
    })
}
