use crate::app_config::{AppConfig, DEFAULT_USER_AGENT};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a configured value cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a configured value cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup — no
/// `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        let raw = or_default(var, default);
        match raw.as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            other => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("expected true/false, got \"{other}\""),
            }),
        }
    };

    // Optional here: only the telegram binary requires the token, and it
    // checks presence itself so the CLI works without one.
    let bot_token = lookup("TELEGRAM_BOT_TOKEN")
        .ok()
        .filter(|t| !t.trim().is_empty());

    let log_level = or_default("PRICEBOT_LOG_LEVEL", "info");
    let headless = parse_bool("PRICEBOT_HEADLESS", "true")?;
    let window_width = parse_u32("PRICEBOT_WINDOW_WIDTH", "1920")?;
    let window_height = parse_u32("PRICEBOT_WINDOW_HEIGHT", "1080")?;
    let user_agent = or_default("PRICEBOT_USER_AGENT", DEFAULT_USER_AGENT);
    let render_timeout_secs = parse_u64("PRICEBOT_RENDER_TIMEOUT_SECS", "15")?;
    let settle_delay_secs = parse_u64("PRICEBOT_SETTLE_DELAY_SECS", "3")?;
    let result_limit = parse_usize("PRICEBOT_RESULT_LIMIT", "5")?;
    let min_query_len = parse_usize("PRICEBOT_MIN_QUERY_LEN", "2")?;

    Ok(AppConfig {
        bot_token,
        log_level,
        headless,
        window_width,
        window_height,
        user_agent,
        render_timeout_secs,
        settle_delay_secs,
        result_limit,
        min_query_len,
    })
}
