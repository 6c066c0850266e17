use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a usable
/// development config.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        let raw = or_default(var, default);
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(invalid(var, format!("expected a boolean, got '{raw}'"))),
        }
    };

    let env = parse_environment(&or_default("MANDI_ENV", "development"))?;
    let bind_addr = parse_addr("MANDI_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("MANDI_LOG_LEVEL", "info");
    let content_dir = PathBuf::from(or_default("MANDI_CONTENT_DIR", "./content"));
    let site_url = or_default("MANDI_SITE_URL", "http://localhost:3000")
        .trim_end_matches('/')
        .to_string();
    let whatsapp_number = or_default("MANDI_WHATSAPP_NUMBER", "").trim().to_string();
    let revalidate_secs = parse_u64("MANDI_REVALIDATE_SECS", "60")?;
    let serve_inactive_by_slug = parse_bool("MANDI_SERVE_INACTIVE_BY_SLUG", "false")?;
    let rate_limit_per_minute = parse_usize("MANDI_RATE_LIMIT_PER_MINUTE", "120")?;

    if rate_limit_per_minute == 0 {
        return Err(invalid(
            "MANDI_RATE_LIMIT_PER_MINUTE",
            "must be at least 1".to_string(),
        ));
    }

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        content_dir,
        site_url,
        whatsapp_number,
        revalidate_secs,
        serve_inactive_by_slug,
        rate_limit_per_minute,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "MANDI_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
