use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Default CORS allow-list, matching the local front-end dev ports.
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://localhost:3001,\
http://localhost:3002,http://localhost:3003,http://localhost:3004,http://localhost:3005";

const DEFAULT_HF_MODEL: &str = "mistralai/Mistral-7B-Instruct-v0.3";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but its value is invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but its value is invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
///
/// Every variable has a default, so an empty environment yields a working
/// configuration (the chat credential stays unset and chat degrades to the
/// apology path).
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
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

    let env = parse_environment(&or_default("STYLEGURU_ENV", "development"));

    let bind_addr = parse_addr("STYLEGURU_BIND_ADDR", "0.0.0.0:3001")?;
    let relay_bind_addr = parse_addr("STYLEGURU_RELAY_BIND_ADDR", "0.0.0.0:5001")?;
    let log_level = or_default("STYLEGURU_LOG_LEVEL", "info");

    let allowed_origins = split_origins(&or_default(
        "STYLEGURU_ALLOWED_ORIGINS",
        DEFAULT_ALLOWED_ORIGINS,
    ));

    // An empty value behaves the same as an unset one.
    let hf_api_key = lookup("HUGGING_FACE_API_KEY")
        .ok()
        .filter(|key| !key.is_empty());
    let hf_model = or_default("HF_MODEL", DEFAULT_HF_MODEL);
    let upstream_timeout_secs = parse_u64("STYLEGURU_UPSTREAM_TIMEOUT_SECS", "120")?;
    let stream_delay_ms = parse_u64("STYLEGURU_STREAM_DELAY_MS", "15")?;

    Ok(AppConfig {
        env,
        bind_addr,
        relay_bind_addr,
        log_level,
        allowed_origins,
        hf_api_key,
        hf_model,
        upstream_timeout_secs,
        stream_delay_ms,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn parse_environment_development() {
        assert_eq!(parse_environment("development"), Environment::Development);
    }

    #[test]
    fn parse_environment_test() {
        assert_eq!(parse_environment("test"), Environment::Test);
    }

    #[test]
    fn parse_environment_production() {
        assert_eq!(parse_environment("production"), Environment::Production);
    }

    #[test]
    fn parse_environment_unknown_defaults_to_development() {
        assert_eq!(parse_environment("unknown"), Environment::Development);
    }

    #[test]
    fn build_app_config_succeeds_with_empty_environment() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(result.is_ok(), "expected Ok, got: {result:?}");
        let cfg = result.unwrap();
        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3001");
        assert_eq!(cfg.relay_bind_addr.to_string(), "0.0.0.0:5001");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.allowed_origins.len(), 6);
        assert_eq!(cfg.allowed_origins[0], "http://localhost:3000");
        assert_eq!(cfg.allowed_origins[5], "http://localhost:3005");
        assert!(cfg.hf_api_key.is_none());
        assert_eq!(cfg.hf_model, "mistralai/Mistral-7B-Instruct-v0.3");
        assert_eq!(cfg.upstream_timeout_secs, 120);
        assert_eq!(cfg.stream_delay_ms, 15);
    }

    #[test]
    fn build_app_config_fails_with_invalid_bind_addr() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("STYLEGURU_BIND_ADDR", "not-a-socket-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STYLEGURU_BIND_ADDR"),
            "expected InvalidEnvVar(STYLEGURU_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_fails_with_invalid_relay_bind_addr() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("STYLEGURU_RELAY_BIND_ADDR", "localhost");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STYLEGURU_RELAY_BIND_ADDR"),
            "expected InvalidEnvVar(STYLEGURU_RELAY_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_fails_with_invalid_stream_delay() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("STYLEGURU_STREAM_DELAY_MS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STYLEGURU_STREAM_DELAY_MS"),
            "expected InvalidEnvVar(STYLEGURU_STREAM_DELAY_MS), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_overrides_bind_addr() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("STYLEGURU_BIND_ADDR", "127.0.0.1:8080");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn build_app_config_splits_and_trims_origins() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert(
            "STYLEGURU_ALLOWED_ORIGINS",
            "https://app.example.com , https://staging.example.com,,",
        );
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(
            cfg.allowed_origins,
            vec![
                "https://app.example.com".to_string(),
                "https://staging.example.com".to_string(),
            ]
        );
    }

    #[test]
    fn build_app_config_keeps_present_api_key() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("HUGGING_FACE_API_KEY", "hf_test_key");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.hf_api_key.as_deref(), Some("hf_test_key"));
    }

    #[test]
    fn build_app_config_treats_empty_api_key_as_unset() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("HUGGING_FACE_API_KEY", "");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert!(cfg.hf_api_key.is_none());
    }

    #[test]
    fn build_app_config_overrides_model_and_timeouts() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("HF_MODEL", "google/gemma-2-9b-it");
        map.insert("STYLEGURU_UPSTREAM_TIMEOUT_SECS", "30");
        map.insert("STYLEGURU_STREAM_DELAY_MS", "0");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.hf_model, "google/gemma-2-9b-it");
        assert_eq!(cfg.upstream_timeout_secs, 30);
        assert_eq!(cfg.stream_delay_ms, 0);
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("HUGGING_FACE_API_KEY", "hf_super_secret");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("hf_super_secret"));
        assert!(rendered.contains("[redacted]"));
    }
}
