// paykit/src/config.rs
//
// Client configuration. The base URL is resolved once at startup and never
// changed afterwards.
//

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::errors::Result;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_STORAGE_KEY: &str = "paymind_user";
pub const DEFAULT_RECENT_LIMIT: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub recent_limit: usize,
    pub storage_key: String,
    /// Serve fixture data and the keyword responder instead of the backend.
    pub offline: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            recent_limit: DEFAULT_RECENT_LIMIT,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            offline: false,
        }
    }
}

impl ClientConfig {
    /// Configuration baked in at compile time, for targets without a process
    /// environment (the browser build).
    pub fn from_build_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = option_env!("PAYMIND_API_URL") {
            if !url.trim().is_empty() {
                config.api_base_url = url.trim().to_string();
            }
        }
        if let Some(offline) = option_env!("PAYMIND_OFFLINE") {
            config.offline = matches!(offline, "1" | "true" | "yes");
        }
        config
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub log_level: String,
    pub log_file: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_file: "paymind-tui.log".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PayMindConfig {
    pub client: ClientConfig,
    pub observability: ObservabilityConfig,
}

/// Layer an optional YAML file and `PAYMIND__*` environment variables over
/// the defaults, e.g. `PAYMIND__CLIENT__API_BASE_URL`.
pub fn load_config(path: &str) -> Result<PayMindConfig> {
    load_with_env(path, env_source())
}

fn env_source() -> Environment {
    Environment::with_prefix("PAYMIND").separator("__")
}

fn load_with_env(path: &str, env: Environment) -> Result<PayMindConfig> {
    let config = Config::builder()
        .add_source(File::with_name(path).required(false))
        .add_source(env)
        .build()?;

    Ok(config.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_local_backend() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:5000");
        assert_eq!(config.recent_limit, 3);
        assert_eq!(config.storage_key, "paymind_user");
        assert!(!config.offline);
    }

    #[test]
    fn test_load_config_from_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paymind.yaml");
        std::fs::write(
            &path,
            "client:\n  api_base_url: http://payments.internal:8080\n  offline: true\nobservability:\n  log_level: debug\n",
        )
        .unwrap();

        let config = load_config(path.to_str().unwrap()).unwrap();
        assert_eq!(config.client.api_base_url, "http://payments.internal:8080");
        assert!(config.client.offline);
        assert_eq!(config.client.recent_limit, 3);
        assert_eq!(config.observability.log_level, "debug");
        assert_eq!(config.observability.log_file, "paymind-tui.log");
    }

    #[test]
    fn test_env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paymind.yaml");
        std::fs::write(&path, "client:\n  api_base_url: http://from-file:8080\n").unwrap();

        let mut vars = config::Map::new();
        vars.insert(
            "PAYMIND__CLIENT__API_BASE_URL".to_string(),
            "http://from-env:9090".to_string(),
        );
        vars.insert("PAYMIND__CLIENT__OFFLINE".to_string(), "true".to_string());
        vars.insert("PAYMIND_CLIENT_STORAGE_KEY".to_string(), "ignored".to_string());

        let config = load_with_env(path.to_str().unwrap(), env_source().source(Some(vars))).unwrap();
        assert_eq!(config.client.api_base_url, "http://from-env:9090");
        assert!(config.client.offline);
        assert_eq!(config.client.storage_key, "paymind_user");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = load_config("/nonexistent/paymind-config").unwrap();
        assert_eq!(config.client, ClientConfig::default());
    }
}
