//! Configuration for navtools.
//!
//! Loaded from YAML with a fallback chain:
//! 1. Explicit `--config` path
//! 2. ~/.config/navtools/navtools.yml
//! 3. ./navtools.yml
//! 4. Built-in defaults

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{NavError, Result};

/// Default list endpoint, relative to the registry base URL.
pub const DEFAULT_LIST_PATH: &str = "/api/v1/accounts/{account_id}/users/{user_id}/installed_apps";

/// Default per-app configuration endpoint, relative to the registry base URL.
pub const DEFAULT_DETAIL_PATH: &str = "/api/v1/apps/{app_id}/configuration";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub registry: RegistryConfig,
}

/// Where and how to reach the integration registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub base_url: String,
    pub account_id: String,
    pub user_id: String,
    /// Path template with `{account_id}` and `{user_id}` placeholders
    pub list_path: String,
    /// Path template with an `{app_id}` placeholder
    pub detail_path: String,
    pub timeout_ms: u64,
    /// Environment variable holding a bearer token, if any
    pub token_env: Option<String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            account_id: "self".to_string(),
            user_id: "self".to_string(),
            list_path: DEFAULT_LIST_PATH.to_string(),
            detail_path: DEFAULT_DETAIL_PATH.to_string(),
            timeout_ms: 30000,
            token_env: Some("NAVTOOLS_API_TOKEN".to_string()),
        }
    }
}

impl RegistryConfig {
    /// Absolute URL of the installation list for the configured account and user
    pub fn list_url(&self) -> String {
        let path = self
            .list_path
            .replace("{account_id}", &self.account_id)
            .replace("{user_id}", &self.user_id);
        join_url(&self.base_url, &path)
    }

    /// Absolute URL of one app's configuration
    pub fn detail_url(&self, app_id: &str) -> String {
        let path = self.detail_path.replace("{app_id}", app_id);
        join_url(&self.base_url, &path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path);
        }

        let project_name = env!("CARGO_PKG_NAME");

        if let Some(config_dir) = dirs::config_dir() {
            let primary_config = config_dir.join(project_name).join(format!("{}.yml", project_name));
            if primary_config.exists() {
                match Self::load_from_file(&primary_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from {}: {}", primary_config.display(), e);
                    }
                }
            }
        }

        let fallback_config = PathBuf::from(format!("{}.yml", project_name));
        if fallback_config.exists() {
            match Self::load_from_file(&fallback_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load config from {}: {}", fallback_config.display(), e);
                }
            }
        }

        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        let config: Self = serde_yaml::from_str(&content).map_err(|e| {
            NavError::Config(format!("Failed to parse {}: {}", path.as_ref().display(), e))
        })?;
        config.validate()?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.registry.base_url.trim().is_empty() {
            return Err(NavError::Config("registry.base_url must not be empty".to_string()));
        }
        if !self.registry.detail_path.contains("{app_id}") {
            return Err(NavError::Config(
                "registry.detail_path must contain {app_id}".to_string(),
            ));
        }
        if self.registry.timeout_ms == 0 {
            return Err(NavError::Config("registry.timeout_ms must be > 0".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.registry.account_id, "self");
        assert_eq!(config.registry.timeout_ms, 30000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_list_url_substitutes_scope() {
        let registry = RegistryConfig {
            base_url: "https://lms.example.com/".to_string(),
            account_id: "4045".to_string(),
            user_id: "17".to_string(),
            ..Default::default()
        };
        assert_eq!(
            registry.list_url(),
            "https://lms.example.com/api/v1/accounts/4045/users/17/installed_apps"
        );
    }

    #[test]
    fn test_detail_url_substitutes_app_id() {
        let registry = RegistryConfig {
            base_url: "https://lms.example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(
            registry.detail_url("8300"),
            "https://lms.example.com/api/v1/apps/8300/configuration"
        );
    }

    #[test]
    fn test_invalid_detail_path() {
        let config = Config {
            registry: RegistryConfig {
                detail_path: "/api/v1/apps".to_string(),
                ..Default::default()
            },
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
registry:
  base_url: https://lms.example.com
  account_id: "4045"
  timeout_ms: 5000
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.registry.account_id, "4045");
        assert_eq!(config.registry.timeout_ms, 5000);
        // Other fields should have defaults
        assert_eq!(config.registry.user_id, "self");
        assert_eq!(config.registry.detail_path, DEFAULT_DETAIL_PATH);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "registry:\n  base_url: https://lms.example.com\n  user_id: \"42\"").unwrap();

        let config = Config::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(config.registry.base_url, "https://lms.example.com");
        assert_eq!(config.registry.user_id, "42");
    }

    #[test]
    fn test_load_from_file_rejects_bad_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "registry: [not, a, map]").unwrap();

        let result = Config::load(Some(&file.path().to_path_buf()));
        assert!(matches!(result, Err(NavError::Config(_))));
    }
}
