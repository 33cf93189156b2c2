use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "Serves the student roster API", long_about = None)]
pub struct Cli {
    #[arg(short = 'c', long = "config")]
    pub config_path: Option<String>,
}

pub fn default_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".roster")
}

pub fn default_config_path() -> PathBuf {
    default_config_dir().join("config.yaml")
}

#[derive(Debug, Deserialize, Clone)]
pub struct App {
    database: String,
    port: u16,
    #[serde(default)]
    pub cors_origins: Vec<String>,
    #[serde(default)]
    pub turso_url: Option<String>,
    #[serde(default)]
    pub turso_auth_token: Option<String>,
    #[serde(default = "default_sync_interval")]
    pub sync_interval_seconds: u64,
}

fn default_sync_interval() -> u64 {
    60
}

impl App {
    pub fn get_db(&self) -> &str {
        &self.database
    }

    pub fn get_port(&self) -> u16 {
        self.port
    }

    /// Replica credentials, present only when both url and token are non-empty.
    pub fn replica(&self) -> Option<(&str, &str)> {
        match (non_empty(&self.turso_url), non_empty(&self.turso_auth_token)) {
            (Some(url), Some(token)) => Some((url, token)),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct Admin {
    #[serde(default)]
    token: Option<String>,
}

impl Admin {
    /// `None` disables the admin routes entirely.
    pub fn get_token(&self) -> Option<&str> {
        non_empty(&self.token)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub app: App,
    #[serde(default)]
    pub admin: Admin,
}

impl Config {
    pub fn new(path: &str) -> Result<Self> {
        let yaml_str = fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;
        Config::from_yaml(&yaml_str)
    }

    pub fn from_yaml(yaml_str: &str) -> Result<Self> {
        let yaml_with_env = Config::substitute_env_vars(yaml_str);
        let config: Config = serde_yaml::from_str(&yaml_with_env).context("invalid config")?;
        Ok(config)
    }

    fn substitute_env_vars(yaml_str: &str) -> String {
        let mut result = yaml_str.to_string();
        let mut offset = 0;

        while let Some(start) = result[offset..].find("${") {
            let actual_start = offset + start;
            let Some(end) = result[actual_start..].find('}') else {
                break;
            };
            let var_name = &result[actual_start + 2..actual_start + end];

            // ${VAR:-default}
            let env_value = if let Some(default_start) = var_name.find(":-") {
                let actual_var = &var_name[..default_start];
                let default_val = &var_name[default_start + 2..];
                env::var(actual_var).unwrap_or_else(|_| default_val.to_string())
            } else {
                env::var(var_name).unwrap_or_else(|_| {
                    tracing::warn!(variable = var_name, "environment variable not found");
                    String::new()
                })
            };

            result.replace_range(actual_start..actual_start + end + 1, &env_value);
            offset = actual_start + env_value.len();
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let cfg = Config::from_yaml("app:\n  database: roster.db\n  port: 8000\n").unwrap();
        assert_eq!(cfg.app.get_db(), "roster.db");
        assert_eq!(cfg.app.get_port(), 8000);
        assert!(cfg.app.cors_origins.is_empty());
        assert_eq!(cfg.app.sync_interval_seconds, 60);
        assert!(cfg.app.replica().is_none());
        assert!(cfg.admin.get_token().is_none());
    }

    #[test]
    fn test_default_value_substitution() {
        let yaml = "app:\n  database: ${ROSTER_TEST_UNSET_DB:-fallback.db}\n  port: 8000\nadmin:\n  token: ${ROSTER_TEST_UNSET_TOKEN:-}\n";
        let cfg = Config::from_yaml(yaml).unwrap();
        assert_eq!(cfg.app.get_db(), "fallback.db");
        assert!(cfg.admin.get_token().is_none());
    }

    #[test]
    fn test_missing_variable_becomes_empty() {
        let out = Config::substitute_env_vars("token: '${ROSTER_TEST_DEFINITELY_UNSET}'");
        assert_eq!(out, "token: ''");
    }

    #[test]
    fn test_replica_requires_url_and_token() {
        let yaml = "app:\n  database: roster.db\n  port: 8000\n  turso_url: libsql://example.turso.io\n  turso_auth_token: ''\n";
        let cfg = Config::from_yaml(yaml).unwrap();
        assert!(cfg.app.replica().is_none());

        let yaml = "app:\n  database: roster.db\n  port: 8000\n  turso_url: libsql://example.turso.io\n  turso_auth_token: secret\n";
        let cfg = Config::from_yaml(yaml).unwrap();
        assert_eq!(cfg.app.replica(), Some(("libsql://example.turso.io", "secret")));
    }

    #[test]
    fn test_admin_token() {
        let yaml = "app:\n  database: roster.db\n  port: 8000\nadmin:\n  token: s3cret\n";
        let cfg = Config::from_yaml(yaml).unwrap();
        assert_eq!(cfg.admin.get_token(), Some("s3cret"));

        let blank = Admin {
            token: Some("   ".to_string()),
        };
        assert!(blank.get_token().is_none());
    }

    #[test]
    fn test_missing_app_section_is_error() {
        assert!(Config::from_yaml("admin:\n  token: x\n").is_err());
    }
}
