//! Configuration module
//!
//! Connection settings for the facts server, stored as TOML at
//! `~/.facts/config.toml`. Credentials are read once at startup and
//! handed to the HTTP client as plain data.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Host used when no URI is configured.
pub const DEFAULT_URI: &str = "http://localhost:3000";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Base URI of the facts host
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    /// Basic-auth user; write operations require one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    /// Basic-auth password
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Basic-auth pair attached to every server call.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

impl Config {
    /// Load config from the default location, or defaults when absent.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Save config to the default location, returning the path written.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path().context("cannot determine home directory")?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save config to a file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }

    /// Config file path (~/.facts/config.toml)
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".facts").join("config.toml"))
    }

    /// Effective base URI: the configured one unless unset or blank.
    pub fn uri(&self) -> &str {
        match &self.uri {
            Some(uri) if !uri.trim().is_empty() => uri,
            _ => DEFAULT_URI,
        }
    }

    /// Credential pair, present only when a user is configured.
    pub fn credentials(&self) -> Option<Credentials> {
        match &self.user {
            Some(user) if !user.trim().is_empty() => Some(Credentials {
                user: user.clone(),
                password: self.password.clone().unwrap_or_default(),
            }),
            _ => None,
        }
    }
}

/// Helper to get directories crate functionality
pub(crate) mod dirs {
    use std::path::PathBuf;

    pub fn home_dir() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE").ok().map(PathBuf::from)
        }
        #[cfg(not(windows))]
        {
            std::env::var("HOME").ok().map(PathBuf::from)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config {
            uri: Some("http://facts.example.org".to_string()),
            user: Some("alice".to_string()),
            password: Some("secret".to_string()),
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.uri.as_deref(), Some("http://facts.example.org"));
        assert_eq!(loaded.user.as_deref(), Some("alice"));
        assert_eq!(loaded.password.as_deref(), Some("secret"));
    }

    #[test]
    fn blank_uri_falls_back_to_default() {
        let config = Config::default();
        assert_eq!(config.uri(), DEFAULT_URI);

        let config = Config {
            uri: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.uri(), DEFAULT_URI);

        let config = Config {
            uri: Some("http://example.org".to_string()),
            ..Default::default()
        };
        assert_eq!(config.uri(), "http://example.org");
    }

    #[test]
    fn credentials_require_a_user() {
        assert!(Config::default().credentials().is_none());

        let config = Config {
            user: Some("alice".to_string()),
            ..Default::default()
        };
        let creds = config.credentials().unwrap();
        assert_eq!(creds.user, "alice");
        assert_eq!(creds.password, "");

        let config = Config {
            user: Some("  ".to_string()),
            password: Some("secret".to_string()),
            ..Default::default()
        };
        assert!(config.credentials().is_none());
    }

    #[test]
    fn missing_fields_default_to_none() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.uri.is_none());
        assert!(config.user.is_none());
        assert!(config.password.is_none());
    }
}
