use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::KinemaError;

/// Top-level application configuration.
///
/// Secrets (Discord application ID, VLC password, OMDb key) have no
/// defaults: a config file missing any of them fails to load, before
/// the poll loop ever starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    pub discord: DiscordConfig,
    pub vlc: VlcConfig,
    pub omdb: OmdbConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Seconds between status polls.
    #[serde(default = "default_poll_interval")]
    pub poll_interval: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordConfig {
    /// Discord application ID. Not a secret in the usual sense, but
    /// there is no sensible default either.
    pub client_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VlcConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Password for VLC's HTTP interface (username is empty).
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OmdbConfig {
    pub api_key: String,
}

fn default_poll_interval() -> u64 {
    20
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            poll_interval: default_poll_interval(),
        }
    }
}

impl AppConfig {
    /// Load config from an explicit path, or from the default location.
    pub fn load(path: Option<&Path>) -> Result<Self, KinemaError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path(),
        };
        let raw = std::fs::read_to_string(&path).map_err(|e| {
            KinemaError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml(&raw)
    }

    /// Parse a TOML config string.
    pub fn from_toml(raw: &str) -> Result<Self, KinemaError> {
        toml::from_str(raw).map_err(|e| KinemaError::Config(e.to_string()))
    }

    /// Default config location: the user config dir (XDG on Linux,
    /// AppData on Windows) when a file exists there, otherwise
    /// `./config.toml`.
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = ProjectDirs::from("", "", "kinema") {
            let candidate = dirs.config_dir().join("config.toml");
            if candidate.exists() {
                return candidate;
            }
        }
        PathBuf::from("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"
        [general]
        poll_interval = 5

        [discord]
        client_id = "123456789"

        [vlc]
        host = "127.0.0.1"
        port = 9090
        password = "hunter2"

        [omdb]
        api_key = "abcd1234"
    "#;

    const MINIMAL: &str = r#"
        [discord]
        client_id = "123456789"

        [vlc]
        password = "hunter2"

        [omdb]
        api_key = "abcd1234"
    "#;

    #[test]
    fn test_full_config_parses() {
        let config = AppConfig::from_toml(FULL).unwrap();
        assert_eq!(config.general.poll_interval, 5);
        assert_eq!(config.vlc.host, "127.0.0.1");
        assert_eq!(config.vlc.port, 9090);
        assert_eq!(config.vlc.password, "hunter2");
        assert_eq!(config.discord.client_id, "123456789");
        assert_eq!(config.omdb.api_key, "abcd1234");
    }

    #[test]
    fn test_minimal_config_gets_defaults() {
        let config = AppConfig::from_toml(MINIMAL).unwrap();
        assert_eq!(config.general.poll_interval, 20);
        assert_eq!(config.vlc.host, "localhost");
        assert_eq!(config.vlc.port, 8080);
    }

    #[test]
    fn test_missing_password_rejected() {
        let raw = r#"
            [discord]
            client_id = "123456789"

            [vlc]
            host = "localhost"

            [omdb]
            api_key = "abcd1234"
        "#;
        assert!(matches!(
            AppConfig::from_toml(raw),
            Err(KinemaError::Config(_))
        ));
    }

    #[test]
    fn test_missing_omdb_section_rejected() {
        let raw = r#"
            [discord]
            client_id = "123456789"

            [vlc]
            password = "hunter2"
        "#;
        assert!(AppConfig::from_toml(raw).is_err());
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let result = AppConfig::load(Some(Path::new("/nonexistent/kinema.toml")));
        assert!(matches!(result, Err(KinemaError::Config(_))));
    }

    #[test]
    fn test_roundtrip() {
        let config = AppConfig::from_toml(FULL).unwrap();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized = AppConfig::from_toml(&serialized).unwrap();
        assert_eq!(deserialized.vlc.port, config.vlc.port);
        assert_eq!(deserialized.general.poll_interval, config.general.poll_interval);
    }
}
