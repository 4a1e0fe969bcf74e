//! Server configuration.
//!
//! Values come from built-in defaults, optionally overridden by a YAML file
//! and then by the port given on the command line.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 9000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid github_api_base {0:?}: {1}")]
    BaseUrl(String, url::ParseError),

    #[error("invalid listen_addr {0:?}")]
    ListenAddr(String),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address the listener binds to
    pub listen_addr: String,
    /// Directory holding `root.html`, `index.html` and the listed files
    pub www_dir: PathBuf,
    /// Prefix the github route appends its query to
    pub github_api_base: String,
    pub fetch_timeout_secs: u64,
    pub read_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: format!("0.0.0.0:{DEFAULT_PORT}"),
            www_dir: PathBuf::from("www"),
            github_api_base: "https://api.github.com/".to_string(),
            fetch_timeout_secs: 20,
            read_timeout_secs: 30,
        }
    }
}

impl Config {
    /// Builds the effective configuration.
    ///
    /// `file` is an optional YAML document; `port` replaces the port part of
    /// `listen_addr` when given.
    pub fn load(file: Option<&Path>, port: Option<u16>) -> Result<Self, ConfigError> {
        let mut cfg = match file {
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                Self::from_yaml(&text)?
            }
            None => Self::default(),
        };

        if let Some(port) = port {
            cfg.listen_addr = cfg.with_port(port)?;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        let cfg: Config = serde_yaml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }

    fn with_port(&self, port: u16) -> Result<String, ConfigError> {
        let (host, _) = self
            .listen_addr
            .rsplit_once(':')
            .ok_or_else(|| ConfigError::ListenAddr(self.listen_addr.clone()))?;
        Ok(format!("{host}:{port}"))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        url::Url::parse(&self.github_api_base)
            .map_err(|e| ConfigError::BaseUrl(self.github_api_base.clone(), e))?;

        if !self.listen_addr.contains(':') {
            return Err(ConfigError::ListenAddr(self.listen_addr.clone()));
        }
        Ok(())
    }
}
