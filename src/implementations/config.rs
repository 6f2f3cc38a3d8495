use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use log::{debug, info};

pub const ENV_BACKEND_URL: &str = "VATTAVADA_BACKEND_URL";
pub const ENV_WHATSAPP_NUMBER: &str = "VATTAVADA_WHATSAPP_NUMBER";
pub const ENV_SESSION_FILE: &str = "VATTAVADA_SESSION_FILE";
pub const ENV_ADMIN_LOGIN_ID: &str = "VATTAVADA_ADMIN_LOGIN_ID";
pub const ENV_ADMIN_PASSWORD: &str = "VATTAVADA_ADMIN_PASSWORD";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("Could not determine a data directory for the session file")]
    NoDataDir,
}

/// The single operator credential pair checked by the session gate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminCredentials {
    pub login_id: String,
    pub password: String,
}

impl AdminCredentials {
    pub fn new(login_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login_id: login_id.into(),
            password: password.into(),
        }
    }

    /// Pair baked in at build time from the same environment variables, if set
    pub fn compiled() -> Option<Self> {
        match (option_env!("VATTAVADA_ADMIN_LOGIN_ID"), option_env!("VATTAVADA_ADMIN_PASSWORD")) {
            (Some(id), Some(pw)) if !id.is_empty() && !pw.is_empty() => Some(Self::new(id, pw)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Origin of the REST backend
    pub backend_url: String,

    /// Path prefix the API is mounted under
    pub api_prefix: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Number used for messaging deep links
    pub whatsapp_number: String,

    /// Override for the session flag file location
    pub session_file: Option<PathBuf>,

    /// Operator credentials for the admin gate
    pub admin: Option<AdminCredentials>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:8000".to_string(),
            api_prefix: "/api".to_string(),
            timeout_secs: 30,
            whatsapp_number: "+919876543210".to_string(),
            session_file: None,
            admin: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: ClientConfig = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Defaults, then the optional file, then environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                Self::from_file(path)?
            }
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup (the process environment in practice)
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_BACKEND_URL) {
            debug!("Using backend URL from {}", ENV_BACKEND_URL);
            self.backend_url = url;
        }
        if let Some(number) = lookup(ENV_WHATSAPP_NUMBER) {
            self.whatsapp_number = number;
        }
        if let Some(path) = lookup(ENV_SESSION_FILE) {
            self.session_file = Some(PathBuf::from(path));
        }
        match (lookup(ENV_ADMIN_LOGIN_ID), lookup(ENV_ADMIN_PASSWORD)) {
            (Some(id), Some(pw)) => {
                debug!("Using admin credentials from environment");
                self.admin = Some(AdminCredentials::new(id, pw));
            }
            (Some(_), None) | (None, Some(_)) => {
                debug!("Ignoring partial admin credentials in environment");
            }
            (None, None) => {}
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.backend_url.starts_with("http://") || self.backend_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                key: "backend_url".to_string(),
                message: format!("expected an http(s) URL, got {:?}", self.backend_url),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "timeout_secs".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// `{backend_url}{api_prefix}` without a trailing slash
    pub fn api_url(&self) -> String {
        let base = self.backend_url.trim_end_matches('/');
        let prefix = self.api_prefix.trim_matches('/');
        if prefix.is_empty() {
            base.to_string()
        } else {
            format!("{}/{}", base, prefix)
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Credentials from config or environment, falling back to build-time values
    pub fn admin_credentials(&self) -> Option<AdminCredentials> {
        self.admin.clone().or_else(AdminCredentials::compiled)
    }

    pub fn session_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.session_file {
            return Ok(path.clone());
        }
        directories::ProjectDirs::from("in", "vattavada", "vattavada")
            .map(|dirs| dirs.data_local_dir().join("session.json"))
            .ok_or(ConfigError::NoDataDir)
    }
}
