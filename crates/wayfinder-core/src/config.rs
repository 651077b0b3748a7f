//! Application configuration (`wayfinder.toml`).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    route::MatchMode,
};

/// Main configuration structure for Wayfinder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// App shell settings.
    #[serde(default)]
    pub app: AppConfig,

    /// Route table settings.
    #[serde(default)]
    pub routing: RoutingConfig,

    /// Development server settings.
    #[serde(default)]
    pub server: ServerConfig,
}

/// App shell configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Document title prefix.
    #[serde(default = "default_title")]
    pub title: String,

    /// Number of user links listed on the Users page.
    #[serde(default = "default_users")]
    pub users: usize,
}

/// Route table configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Whether every match renders or only the first.
    #[serde(default)]
    pub mode: MatchMode,

    /// Compare literal path segments case sensitively.
    #[serde(default)]
    pub case_sensitive: bool,
}

/// Development server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the compiled site (`pkg/` lives underneath).
    #[serde(default = "default_site_root")]
    pub site_root: String,
}

// Default value functions
fn default_title() -> String {
    "Wayfinder".to_string()
}

fn default_users() -> usize {
    3
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_site_root() -> String {
    "target/site".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            users: default_users(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            site_root: default_site_root(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file, without environment overrides.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load the file if it exists, otherwise start from defaults.
    ///
    /// `WAYFINDER__SECTION__KEY` environment variables override both.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            return Self::load_with_env(path);
        }

        tracing::info!(?path, "Configuration file not found, using defaults");
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Config::default())?)
            .add_source(env_source())
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration using the config crate, layering environment
    /// overrides on top of the file.
    ///
    /// The file is always read as TOML, whatever its extension.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path).format(config::FileFormat::Toml))
            .add_source(env_source())
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.app.title.trim().is_empty() {
            return Err(CoreError::config("app.title cannot be empty"));
        }

        if self.app.users == 0 {
            return Err(CoreError::config("app.users must be at least 1"));
        }

        if self.server.port == 0 {
            return Err(CoreError::config("server.port cannot be 0"));
        }

        if self.routing.mode == MatchMode::Inclusive {
            tracing::warn!("routing.mode = inclusive renders no NotFound page for unknown paths");
        }

        Ok(())
    }

    /// The `host:port` address the server binds.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn env_source() -> config::Environment {
    config::Environment::with_prefix("WAYFINDER")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
