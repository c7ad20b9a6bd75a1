//! Connection profile: host, port, TLS options, and credentials.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::error::{ClientError, ClientResult};

const DEFAULT_API_PORT: u16 = 8080;
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const PROFILE_FILE_NAME: &str = ".caravel.toml";

const ENV_USERNAME: &str = "CARAVEL_USERNAME";
const ENV_PASSWORD: &str = "CARAVEL_PASSWORD";
const ENV_API_HOST: &str = "CARAVEL_API_HOST";
const ENV_API_PORT: &str = "CARAVEL_API_PORT";
const ENV_USE_SSL: &str = "CARAVEL_USE_SSL";
const ENV_VERIFY_SSL: &str = "CARAVEL_VERIFY_SSL";
const ENV_WARN_SSL: &str = "CARAVEL_WARN_SSL";

/// Connection parameters for a platform API endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Host name or address of the platform API.
    pub api_host: String,
    /// TCP port of the platform API.
    pub api_port: u16,
    /// Use https when true, plain http otherwise.
    pub use_ssl: bool,
    /// Verify the platform TLS certificate.
    pub verify_ssl: bool,
    /// Log a warning when certificate verification is disabled.
    pub warn_ssl: bool,
    /// Login user name.
    pub username: String,
    /// Login password.
    pub password: String,
    /// Per-request HTTP timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_host: "127.0.0.1".to_string(),
            api_port: DEFAULT_API_PORT,
            use_ssl: true,
            verify_ssl: true,
            warn_ssl: false,
            username: String::new(),
            password: String::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// On-disk profile file layout: a single `[default]` table.
#[derive(Debug, Deserialize)]
struct ProfileFile {
    default: ProfileSection,
}

#[derive(Debug, Deserialize)]
struct ProfileSection {
    api_host: String,
    #[serde(default = "default_port")]
    api_port: u16,
    #[serde(default = "default_true")]
    use_ssl: bool,
    #[serde(default = "default_true")]
    verify_ssl: bool,
    #[serde(default)]
    warn_ssl: bool,
    username: String,
    password: String,
}

const fn default_port() -> u16 {
    DEFAULT_API_PORT
}

const fn default_true() -> bool {
    true
}

impl ClientConfig {
    /// Build a profile from `CARAVEL_*` environment variables.
    ///
    /// `CARAVEL_USERNAME`, `CARAVEL_PASSWORD`, and `CARAVEL_API_HOST` are
    /// required; the remaining variables fall back to defaults.
    pub fn from_env() -> ClientResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load a profile from a TOML file with a `[default]` table.
    pub fn from_config_file(path: &Path) -> ClientResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ClientError::Io {
            operation: format!("read config file {}", path.display()),
            source,
        })?;
        let file: ProfileFile = toml::from_str(&contents).map_err(|err| {
            ClientError::config(format!(
                "config file {} is not valid: {err}",
                path.display()
            ))
        })?;
        let section = file.default;
        Ok(Self {
            api_host: section.api_host,
            api_port: section.api_port,
            use_ssl: section.use_ssl,
            verify_ssl: section.verify_ssl,
            warn_ssl: section.warn_ssl,
            username: section.username,
            password: section.password,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Default profile file location (`~/.caravel.toml`), if resolvable.
    #[must_use]
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(PROFILE_FILE_NAME))
    }

    /// Base URL derived from the scheme, host, and port.
    pub fn base_url(&self) -> ClientResult<Url> {
        let scheme = if self.use_ssl { "https" } else { "http" };
        let raw = format!("{scheme}://{}:{}", self.api_host, self.api_port);
        raw.parse()
            .map_err(|err| ClientError::config(format!("invalid API address '{raw}': {err}")))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ClientResult<Self> {
        let required = |name: &str| {
            lookup(name)
                .ok_or_else(|| ClientError::config(format!("Required env var '{name}' not found.")))
        };

        let username = required(ENV_USERNAME)?;
        let password = required(ENV_PASSWORD)?;
        let api_host = required(ENV_API_HOST)?;

        let api_port = match lookup(ENV_API_PORT) {
            Some(raw) => raw.parse::<u16>().map_err(|_| {
                ClientError::config(format!("env var '{ENV_API_PORT}' is not a valid port: {raw}"))
            })?,
            None => DEFAULT_API_PORT,
        };

        Ok(Self {
            api_host,
            api_port,
            use_ssl: parse_env_bool(ENV_USE_SSL, lookup(ENV_USE_SSL), true)?,
            verify_ssl: parse_env_bool(ENV_VERIFY_SSL, lookup(ENV_VERIFY_SSL), true)?,
            warn_ssl: parse_env_bool(ENV_WARN_SSL, lookup(ENV_WARN_SSL), false)?,
            username,
            password,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }
}

fn parse_env_bool(name: &str, raw: Option<String>, default: bool) -> ClientResult<bool> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ClientError::config(format!(
            "env var '{name}' is not a valid boolean: {raw}"
        ))),
    }
}
