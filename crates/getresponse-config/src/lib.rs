//! Shared configuration for GetResponse tools.
//!
//! TOML profiles, API key resolution (env + plaintext), and translation to
//! `getresponse_api::ClientConfig`. The CLI layers its flag overrides on
//! top of this.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use getresponse_api::{AccountType, ClientConfig, Region, TransportConfig};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Env var consulted when a profile has no `api_key_env` of its own.
pub const API_KEY_ENV: &str = "GETRESPONSE_API_KEY";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no API key configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named account profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

impl Config {
    /// Name of the profile to use when none is given explicitly.
    pub fn default_profile_name(&self) -> &str {
        self.default_profile.as_deref().unwrap_or("default")
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "json".into()
}
fn default_timeout() -> u64 {
    30
}

/// A named account profile.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Profile {
    /// "retail" (also "smb") or "enterprise" (also "360").
    #[serde(default = "default_account_type")]
    pub account_type: String,

    /// API key (plaintext; prefer `api_key_env`).
    pub api_key: Option<String>,

    /// Environment variable name containing the API key.
    pub api_key_env: Option<String>,

    /// Enterprise region ("pl" or "us"). Discovered when unset.
    pub region: Option<String>,

    /// Enterprise domain, sent as `X-DOMAIN`.
    pub domain: Option<String>,

    /// Override timeout.
    pub timeout: Option<u64>,
}

fn default_account_type() -> String {
    "retail".into()
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            account_type: default_account_type(),
            api_key: None,
            api_key_env: None,
            region: None,
            domain: None,
            timeout: None,
        }
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "getresponse", "getresponse").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("getresponse");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load Config from a specific file + environment. A missing file yields
/// the defaults.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("GETRESPONSE_").split("_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

/// Serialize config to TOML and write it to `path`, creating parents.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Credential resolution (without CLI flags) ───────────────────────

/// Resolve an API key from the credential chain (no CLI flag step).
pub fn resolve_api_key(profile: &Profile, profile_name: &str) -> Result<SecretString, ConfigError> {
    resolve_api_key_with(profile, profile_name, |name| std::env::var(name).ok())
}

/// Credential chain with a pluggable environment lookup.
pub fn resolve_api_key_with(
    profile: &Profile,
    profile_name: &str,
    env: impl Fn(&str) -> Option<String>,
) -> Result<SecretString, ConfigError> {
    // 1. Profile's api_key_env → env var lookup
    if let Some(val) = profile.api_key_env.as_deref().and_then(&env) {
        return Ok(SecretString::from(val));
    }

    // 2. Shared env var
    if let Some(val) = env(API_KEY_ENV) {
        return Ok(SecretString::from(val));
    }

    // 3. Plaintext in config
    if let Some(ref key) = profile.api_key {
        return Ok(SecretString::from(key.clone()));
    }

    Err(ConfigError::NoCredentials {
        profile: profile_name.into(),
    })
}

/// Parse a profile's `account_type`.
pub fn parse_account_type(value: &str) -> Result<AccountType, ConfigError> {
    value.parse().map_err(|_| ConfigError::Validation {
        field: "account_type".into(),
        reason: format!("expected 'retail', 'smb', 'enterprise', or '360', got '{value}'"),
    })
}

/// Build a `ClientConfig` from a profile, with no CLI flag overrides.
pub fn profile_to_client_config(
    profile: &Profile,
    profile_name: &str,
) -> Result<ClientConfig, ConfigError> {
    let api_key = resolve_api_key(profile, profile_name)?;
    build_client_config(profile, &api_key, Duration::from_secs(default_timeout()))
}

/// Build a `ClientConfig` from a profile and an already-resolved key.
///
/// `fallback_timeout` applies when the profile has no timeout of its own.
pub fn build_client_config(
    profile: &Profile,
    api_key: &SecretString,
    fallback_timeout: Duration,
) -> Result<ClientConfig, ConfigError> {
    let account_type = parse_account_type(&profile.account_type)?;

    let mut config = ClientConfig::new(account_type, api_key.expose_secret());
    if let Some(region) = profile.region.as_deref().and_then(Region::parse) {
        config = config.with_region(region);
    }
    if let Some(ref domain) = profile.domain {
        config = config.with_domain(domain.clone());
    }

    let timeout = profile
        .timeout
        .map_or(fallback_timeout, Duration::from_secs);
    Ok(config.with_transport(TransportConfig {
        timeout: Some(timeout),
        ..TransportConfig::default()
    }))
}
