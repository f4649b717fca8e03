//! CLI error types with miette diagnostics.
//!
//! Maps library and config errors, plus unsuccessful API responses, into
//! user-facing errors with help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use getresponse_api::{ApiResponse, ErrorDescriptor};
use getresponse_config::ConfigError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not reach the GetResponse API")]
    #[diagnostic(
        code(gr::connection_failed),
        help("Check your network connection. Run with -vv to see the request URL.")
    )]
    ConnectionFailed {
        #[source]
        source: getresponse_api::Error,
    },

    #[error("Request timed out")]
    #[diagnostic(
        code(gr::timeout),
        help("Increase the timeout with --timeout or in your profile.")
    )]
    Timeout,

    // ── Authentication ───────────────────────────────────────────────

    #[error("No API key configured for profile '{profile}'")]
    #[diagnostic(
        code(gr::no_credentials),
        help(
            "Pass --api-key, set GETRESPONSE_API_KEY, or configure a profile:\n\
             gr config init --api-key-env MY_KEY_VAR"
        )
    )]
    NoCredentials { profile: String },

    // ── API ──────────────────────────────────────────────────────────

    #[error("API request failed with HTTP {status}: {message}")]
    #[diagnostic(code(gr::api_error))]
    ApiStatus { status: u16, message: String },

    #[error("{message}")]
    #[diagnostic(
        code(gr::environment),
        help(
            "Check --account-type, --region and --domain. Retail (SMB) keys do not work\n\
             against Enterprise hosts, and Enterprise requests need the account's domain."
        )
    )]
    Environment { message: String },

    #[error(transparent)]
    #[diagnostic(code(gr::client))]
    Client(getresponse_api::Error),

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(gr::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(gr::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: gr config init --profile {name}"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("Profile '{name}' already exists")]
    #[diagnostic(code(gr::profile_exists), help("Use --force to replace it."))]
    ProfileExists { name: String },

    #[error(transparent)]
    #[diagnostic(code(gr::config))]
    Config(Box<ConfigError>),

    // ── IO / Serialization ────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON payload: {0}")]
    #[diagnostic(code(gr::json), help("Check the JSON passed to --data and try again."))]
    Json(#[from] serde_json::Error),

    #[error("YAML rendering failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout => exit_code::TIMEOUT,
            Self::NoCredentials { .. } => exit_code::AUTH,
            Self::ApiStatus { status, .. } => match status {
                401 | 403 => exit_code::AUTH,
                404 => exit_code::NOT_FOUND,
                _ => exit_code::GENERAL,
            },
            Self::Environment { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::ProfileNotFound { .. } | Self::ProfileExists { .. } => {
                exit_code::USAGE
            }
            _ => exit_code::GENERAL,
        }
    }

    /// Error for a response that didn't succeed, or `None` for a 2xx.
    pub fn from_response(resp: &ApiResponse) -> Option<Self> {
        if let Some(desc) = resp.error_descriptor() {
            return Some(Self::from(desc));
        }
        if resp.is_success() {
            return None;
        }
        Some(Self::ApiStatus {
            status: resp.status(),
            message: remote_message(resp),
        })
    }
}

/// The `message` field of a JSON error body, else a short text preview.
fn remote_message(resp: &ApiResponse) -> String {
    resp.json::<serde_json::Value>()
        .ok()
        .and_then(|v| v.get("message").and_then(serde_json::Value::as_str).map(str::to_owned))
        .unwrap_or_else(|| {
            let text = resp.text();
            let preview: String = text.trim().chars().take(200).collect();
            if preview.is_empty() {
                "(empty body)".into()
            } else {
                preview
            }
        })
}

impl From<&ErrorDescriptor> for CliError {
    fn from(desc: &ErrorDescriptor) -> Self {
        Self::Environment {
            message: desc.message.clone(),
        }
    }
}

// ── Library / config error mapping ───────────────────────────────────

impl From<getresponse_api::Error> for CliError {
    fn from(err: getresponse_api::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::ConnectionFailed { source: err }
        } else if let getresponse_api::Error::InvalidAccountType(value) = err {
            Self::Validation {
                field: "account-type".into(),
                reason: format!("expected retail, smb, enterprise or 360, got '{value}'"),
            }
        } else {
            Self::Client(err)
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NoCredentials { profile } => Self::NoCredentials { profile },
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            ConfigError::Io(e) => Self::Io(e),
            other => Self::Config(Box::new(other)),
        }
    }
}
