use thiserror::Error;

/// Top-level error type for the `getresponse-api` crate.
///
/// Only failures that prevent a request from being built or delivered live
/// here. Remote API errors, wrong-environment pages and failed environment
/// discovery are returned as data (see [`ApiResponse`](crate::ApiResponse) and
/// [`Resolution`](crate::Resolution)), never as an `Err`.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A credential or domain could not be encoded as an HTTP header value.
    #[error("Invalid value for header {name}: {message}")]
    InvalidHeader { name: &'static str, message: String },

    // ── Configuration ───────────────────────────────────────────────
    /// Account type string not recognised.
    #[error("Unknown account type '{0}' (expected enterprise, 360, retail or smb)")]
    InvalidAccountType(String),

    // ── Data ────────────────────────────────────────────────────────
    /// Request body could not be serialized to JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    /// Reading an upload blob from disk failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` for connection-level failures (refused, DNS, TLS).
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_connect())
    }

    /// Returns `true` if the underlying HTTP request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }
}
