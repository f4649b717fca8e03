// Response types handed back to callers.
//
// Responses are returned as data whatever their status code. The only
// rewriting this layer does is substituting a synthesized error descriptor
// when the remote host answers with an HTML page instead of JSON.

use bytes::Bytes;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Error;

const INCORRECT_ENVIRONMENT: &str = "Incorrect environment";
const NO_MATCHING_ENVIRONMENT: &str =
    "No matching environment: probably an SMB account or just wrong credentials";

// ── Error descriptor ────────────────────────────────────────────────

/// Structured error value synthesized by this layer.
///
/// Serializes to `{"error":true,"code":"0","httpStatus":404,"message":...}`,
/// the same shape callers of the API's other client libraries check for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDescriptor {
    pub error: bool,
    pub code: String,
    pub http_status: u16,
    pub message: String,
}

impl ErrorDescriptor {
    fn not_found(message: &str) -> Self {
        Self {
            error: true,
            code: "0".into(),
            http_status: 404,
            message: message.into(),
        }
    }

    /// The host answered with an HTML page: wrong region or domain.
    pub fn incorrect_environment() -> Self {
        Self::not_found(INCORRECT_ENVIRONMENT)
    }

    /// Discovery exhausted every candidate environment.
    pub fn no_matching_environment() -> Self {
        Self::not_found(NO_MATCHING_ENVIRONMENT)
    }

    pub fn is_incorrect_environment(&self) -> bool {
        self.http_status == 404 && self.message == INCORRECT_ENVIRONMENT
    }

    pub fn is_no_matching_environment(&self) -> bool {
        self.http_status == 404 && self.message == NO_MATCHING_ENVIRONMENT
    }
}

// ── Raw response ────────────────────────────────────────────────────

/// An HTTP response exactly as received.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

// ── API response ────────────────────────────────────────────────────

/// Result of one API call: the raw HTTP response, or a descriptor this layer
/// synthesized in its place.
#[derive(Debug, Clone)]
pub enum ApiResponse {
    Raw(RawResponse),
    Synthesized(ErrorDescriptor),
}

impl ApiResponse {
    /// HTTP status code. Synthesized descriptors report their `httpStatus`.
    pub fn status(&self) -> u16 {
        match self {
            Self::Raw(raw) => raw.status.as_u16(),
            Self::Synthesized(desc) => desc.http_status,
        }
    }

    /// `true` for a raw 2xx response.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Raw(raw) if raw.status.is_success())
    }

    /// The synthesized descriptor, if this layer replaced the response.
    pub fn error_descriptor(&self) -> Option<&ErrorDescriptor> {
        match self {
            Self::Synthesized(desc) => Some(desc),
            Self::Raw(_) => None,
        }
    }

    /// `true` when the response was replaced because the host served HTML.
    pub fn is_environment_error(&self) -> bool {
        self.error_descriptor()
            .is_some_and(ErrorDescriptor::is_incorrect_environment)
    }

    /// Response body bytes. Synthesized descriptors yield their JSON form.
    pub fn body(&self) -> Bytes {
        match self {
            Self::Raw(raw) => raw.body.clone(),
            Self::Synthesized(desc) => serde_json::to_vec(desc).map(Bytes::from).unwrap_or_default(),
        }
    }

    /// Response body decoded as UTF-8 (lossily).
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body()).into_owned()
    }

    /// Deserialize the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        let body = self.body();
        serde_json::from_slice(&body).map_err(|e| {
            let text = String::from_utf8_lossy(&body).into_owned();
            let preview: String = text.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body: text,
            }
        })
    }

    /// Look up a response header. Synthesized descriptors carry none.
    pub fn header(&self, name: &str) -> Option<&str> {
        match self {
            Self::Raw(raw) => raw.headers.get(name).and_then(|v| v.to_str().ok()),
            Self::Synthesized(_) => None,
        }
    }

    // ── Pagination headers ───────────────────────────────────────────

    /// `TotalCount` header: number of items across all pages.
    pub fn total_count(&self) -> Option<u64> {
        self.numeric_header("TotalCount")
    }

    /// `TotalPages` header.
    pub fn total_pages(&self) -> Option<u64> {
        self.numeric_header("TotalPages")
    }

    /// `CurrentPage` header.
    pub fn current_page(&self) -> Option<u64> {
        self.numeric_header("CurrentPage")
    }

    fn numeric_header(&self, name: &str) -> Option<u64> {
        self.header(name).and_then(|v| v.trim().parse().ok())
    }
}
