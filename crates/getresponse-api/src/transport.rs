// HTTP transport: one request in, one `ApiResponse` out.
//
// Authentication headers are baked into the `reqwest::Client` as defaults.
// Non-2xx statuses are returned as data; only failures of the HTTP
// machinery itself surface as `Err`.

use std::time::Duration;

use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::multipart::{self, Blob};
use crate::response::{ApiResponse, ErrorDescriptor, RawResponse};

/// `X-Auth-Token: api-key <key>`
pub const AUTH_HEADER: &str = "x-auth-token";
/// `X-DOMAIN: <domain>`, Enterprise accounts only.
pub const DOMAIN_HEADER: &str = "x-domain";

const JSON_CONTENT_TYPE: &str = "application/json";
const MULTIMEDIA_PATH: &str = "multimedia/";
const HTML_MARKER: &[u8] = b"<!DOCTYPE html>";

/// Does this body look like an HTML page served in place of the API payload?
///
/// A host that doesn't recognise the account's region or domain answers
/// with an HTML page instead of a JSON error. Note that any other HTML
/// error page trips this check too.
pub fn is_environment_error_page(body: &[u8]) -> bool {
    body.windows(HTML_MARKER.len()).any(|window| window == HTML_MARKER)
}

/// Join a request path onto a base URL by plain concatenation.
///
/// The path may carry an already-encoded query string after the first `?`.
/// Only the path part is parsed against the base; the query is set as is,
/// so a literal `#` in it goes out as `%23` instead of starting a fragment.
/// A leading `/` is dropped so the base path (e.g. `/v3/`) is kept.
pub fn endpoint_url(base_url: &Url, path: &str) -> Result<Url, Error> {
    let (path, query) = match path.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (path, None),
    };

    let base = base_url.as_str();
    let separator = if base.ends_with('/') { "" } else { "/" };
    let mut url = Url::parse(&format!(
        "{base}{separator}{}",
        path.trim_start_matches('/')
    ))?;
    if let Some(query) = query {
        url.set_query(Some(query));
    }
    Ok(url)
}

// ── Config ──────────────────────────────────────────────────────────

/// Settings for the underlying `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Overall request timeout. `None` leaves reqwest's default (no timeout).
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: concat!("getresponse-api/", env!("CARGO_PKG_VERSION")).into(),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` with the given default headers.
    pub fn build_client_with_headers(&self, headers: HeaderMap) -> Result<reqwest::Client, Error> {
        let mut builder = reqwest::Client::builder()
            .user_agent(self.user_agent.as_str())
            .default_headers(headers);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(builder.build()?)
    }
}

// ── Transport ───────────────────────────────────────────────────────

/// Authenticated HTTP transport shared by the client and the environment
/// discovery.
#[derive(Debug, Clone)]
pub struct Transport {
    http: reqwest::Client,
}

impl Transport {
    /// Build a transport that sends `X-Auth-Token` on every request, plus
    /// `X-DOMAIN` when a non-empty domain is given.
    pub fn new(
        api_key: &SecretString,
        domain: Option<&str>,
        config: &TransportConfig,
    ) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();

        let mut token = HeaderValue::from_str(&format!("api-key {}", api_key.expose_secret()))
            .map_err(|e| Error::InvalidHeader {
                name: "X-Auth-Token",
                message: e.to_string(),
            })?;
        token.set_sensitive(true);
        headers.insert(AUTH_HEADER, token);

        if let Some(domain) = domain.filter(|d| !d.is_empty()) {
            let value = HeaderValue::from_str(domain).map_err(|e| Error::InvalidHeader {
                name: "X-DOMAIN",
                message: e.to_string(),
            })?;
            headers.insert(DOMAIN_HEADER, value);
        }

        let http = config.build_client_with_headers(headers)?;
        Ok(Self { http })
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Send a JSON request. Bodiless requests send an empty body.
    pub async fn send(
        &self,
        base_url: &Url,
        path: &str,
        method: Method,
        body: Option<String>,
    ) -> Result<ApiResponse, Error> {
        let url = endpoint_url(base_url, path)?;
        debug!("{method} {url}");

        let resp = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body.unwrap_or_default())
            .send()
            .await?;

        Self::finish(resp).await
    }

    /// Upload a file to `multimedia/` as a hand-built multipart body.
    pub async fn upload(&self, base_url: &Url, blob: &Blob) -> Result<ApiResponse, Error> {
        let url = endpoint_url(base_url, MULTIMEDIA_PATH)?;
        debug!(name = blob.name(), bytes = blob.len(), "POST {url} (multipart)");

        let resp = self
            .http
            .post(url)
            .header(CONTENT_TYPE, multipart::content_type())
            .body(multipart::encode_body(blob))
            .send()
            .await?;

        Self::finish(resp).await
    }

    /// Read the whole body and substitute the environment-error descriptor
    /// for HTML pages.
    async fn finish(resp: reqwest::Response) -> Result<ApiResponse, Error> {
        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.bytes().await?;

        if is_environment_error_page(&body) {
            debug!(%status, "HTML page in place of API payload");
            return Ok(ApiResponse::Synthesized(
                ErrorDescriptor::incorrect_environment(),
            ));
        }

        Ok(ApiResponse::Raw(RawResponse {
            status,
            headers,
            body,
        }))
    }
}
