// Client facade
//
// Composes environment resolution, query encoding and transport into the
// four request primitives (`get`, `post`, `remove`, `upload`). Every
// resource binding in `resources/` is a one-line call into one of them.

use reqwest::Method;
use secrecy::SecretString;
use serde::Serialize;
use tokio::sync::OnceCell;
use tracing::debug;
use url::Url;

use crate::environment::{self, AccountType, Endpoints, Environment, Region, Resolution};
use crate::error::Error;
use crate::multipart::Blob;
use crate::query::{self, Query, QueryParams};
use crate::response::{ApiResponse, ErrorDescriptor};
use crate::transport::{Transport, TransportConfig};

// ── Config ──────────────────────────────────────────────────────────

/// Everything needed to build a [`Client`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub account_type: AccountType,
    pub api_key: SecretString,
    /// Enterprise region. Discovered when absent or unknown.
    pub region: Option<Region>,
    /// Enterprise domain, sent as `X-DOMAIN`.
    pub domain: Option<String>,
    pub endpoints: Endpoints,
    pub transport: TransportConfig,
}

impl ClientConfig {
    pub fn new(account_type: AccountType, api_key: impl Into<String>) -> Self {
        Self {
            account_type,
            api_key: SecretString::from(api_key.into()),
            region: None,
            domain: None,
            endpoints: Endpoints::default(),
            transport: TransportConfig::default(),
        }
    }

    /// Retail (SMB) account on the global host.
    pub fn retail(api_key: impl Into<String>) -> Self {
        Self::new(AccountType::Retail, api_key)
    }

    /// Enterprise account; add [`with_region`](Self::with_region) to skip discovery.
    pub fn enterprise(api_key: impl Into<String>, domain: impl Into<String>) -> Self {
        Self::new(AccountType::Enterprise, api_key).with_domain(domain)
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    /// Set the Enterprise domain. Empty strings are treated as unset.
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        let domain = domain.into();
        self.domain = (!domain.is_empty()).then_some(domain);
        self
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn with_transport(mut self, transport: TransportConfig) -> Self {
        self.transport = transport;
        self
    }
}

// ── Client ──────────────────────────────────────────────────────────

/// Async client for the GetResponse v3 API.
///
/// Retail accounts and Enterprise accounts with a known region are bound to
/// their base URL at construction. Otherwise the first request (or an
/// explicit [`resolve`](Self::resolve)) tries the candidate regions. The
/// outcome, match or no match, is written once and reused for the client's
/// lifetime.
pub struct Client {
    transport: Transport,
    account_type: AccountType,
    region: Option<Region>,
    domain: Option<String>,
    endpoints: Endpoints,
    resolution: OnceCell<Resolution>,
}

impl Client {
    /// Build a client. No network access happens here.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let transport = Transport::new(
            &config.api_key,
            config.domain.as_deref(),
            &config.transport,
        )?;
        Ok(Self::with_transport(config, transport))
    }

    /// Build a client around a pre-built transport.
    pub fn with_transport(config: ClientConfig, transport: Transport) -> Self {
        let resolved = environment::resolve_static(
            config.account_type,
            config.region.as_ref(),
            &config.endpoints,
        );

        Self {
            transport,
            account_type: config.account_type,
            region: config.region,
            domain: config.domain,
            endpoints: config.endpoints,
            resolution: OnceCell::new_with(resolved.map(Resolution::Matched)),
        }
    }

    pub fn account_type(&self) -> AccountType {
        self.account_type
    }

    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    /// The resolved environment, if resolution has happened.
    pub fn environment(&self) -> Option<&Environment> {
        self.resolution.get().and_then(Resolution::environment)
    }

    /// Region in use: the resolved one, or the configured one before
    /// resolution.
    pub fn region(&self) -> Option<&Region> {
        self.environment()
            .and_then(|env| env.region.as_ref())
            .or(self.region.as_ref())
    }

    /// The resolved base URL, if resolution has happened.
    pub fn base_url(&self) -> Option<&Url> {
        self.environment().map(|env| &env.base_url)
    }

    /// Resolve the environment now instead of on first use.
    ///
    /// The outcome is cached, `Unmatched` included, so candidates are
    /// requested at most once per client. A transport failure during discovery
    /// is not cached.
    pub async fn resolve(&self) -> Result<Resolution, Error> {
        Ok(self.resolution().await?.clone())
    }

    async fn resolution(&self) -> Result<&Resolution, Error> {
        self.resolution
            .get_or_try_init(|| {
                environment::resolve(
                    &self.transport,
                    self.account_type,
                    self.region.as_ref(),
                    &self.endpoints,
                )
            })
            .await
    }

    async fn current_environment(&self) -> Result<Option<&Environment>, Error> {
        Ok(self.resolution().await?.environment())
    }

    // ── Primitives ───────────────────────────────────────────────────

    /// `GET <path>/<query>`
    pub async fn get(&self, path: &str, query: impl Into<Query>) -> Result<ApiResponse, Error> {
        let request = prepare_request(path, &query.into());
        self.dispatch(Method::GET, &request, None).await
    }

    /// `POST <path>` with a JSON body. The path is sent as given.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse, Error> {
        let payload = serde_json::to_string(body)?;
        self.dispatch(Method::POST, path, Some(payload)).await
    }

    /// `POST <path>` with an empty body.
    pub async fn post_empty(&self, path: &str) -> Result<ApiResponse, Error> {
        self.dispatch(Method::POST, path, None).await
    }

    /// `DELETE <path>/<query>`
    pub async fn remove(&self, path: &str, query: impl Into<Query>) -> Result<ApiResponse, Error> {
        let request = prepare_request(path, &query.into());
        self.dispatch(Method::DELETE, &request, None).await
    }

    /// `POST multimedia/` with a multipart file body.
    pub async fn upload(&self, blob: &Blob) -> Result<ApiResponse, Error> {
        let Some(env) = self.current_environment().await? else {
            return Ok(no_match());
        };
        self.transport.upload(&env.base_url, blob).await
    }

    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<ApiResponse, Error> {
        let Some(env) = self.current_environment().await? else {
            debug!(%method, path, "no environment matched, skipping request");
            return Ok(no_match());
        };
        self.transport.send(&env.base_url, path, method, body).await
    }
}

fn no_match() -> ApiResponse {
    ApiResponse::Synthesized(ErrorDescriptor::no_matching_environment())
}

/// Normalize a read/delete path to end in exactly one `/`, then append the
/// encoded query string.
pub fn prepare_request(path: &str, query: &Query) -> String {
    let mut request = path.trim().trim_end_matches('/').to_owned();
    request.push('/');
    request.push_str(&query::encode(query));
    request
}

/// `?fields=...&` for single-resource reads. An empty slice still yields
/// the bare `?`, same as passing no fields to the API's other clients.
pub(crate) fn fields(fields: &[&str]) -> QueryParams {
    QueryParams::new().fields(fields)
}
