// Environment resolution.
//
// Retail accounts live on a single global host. Enterprise accounts live on
// one of several regional hosts; when the caller doesn't say which, each
// candidate is tried with `GET accounts` until one accepts the credentials.

use std::fmt;
use std::str::FromStr;

use reqwest::Method;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::Error;
use crate::response::ErrorDescriptor;
use crate::transport::Transport;

pub const RETAIL_BASE_URL: &str = "https://api.getresponse.com/v3/";
pub const ENTERPRISE_PL_BASE_URL: &str = "https://api3.getresponse360.pl/v3/";
pub const ENTERPRISE_US_BASE_URL: &str = "https://api3.getresponse360.com/v3/";

/// Path requested against each candidate host during discovery.
pub const DISCOVERY_PATH: &str = "accounts";

// ── Account type ────────────────────────────────────────────────────

/// Deployment variant of the API the account belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountType {
    /// GetResponse Enterprise (a.k.a. 360): regional hosts, `X-DOMAIN` header.
    Enterprise,
    /// Regular (SMB) accounts on the global host.
    #[default]
    Retail,
}

impl AccountType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Enterprise => "enterprise",
            Self::Retail => "retail",
        }
    }
}

impl FromStr for AccountType {
    type Err = Error;

    /// Accepts `enterprise`/`360` and `retail`/`smb` (case-insensitive).
    /// An empty string is the default, `Retail`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "360" | "enterprise" => Ok(Self::Enterprise),
            "" | "retail" | "smb" => Ok(Self::Retail),
            _ => Err(Error::InvalidAccountType(s.to_owned())),
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Region ──────────────────────────────────────────────────────────

/// Enterprise deployment region.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Region {
    Pl,
    Us,
    /// Anything else; resolved by discovery.
    Unknown(String),
}

impl Region {
    /// Parse a region code. Empty input means "not specified".
    pub fn parse(code: &str) -> Option<Self> {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }
        Some(match code.to_ascii_lowercase().as_str() {
            "pl" => Self::Pl,
            "us" => Self::Us,
            _ => Self::Unknown(code.to_owned()),
        })
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Pl => "pl",
            Self::Us => "us",
            Self::Unknown(code) => code,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Endpoints ───────────────────────────────────────────────────────

/// The fixed set of base URLs.
///
/// Defaults to the production hosts; override as a whole to route through
/// a proxy or a mock server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub retail: Url,
    pub enterprise_pl: Url,
    pub enterprise_us: Url,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            retail: Url::parse(RETAIL_BASE_URL).expect("valid retail base URL"),
            enterprise_pl: Url::parse(ENTERPRISE_PL_BASE_URL).expect("valid PL base URL"),
            enterprise_us: Url::parse(ENTERPRISE_US_BASE_URL).expect("valid US base URL"),
        }
    }
}

impl Endpoints {
    /// Build a custom endpoint set. Each base gets a trailing slash so
    /// relative request paths append cleanly.
    pub fn new(retail: Url, enterprise_pl: Url, enterprise_us: Url) -> Self {
        Self {
            retail: with_trailing_slash(retail),
            enterprise_pl: with_trailing_slash(enterprise_pl),
            enterprise_us: with_trailing_slash(enterprise_us),
        }
    }

    /// Base URL for a known Enterprise region.
    pub fn enterprise(&self, region: &Region) -> Option<&Url> {
        match region {
            Region::Pl => Some(&self.enterprise_pl),
            Region::Us => Some(&self.enterprise_us),
            Region::Unknown(_) => None,
        }
    }

    /// Enterprise candidates in discovery order.
    pub fn candidates(&self) -> Vec<EnvironmentDescriptor> {
        [Region::Pl, Region::Us]
            .into_iter()
            .filter_map(|region| {
                self.enterprise(&region).map(|url| EnvironmentDescriptor {
                    account_type: AccountType::Enterprise,
                    base_url: url.clone(),
                    region,
                })
            })
            .collect()
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

// ── Resolution ──────────────────────────────────────────────────────

/// A candidate mapping from (account type, region) to a base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentDescriptor {
    pub account_type: AccountType,
    pub region: Region,
    pub base_url: Url,
}

/// The environment a client talks to, once known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub account_type: AccountType,
    /// `None` for Retail accounts.
    pub region: Option<Region>,
    pub base_url: Url,
}

/// Outcome of environment resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Matched(Environment),
    /// Every candidate was rejected: probably an SMB account configured as
    /// Enterprise, or wrong credentials.
    Unmatched(ErrorDescriptor),
}

impl Resolution {
    pub fn environment(&self) -> Option<&Environment> {
        match self {
            Self::Matched(env) => Some(env),
            Self::Unmatched(_) => None,
        }
    }
}

/// Resolve without network access, when the configuration alone decides
/// the base URL. Returns `None` if discovery is required.
pub fn resolve_static(
    account_type: AccountType,
    region: Option<&Region>,
    endpoints: &Endpoints,
) -> Option<Environment> {
    match account_type {
        AccountType::Retail => Some(Environment {
            account_type,
            region: None,
            base_url: endpoints.retail.clone(),
        }),
        AccountType::Enterprise => {
            let region = region?;
            endpoints.enterprise(region).map(|url| Environment {
                account_type,
                region: Some(region.clone()),
                base_url: url.clone(),
            })
        }
    }
}

/// Resolve the base URL for an account, trying Enterprise candidates when
/// the region is missing or unknown.
pub async fn resolve(
    transport: &Transport,
    account_type: AccountType,
    region: Option<&Region>,
    endpoints: &Endpoints,
) -> Result<Resolution, Error> {
    if let Some(env) = resolve_static(account_type, region, endpoints) {
        return Ok(Resolution::Matched(env));
    }
    discover(transport, &endpoints.candidates()).await
}

/// Try candidates in order, adopting the first that answers with a
/// non-HTML status of 299 or below.
///
/// Attempts are sequential and stop at the first match. Only transport
/// failures are returned as `Err`.
pub async fn discover(
    transport: &Transport,
    candidates: &[EnvironmentDescriptor],
) -> Result<Resolution, Error> {
    for candidate in candidates {
        debug!(region = %candidate.region, base_url = %candidate.base_url, "trying environment");

        let resp = transport
            .send(&candidate.base_url, DISCOVERY_PATH, Method::GET, None)
            .await?;

        if resp.is_environment_error() {
            debug!(region = %candidate.region, "host served an HTML page, trying next region");
            continue;
        }

        if resp.status() <= 299 {
            info!(region = %candidate.region, base_url = %candidate.base_url, "environment resolved");
            return Ok(Resolution::Matched(Environment {
                account_type: candidate.account_type,
                region: Some(candidate.region.clone()),
                base_url: candidate.base_url.clone(),
            }));
        }

        debug!(region = %candidate.region, status = resp.status(), "candidate rejected");
    }

    warn!("no environment accepted the credentials");
    Ok(Resolution::Unmatched(
        ErrorDescriptor::no_matching_environment(),
    ))
}
