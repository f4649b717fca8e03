//! CLI config: thin wrapper around `getresponse_config` adding
//! `GlobalOpts`-aware profile and flag resolution.

use std::time::Duration;

use clap::ValueEnum;
use secrecy::SecretString;
use url::Url;

use getresponse_api::{ClientConfig, Endpoints};
pub use getresponse_config::{Config, Profile, config_path, load_config_or_default, save_config};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;

// ── Profile resolution ───────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .unwrap_or_else(|| config.default_profile_name().to_owned())
}

/// Comma-separated profile names for help text.
pub fn available_profiles(config: &Config) -> String {
    let mut names: Vec<_> = config.profiles.keys().cloned().collect();
    if names.is_empty() {
        return "(none)".into();
    }
    names.sort();
    names.join(", ")
}

/// Output format: flag > config default > json.
pub fn output_format(global: &GlobalOpts, config: &Config) -> OutputFormat {
    global.output.unwrap_or_else(|| {
        OutputFormat::from_str(&config.defaults.output, true).unwrap_or(OutputFormat::Json)
    })
}

/// Apply CLI flag overrides on top of a profile.
fn apply_overrides(mut profile: Profile, global: &GlobalOpts) -> Profile {
    if let Some(ref account_type) = global.account_type {
        profile.account_type.clone_from(account_type);
    }
    if let Some(ref region) = global.region {
        profile.region = Some(region.clone());
    }
    if let Some(ref domain) = global.domain {
        profile.domain = Some(domain.clone());
    }
    if let Some(timeout) = global.timeout {
        profile.timeout = Some(timeout);
    }
    profile
}

/// Build a `ClientConfig` from the config file, the active profile, and
/// CLI overrides.
///
/// An explicitly requested profile must exist. Without one, a missing
/// default profile is fine as long as flags/env supply the API key.
pub fn build_client_config(global: &GlobalOpts, config: &Config) -> Result<ClientConfig, CliError> {
    let profile_name = active_profile_name(global, config);

    let base = match config.profiles.get(&profile_name) {
        Some(profile) => profile.clone(),
        None if global.profile.is_some() => {
            return Err(CliError::ProfileNotFound {
                name: profile_name,
                available: available_profiles(config),
            });
        }
        None => Profile::default(),
    };
    let profile = apply_overrides(base, global);

    // 1. --api-key flag (or GETRESPONSE_API_KEY via clap's env)
    // 2. Profile credential chain
    let api_key = match global.api_key {
        Some(ref key) => SecretString::from(key.clone()),
        None => getresponse_config::resolve_api_key(&profile, &profile_name)?,
    };

    let mut client_config = getresponse_config::build_client_config(
        &profile,
        &api_key,
        Duration::from_secs(config.defaults.timeout),
    )?;

    if let Some(ref base_url) = global.base_url {
        let url = Url::parse(base_url).map_err(|e| CliError::Validation {
            field: "base-url".into(),
            reason: e.to_string(),
        })?;
        client_config =
            client_config.with_endpoints(Endpoints::new(url.clone(), url.clone(), url));
    }

    Ok(client_config)
}
