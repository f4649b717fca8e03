//! Config subcommand handlers.

use std::fmt::Write;

use getresponse_api::Region;
use getresponse_config::parse_account_type;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config, Profile};
use crate::error::CliError;

// ── Helpers ─────────────────────────────────────────────────────────

/// Format config for display, masking the plaintext API key.
fn format_config_redacted(cfg: &Config) -> String {
    let mut out = String::new();

    if let Some(ref default) = cfg.default_profile {
        let _ = writeln!(out, "default_profile = \"{default}\"");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "[defaults]");
    let _ = writeln!(out, "output = \"{}\"", cfg.defaults.output);
    let _ = writeln!(out, "timeout = {}", cfg.defaults.timeout);

    let mut names: Vec<_> = cfg.profiles.keys().collect();
    names.sort();
    for name in names {
        let p = &cfg.profiles[name];
        let _ = writeln!(out);
        let _ = writeln!(out, "[profiles.{name}]");
        let _ = writeln!(out, "account_type = \"{}\"", p.account_type);
        if p.api_key.is_some() {
            let _ = writeln!(out, "api_key = \"****\"");
        }
        if let Some(ref env) = p.api_key_env {
            let _ = writeln!(out, "api_key_env = \"{env}\"");
        }
        if let Some(ref region) = p.region {
            let _ = writeln!(out, "region = \"{region}\"");
        }
        if let Some(ref domain) = p.domain {
            let _ = writeln!(out, "domain = \"{domain}\"");
        }
        if let Some(timeout) = p.timeout {
            let _ = writeln!(out, "timeout = {timeout}");
        }
    }

    out
}

/// Profile built from the global flags.
fn profile_from_flags(
    global: &GlobalOpts,
    api_key_env: Option<String>,
) -> Result<Profile, CliError> {
    let account_type = global.account_type.clone().unwrap_or_else(|| "retail".into());
    parse_account_type(&account_type)?;

    Ok(Profile {
        account_type,
        api_key: None,
        api_key_env,
        region: global.region.clone(),
        domain: global.domain.clone(),
        timeout: global.timeout,
    })
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Init ────────────────────────────────────────────────────
        ConfigCommand::Init {
            api_key_env,
            set_default,
            force,
        } => {
            let mut cfg = config::load_config_or_default();
            let profile_name = global.profile.clone().unwrap_or_else(|| "default".into());

            if cfg.profiles.contains_key(&profile_name) && !force {
                return Err(CliError::ProfileExists { name: profile_name });
            }

            let profile = profile_from_flags(global, api_key_env)?;
            cfg.profiles.insert(profile_name.clone(), profile);
            if set_default || cfg.profiles.len() == 1 {
                cfg.default_profile = Some(profile_name.clone());
            }

            config::save_config(&cfg)?;
            eprintln!(
                "✓ Profile '{profile_name}' written to {}",
                config::config_path().display()
            );
            if cfg.profiles[&profile_name].api_key_env.is_none() {
                eprintln!("  Set a key with: gr config set api_key_env <VAR> --profile {profile_name}");
            }
            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let cfg = config::load_config_or_default();
            print!("{}", format_config_redacted(&cfg));
            Ok(())
        }

        // ── Path ────────────────────────────────────────────────────
        ConfigCommand::Path => {
            println!("{}", config::config_path().display());
            Ok(())
        }

        // ── Set <key> <value> ───────────────────────────────────────
        ConfigCommand::Set { key, value } => {
            let mut cfg = config::load_config_or_default();
            let profile_name = config::active_profile_name(global, &cfg);

            let profile = cfg.profiles.entry(profile_name.clone()).or_default();

            match key.as_str() {
                "account_type" | "account-type" => {
                    parse_account_type(&value)?;
                    profile.account_type = value;
                }
                "api_key" | "api-key" => profile.api_key = Some(value),
                "api_key_env" | "api-key-env" => profile.api_key_env = Some(value),
                "region" => {
                    profile.region = Region::parse(&value).map(|r| r.as_str().to_owned());
                }
                "domain" => profile.domain = (!value.is_empty()).then_some(value),
                "timeout" => {
                    profile.timeout = Some(value.parse().map_err(|_| CliError::Validation {
                        field: "timeout".into(),
                        reason: "must be a number (seconds)".into(),
                    })?);
                }
                other => {
                    return Err(CliError::Validation {
                        field: other.into(),
                        reason: format!(
                            "unknown config key '{other}'. Valid keys: account_type, api_key, \
                             api_key_env, region, domain, timeout"
                        ),
                    });
                }
            }

            config::save_config(&cfg)?;
            eprintln!("✓ Set {key} on profile '{profile_name}'");
            Ok(())
        }

        // ── Profiles ────────────────────────────────────────────────
        ConfigCommand::Profiles => {
            let cfg = config::load_config_or_default();
            let default = cfg.default_profile_name();
            if cfg.profiles.is_empty() {
                eprintln!("No profiles configured. Run: gr config init");
            } else {
                let mut names: Vec<_> = cfg.profiles.keys().collect();
                names.sort();
                for name in names {
                    let marker = if name == default { " *" } else { "" };
                    println!("{name}{marker}");
                }
            }
            Ok(())
        }

        // ── Use <name> ──────────────────────────────────────────────
        ConfigCommand::Use { name } => {
            let mut cfg = config::load_config_or_default();

            if !cfg.profiles.contains_key(&name) {
                return Err(CliError::ProfileNotFound {
                    available: config::available_profiles(&cfg),
                    name,
                });
            }

            cfg.default_profile = Some(name.clone());
            config::save_config(&cfg)?;
            eprintln!("✓ Default profile set to '{name}'");
            Ok(())
        }
    }
}
