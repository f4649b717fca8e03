//! Clap derive structures for the `gr` CLI.
//!
//! Defines the command tree, global flags, and shared argument groups.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// gr -- call the GetResponse v3 API from the command line
#[derive(Debug, Parser)]
#[command(
    name = "gr",
    version,
    about = "Call the GetResponse v3 API from the command line",
    long_about = "A thin CLI over the GetResponse v3 REST API.\n\n\
        Works with Retail (SMB) accounts and GetResponse Enterprise (360)\n\
        accounts; the Enterprise region is discovered when not configured.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Account profile to use
    #[arg(long, short = 'p', env = "GETRESPONSE_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Account type: retail (smb) or enterprise (360)
    #[arg(long, short = 't', env = "GETRESPONSE_ACCOUNT_TYPE", global = true)]
    pub account_type: Option<String>,

    /// API key (overrides profile)
    #[arg(long, env = "GETRESPONSE_API_KEY", global = true, hide_env = true)]
    pub api_key: Option<String>,

    /// Enterprise region (pl, us); discovered when omitted
    #[arg(long, env = "GETRESPONSE_REGION", global = true)]
    pub region: Option<String>,

    /// Enterprise domain, sent as X-DOMAIN
    #[arg(long, env = "GETRESPONSE_DOMAIN", global = true)]
    pub domain: Option<String>,

    /// Send every request to this base URL instead of the API hosts
    #[arg(long, env = "GETRESPONSE_BASE_URL", global = true, hide = true)]
    pub base_url: Option<String>,

    /// Output format [default: from config, else json]
    #[arg(long, short = 'o', env = "GETRESPONSE_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Request timeout in seconds
    #[arg(long, env = "GETRESPONSE_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output Enum ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Response body exactly as received
    Raw,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Send a GET request to an API path
    Get(RequestArgs),

    /// Send a DELETE request to an API path
    #[command(alias = "rm")]
    Delete(RequestArgs),

    /// Send a POST request with a JSON body
    Post(PostArgs),

    /// Upload a file to the multimedia library
    Upload(UploadArgs),

    /// Resolve and show the API environment for the account
    Env,

    /// Print the query string the given flags encode to (offline)
    Encode(QueryArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Shared Query Arguments ───────────────────────────────────────────

/// Query-string flags shared by `get`, `delete`, and `encode`.
#[derive(Debug, Default, Args)]
pub struct QueryArgs {
    /// Filter: KEY=VALUE -> query[KEY]. createdOn, sendOn and changedOn also
    /// take KEY.BOUND=VALUE for a date range (createdOn.from=2024-01-01); a
    /// comma in VALUE makes a list
    #[arg(long = "query", short = 'Q', value_name = "KEY=VALUE")]
    pub query: Vec<String>,

    /// Sort: KEY=asc|desc -> sort[KEY]
    #[arg(long, short = 'S', value_name = "KEY=DIR")]
    pub sort: Vec<String>,

    /// Flat top-level parameter: KEY=VALUE
    #[arg(long, short = 'P', value_name = "KEY=VALUE")]
    pub param: Vec<String>,

    /// Comma-separated fields to return
    #[arg(long, value_name = "A,B")]
    pub fields: Option<String>,

    /// Page number
    #[arg(long)]
    pub page: Option<u32>,

    /// Results per page (max 1000)
    #[arg(long)]
    pub per_page: Option<u32>,

    /// Pre-built query string, sent as given
    #[arg(
        long,
        value_name = "QUERY",
        conflicts_with_all = ["query", "sort", "param", "fields", "page", "per_page"]
    )]
    pub raw_query: Option<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  REQUESTS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct RequestArgs {
    /// API path relative to the base URL (e.g. contacts, campaigns/abc)
    pub path: String,

    #[command(flatten)]
    pub query: QueryArgs,
}

#[derive(Debug, Args)]
pub struct PostArgs {
    /// API path relative to the base URL, sent as given
    pub path: String,

    /// JSON body, or @FILE to read it from a file. Omit for an empty body
    #[arg(long, short = 'd', value_name = "JSON|@FILE")]
    pub data: Option<String>,
}

#[derive(Debug, Args)]
pub struct UploadArgs {
    /// File to upload
    pub file: PathBuf,

    /// Name to store the file under [default: file name]
    #[arg(long)]
    pub name: Option<String>,

    /// Content type [default: guessed from the extension]
    #[arg(long)]
    pub content_type: Option<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create or replace a profile from the global flags
    Init {
        /// Environment variable the API key is read from
        #[arg(long, value_name = "VAR")]
        api_key_env: Option<String>,

        /// Make this the default profile
        #[arg(long)]
        set_default: bool,

        /// Overwrite an existing profile
        #[arg(long)]
        force: bool,
    },

    /// Display current configuration (secrets masked)
    Show,

    /// Print the config file path
    Path,

    /// Set a value on the active profile
    Set {
        /// Profile key (account_type, api_key, api_key_env, region, domain, timeout)
        key: String,

        /// Value to set
        value: String,
    },

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
